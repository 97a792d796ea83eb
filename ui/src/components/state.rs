use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Lifecycle hook run right before a component is handed to the application.
pub trait ComponentState {
    /// Prepare the component for display (load data, reset selection, ...)
    fn mount(&mut self) -> AppResult<()>;
}

/// Mounting helpers that run [`ComponentState::mount`] first.
pub trait ComponentStateMount {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;

    /// Replace an already mounted component, or mount it if it is missing.
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl ComponentStateMount for Application<ComponentId, Msg, NoUserEvent> {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;

        self.mount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;

        let result = if self.mounted(&id) {
            self.remount(id, Box::new(component), subs)
        } else {
            self.mount(id, Box::new(component), subs)
        };
        result.map_err(|e| AppError::Component(e.to_string()))
    }
}
