use crate::components::common::{ComponentId, Route};

/// Page, focus and loop flags of the running application
#[derive(Debug)]
pub struct StateManager {
    pub route: Route,
    pub active_component: ComponentId,
    pub quit: bool,
    pub redraw: bool,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            route: Route::default(),
            active_component: Route::default().component_id(),
            quit: false,
            redraw: true,
        }
    }

    /// Switch page. Focus moves to the new page unless a popup holds it.
    pub fn navigate(&mut self, route: Route) {
        log::debug!("Route transition: {:?} -> {:?}", self.route, route);
        let page_focused = self.active_component == self.route.component_id();
        self.route = route;
        if page_focused {
            self.active_component = route.component_id();
        }
        self.redraw = true;
    }

    /// Set the active component
    pub fn set_active_component(&mut self, component: ComponentId) {
        self.active_component = component;
        self.redraw = true;
    }

    /// Give focus back to the current page
    pub fn focus_page(&mut self) {
        self.set_active_component(self.route.component_id());
    }

    /// Signal application shutdown
    pub fn shutdown(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    /// Mark redraw as complete
    pub fn redraw_complete(&mut self) {
        self.redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_moves_focus_with_the_page() {
        let mut state = StateManager::new();
        state.redraw_complete();

        state.navigate(Route::Contact);
        assert_eq!(state.route, Route::Contact);
        assert_eq!(state.active_component, ComponentId::ContactPage);
        assert!(state.needs_redraw());
    }

    #[test]
    fn test_navigate_keeps_popup_focus() {
        let mut state = StateManager::new();
        state.set_active_component(ComponentId::ThemePicker);

        state.navigate(Route::About);
        assert_eq!(state.active_component, ComponentId::ThemePicker);

        state.focus_page();
        assert_eq!(state.active_component, ComponentId::AboutPage);
    }
}
