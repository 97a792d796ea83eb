use super::Model;
use crate::components::about::AboutPage;
use crate::components::common::{ComponentId, Route};
use crate::components::contact::ContactPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::notice_popup::NoticePopup;
use crate::components::sidebar::Sidebar;
use crate::components::state::ComponentStateMount;
use crate::components::theme_picker::{ThemeOption, ThemePicker};
use crate::error::{AppError, AppResult};
use crate::theme::ThemeContext;
use tuirealm::terminal::TerminalAdapter;

/// Width the notice popup is laid out for
pub const NOTICE_WIDTH: u16 = 60;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Rebuild the theme context from the last observed store snapshot.
    pub fn refresh_theme_context(&mut self) {
        let snapshot = self.theme_rx.borrow().clone();
        self.ctx = ThemeContext::for_snapshot(
            self.store.registry(),
            &snapshot,
            self.config.ui().cell_width_px(),
        );
    }

    pub fn remount_chrome(&mut self) -> AppResult<()> {
        let route = self.state_manager.route;
        self.app.remount_with_state(
            ComponentId::Header,
            Header::new(self.ctx.clone(), route),
            Vec::default(),
        )?;
        self.app.remount_with_state(
            ComponentId::Sidebar,
            Sidebar::new(self.ctx.clone(), route),
            Vec::default(),
        )
    }

    /// Mount the page for the current route and drop the others.
    pub fn remount_page(&mut self) -> AppResult<()> {
        let route = self.state_manager.route;
        for other in Route::ALL.iter().filter(|r| **r != route) {
            let id = other.component_id();
            if self.app.mounted(&id) {
                self.app
                    .umount(&id)
                    .map_err(|e| AppError::Component(e.to_string()))?;
            }
        }

        let ctx = self.ctx.clone();
        match route {
            Route::Home => self.app.remount_with_state(
                ComponentId::HomePage,
                HomePage::new(ctx, self.catalog.clone()),
                Vec::default(),
            ),
            Route::About => self.app.remount_with_state(
                ComponentId::AboutPage,
                AboutPage::new(ctx),
                Vec::default(),
            ),
            Route::Contact => self.app.remount_with_state(
                ComponentId::ContactPage,
                ContactPage::new(ctx, self.contact.clone()),
                Vec::default(),
            ),
        }
    }

    /// Remount everything that draws with the theme.
    pub fn remount_all(&mut self) -> AppResult<()> {
        self.remount_chrome()?;
        self.remount_page()?;
        if self.app.mounted(&ComponentId::ThemePicker) {
            self.mount_theme_picker()?;
        }
        self.state_manager.set_redraw(true);
        self.activate_current()
    }

    /// Remount the current page after its state changed.
    pub fn refresh_page(&mut self) -> AppResult<()> {
        self.remount_page()?;
        self.state_manager.set_redraw(true);
        self.activate_current()
    }

    /// Hand keyboard focus to the component the state manager names.
    pub fn activate_current(&mut self) -> AppResult<()> {
        let id = self.state_manager.active_component.clone();
        self.app
            .active(&id)
            .map_err(|e| AppError::Component(format!("Failed to activate {id:?}: {e}")))
    }

    pub fn mount_theme_picker(&mut self) -> AppResult<()> {
        let options = ThemeOption::from_registry(self.store.registry());
        self.app.remount_with_state(
            ComponentId::ThemePicker,
            ThemePicker::new(self.ctx.clone(), options),
            Vec::default(),
        )?;
        if self.notice_height.is_none() {
            self.state_manager
                .set_active_component(ComponentId::ThemePicker);
        }
        self.activate_current()
    }

    pub fn unmount_theme_picker(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::ThemePicker) {
            self.app
                .umount(&ComponentId::ThemePicker)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        if self.notice_height.is_none() {
            self.state_manager.focus_page();
        }
        self.activate_current()
    }

    /// Show `popup`, replacing any notice already on screen.
    pub fn mount_notice(&mut self, popup: NoticePopup) -> AppResult<()> {
        self.notice_height = Some(popup.preferred_height(NOTICE_WIDTH));
        self.app
            .remount_with_state(ComponentId::NoticePopup, popup, Vec::default())?;
        self.state_manager
            .set_active_component(ComponentId::NoticePopup);
        self.activate_current()
    }

    pub fn unmount_notice(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::NoticePopup) {
            self.app
                .umount(&ComponentId::NoticePopup)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        self.notice_height = None;

        // Back to the picker if one was open underneath
        if self.app.mounted(&ComponentId::ThemePicker) {
            self.state_manager
                .set_active_component(ComponentId::ThemePicker);
        } else {
            self.state_manager.focus_page();
        }
        self.activate_current()
    }
}
