use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, ThemeActivityMsg};
use engine::ThemeSnapshot;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::TogglePicker => self.handle_toggle_picker(),
            ThemeActivityMsg::ThemePickerClosed => self.handle_theme_picker_closed(),
            ThemeActivityMsg::ThemeSelected(key) => self.handle_theme_selected(key),
            ThemeActivityMsg::QuickSwitch(index) => self.handle_quick_switch(index),
            ThemeActivityMsg::NextTheme => self.handle_next_theme(),
            ThemeActivityMsg::StateChanged(snapshot) => self.handle_state_changed(snapshot),
        }
    }

    fn handle_toggle_picker(&mut self) -> Option<Msg> {
        let result = if self.app.mounted(&ComponentId::ThemePicker) {
            self.unmount_theme_picker()
        } else {
            self.mount_theme_picker()
        };

        if let Err(e) = result {
            self.error_reporter
                .report_simple(e, "ThemePicker", "toggle");
        }
        None
    }

    fn handle_theme_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Theme picker closed");

        if let Err(e) = self.unmount_theme_picker() {
            self.error_reporter
                .report_simple(e, "ThemePicker", "picker_closed");
        }
        None
    }

    fn handle_theme_selected(&mut self, key: String) -> Option<Msg> {
        log::info!("Switching to theme '{key}'");

        // Close the picker first so the transition is visible on the page
        if let Err(e) = self.unmount_theme_picker() {
            self.error_reporter
                .report_simple(e, "ThemePicker", "unmount_picker");
        }
        self.store.switch_theme(&key);
        None
    }

    fn handle_quick_switch(&mut self, index: usize) -> Option<Msg> {
        match self.store.available_themes().into_iter().nth(index) {
            Some((key, name)) => {
                log::info!("Quick switch to '{name}'");
                self.store.switch_theme(&key);
            }
            None => log::debug!("No theme at position {}", index + 1),
        }
        None
    }

    fn handle_next_theme(&mut self) -> Option<Msg> {
        let themes = self.store.available_themes();
        let current = self.store.active_key();
        let next = themes
            .iter()
            .position(|(key, _)| *key == current)
            .map_or(0, |i| (i + 1) % themes.len());

        if let Some((key, _)) = themes.get(next) {
            self.store.switch_theme(key);
        }
        None
    }

    /// The store moved: rebuild the context and redraw everything with it.
    fn handle_state_changed(&mut self, snapshot: ThemeSnapshot) -> Option<Msg> {
        log::debug!(
            "Theme state changed: active='{}' transitioning={}",
            snapshot.active_key,
            snapshot.is_transitioning
        );

        self.refresh_theme_context();
        if let Err(e) = self.remount_all() {
            log::error!("Failed to remount after theme change: {e}");
            return Some(Msg::Error(e));
        }
        None
    }
}
