use super::Model;
use crate::components::common::{Msg, PopupActivityMsg, Route};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.state_manager.set_redraw(true);

        let result = match msg {
            Msg::AppClose => {
                self.shutdown();
                None
            }
            Msg::ForceRedraw => None,
            Msg::Navigate(route) => self.handle_navigate(route),
            Msg::ThemeActivity(msg) => self.update_theme(msg),
            Msg::CatalogActivity(msg) => self.update_catalog(msg),
            Msg::ContactActivity(msg) => self.update_contact(msg),
            Msg::PopupActivity(msg) => self.update_popup(msg),
            Msg::Error(e) => {
                log::error!("Error received: {e}");
                self.update_popup(PopupActivityMsg::ShowError(e))
            }
        };

        if let Some(Msg::Error(e)) = result {
            log::error!("Error from message processing: {e}");
            if let Err(err) = self.mount_error_notice(&e) {
                log::error!("Failed to mount error popup: {err}");
            }
            None
        } else {
            result
        }
    }

    fn handle_navigate(&mut self, route: Route) -> Option<Msg> {
        if route == self.state_manager.route {
            return None;
        }
        log::debug!("Navigating to {}", route.path());

        self.state_manager.navigate(route);
        let result = self
            .remount_chrome()
            .and_then(|()| self.remount_page())
            .and_then(|()| self.activate_current());
        result.err().map(Msg::Error)
    }
}
