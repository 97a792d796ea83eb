use crate::app::model::Model;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::notice_popup::NoticePopup;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_popup(&mut self, msg: PopupActivityMsg) -> Option<Msg> {
        let result = match msg {
            PopupActivityMsg::ShowError(error) => self.mount_error_notice(&error),
            PopupActivityMsg::ShowWarning(message) => {
                self.mount_notice(NoticePopup::warning(message, self.ctx.palette))
            }
            PopupActivityMsg::ShowSuccess(message) => {
                self.mount_notice(NoticePopup::success(message, self.ctx.palette))
            }
            PopupActivityMsg::CloseError => self.unmount_notice(),
        };

        if let Err(e) = result {
            log::error!("Failed to update notice popup: {e}");
            return Some(Msg::Error(e));
        }
        None
    }

    pub fn mount_error_notice(&mut self, error: &AppError) -> AppResult<()> {
        self.mount_notice(NoticePopup::error(error, self.ctx.palette))
    }
}
