use crate::app::contact_state::ContactForm;
use crate::app::model::Model;
use crate::components::common::{ContactActivityMsg, Msg, PopupActivityMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_contact(&mut self, msg: ContactActivityMsg) -> Option<Msg> {
        match msg {
            ContactActivityMsg::Input(c) => self.contact.input(c),
            ContactActivityMsg::Backspace => self.contact.backspace(),
            ContactActivityMsg::Newline => self.contact.newline(),
            ContactActivityMsg::FocusNext => self.contact.focus_next(),
            ContactActivityMsg::FocusPrevious => self.contact.focus_previous(),
            ContactActivityMsg::Submit => return self.handle_submit(),
        }
        self.refresh_page().err().map(Msg::Error)
    }

    fn handle_submit(&mut self) -> Option<Msg> {
        let result = self.contact.submit();
        if let Err(e) = self.refresh_page() {
            return Some(Msg::Error(e));
        }

        match result {
            Ok(form) => {
                log::info!(
                    "Contact form submitted by {} <{}>: subject='{}', {} chars",
                    form.name,
                    form.email,
                    form.subject,
                    form.message.chars().count()
                );
                Some(Msg::PopupActivity(PopupActivityMsg::ShowSuccess(
                    confirmation_message(&form),
                )))
            }
            Err(errors) => {
                log::debug!("Contact form rejected with {} errors", errors.len());
                None
            }
        }
    }
}

/// Text of the notice shown after a successful submit.
pub fn confirmation_message(form: &ContactForm) -> String {
    format!(
        "Thanks {}, your message has been sent. We'll get back to you at {}.",
        form.name.trim(),
        form.email.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message_uses_trimmed_values() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com ".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };

        assert_eq!(
            confirmation_message(&form),
            "Thanks Ada, your message has been sent. We'll get back to you at ada@example.com."
        );
    }
}
