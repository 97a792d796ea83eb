use crate::validation::{ContactFormValidator, FieldValidationError, MAX_MESSAGE_LEN, Validator};

/// Contact form fields, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "your@email.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Tell us more...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, ContactField::Message)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Values of the four contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Contact page state: the form being edited, focus and the last validation
/// failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    form: ContactForm,
    focus: ContactField,
    errors: Vec<(ContactField, FieldValidationError)>,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn error_for(&self, field: ContactField) -> Option<&FieldValidationError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let field = self.focus;
        let value = self.form.value_mut(field);
        if value.chars().count() < MAX_MESSAGE_LEN {
            value.push(c);
        }
        self.clear_error(field);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.form.value_mut(field).pop();
        self.clear_error(field);
    }

    /// Line break in the message body; other fields are single line.
    pub fn newline(&mut self) {
        if self.focus.is_multiline() {
            self.form.message.push('\n');
        }
    }

    fn clear_error(&mut self, field: ContactField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    /// Validate and, on success, hand back the submitted form and reset.
    ///
    /// On failure the errors are kept for display and focus moves to the first
    /// invalid field.
    pub fn submit(&mut self) -> Result<ContactForm, Vec<(ContactField, FieldValidationError)>> {
        match ContactFormValidator.validate(&self.form) {
            Ok(()) => {
                let submitted = std::mem::take(&mut self.form);
                self.focus = ContactField::default();
                self.errors.clear();
                Ok(submitted)
            }
            Err(errors) => {
                if let Some((field, _)) = errors.first() {
                    self.focus = *field;
                }
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut ContactState, text: &str) {
        for c in text.chars() {
            state.input(c);
        }
    }

    fn filled_state() -> ContactState {
        let mut state = ContactState::new();
        type_text(&mut state, "Ada Lovelace");
        state.focus_next();
        type_text(&mut state, "ada@example.com");
        state.focus_next();
        type_text(&mut state, "Themes");
        state.focus_next();
        type_text(&mut state, "Hello");
        state.newline();
        type_text(&mut state, "there");
        state
    }

    #[test]
    fn test_submit_resets_form() {
        let mut state = filled_state();
        let submitted = state.submit().unwrap();

        assert_eq!(submitted.name, "Ada Lovelace");
        assert_eq!(submitted.message, "Hello\nthere");
        assert_eq!(state.form(), &ContactForm::default());
        assert_eq!(state.focus(), ContactField::Name);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_submit_empty_form_reports_every_field() {
        let mut state = ContactState::new();
        state.focus_previous();

        let errors = state.submit().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(state.focus(), ContactField::Name);
        for field in ContactField::ALL {
            assert!(state.error_for(field).is_some());
        }
    }

    #[test]
    fn test_invalid_email_keeps_values() {
        let mut state = filled_state();
        state.focus_previous();
        state.focus_previous();
        for _ in 0.."@example.com".len() {
            state.backspace();
        }

        let errors = state.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ContactField::Email);
        assert_eq!(state.focus(), ContactField::Email);
        assert_eq!(state.form().name, "Ada Lovelace");
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut state = ContactState::new();
        let _ = state.submit();
        assert!(state.error_for(ContactField::Name).is_some());

        state.input('A');
        assert!(state.error_for(ContactField::Name).is_none());
        assert!(state.error_for(ContactField::Email).is_some());
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut state = ContactState::new();
        state.newline();
        assert_eq!(state.form().name, "");
    }
}
