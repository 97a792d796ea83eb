//! Input validation for the contact form.
//!
//! The [`Validator`] trait is shared with the engine. Field validators here
//! check one string each; [`ContactFormValidator`] runs them over a whole form
//! and collects every failure so the form can flag all invalid fields at once.

use crate::app::contact_state::{ContactField, ContactForm};

pub use engine::validation::Validator;

/// Longest accepted value per field, in characters.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SUBJECT_LEN: usize = 150;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Field validation errors with user-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    Empty {
        field_name: String,
    },
    InvalidFormat {
        field_name: String,
        expected_format: String,
    },
    TooLong {
        field_name: String,
        max_length: usize,
        actual_length: usize,
    },
}

impl FieldValidationError {
    pub fn empty(field_name: impl Into<String>) -> Self {
        Self::Empty {
            field_name: field_name.into(),
        }
    }

    pub fn invalid_format(
        field_name: impl Into<String>,
        expected_format: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field_name: field_name.into(),
            expected_format: expected_format.into(),
        }
    }

    pub fn too_long(
        field_name: impl Into<String>,
        max_length: usize,
        actual_length: usize,
    ) -> Self {
        Self::TooLong {
            field_name: field_name.into(),
            max_length,
            actual_length,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Empty { field_name } => format!("{field_name} is required"),
            Self::InvalidFormat {
                field_name,
                expected_format,
            } => format!("{field_name} must be {expected_format}"),
            Self::TooLong {
                field_name,
                max_length,
                actual_length,
            } => format!(
                "{field_name} is too long ({actual_length} characters, maximum {max_length})"
            ),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for FieldValidationError {}

/// Rejects blank input and input longer than `max_length` characters.
pub struct RequiredFieldValidator {
    field_name: String,
    max_length: Option<usize>,
}

impl RequiredFieldValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            max_length: None,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl Validator<str> for RequiredFieldValidator {
    type Error = FieldValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Err(FieldValidationError::empty(&self.field_name));
        }

        let length = input.chars().count();
        if let Some(max_length) = self.max_length {
            if length > max_length {
                return Err(FieldValidationError::too_long(
                    &self.field_name,
                    max_length,
                    length,
                ));
            }
        }

        Ok(())
    }
}

/// Email address shape check: `local@domain` with a dotted domain and no
/// whitespace. Deliverability is not checked.
pub struct EmailValidator {
    field_name: String,
}

impl EmailValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validator<str> for EmailValidator {
    type Error = FieldValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let input = input.trim();
        let invalid = || FieldValidationError::invalid_format(&self.field_name, "a valid email address");

        if input.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let Some((local, domain)) = input.split_once('@') else {
            return Err(invalid());
        };

        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(invalid());
        }

        if labels
            .iter()
            .any(|label| label.starts_with('-') || label.ends_with('-'))
        {
            return Err(invalid());
        }

        Ok(())
    }
}

/// Validates a complete contact form.
pub struct ContactFormValidator;

impl ContactFormValidator {
    fn field_validator(field: ContactField) -> RequiredFieldValidator {
        let max_length = match field {
            ContactField::Name => MAX_NAME_LEN,
            ContactField::Email => MAX_EMAIL_LEN,
            ContactField::Subject => MAX_SUBJECT_LEN,
            ContactField::Message => MAX_MESSAGE_LEN,
        };
        RequiredFieldValidator::new(field.label()).with_max_length(max_length)
    }
}

impl Validator<ContactForm> for ContactFormValidator {
    type Error = Vec<(ContactField, FieldValidationError)>;

    fn validate(&self, form: &ContactForm) -> Result<(), Self::Error> {
        let mut errors = Vec::new();

        for field in ContactField::ALL {
            let value = form.value(field);
            let result = Self::field_validator(field).validate(value).and_then(|_| {
                if field == ContactField::Email {
                    EmailValidator::new(field.label()).validate(value)
                } else {
                    Ok(())
                }
            });

            if let Err(e) = result {
                errors.push((field, e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
