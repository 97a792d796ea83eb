use crate::theme::types::{Rgb, Theme};
use crate::validation::Validator;
use thiserror::Error;

/// Validation errors specific to theme records and registry keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("Invalid theme key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("Invalid color token '{field}' = '{value}': {reason}")]
    InvalidColor {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Missing theme field: '{field}'")]
    MissingField { field: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidKey { key, reason } => {
                format!(
                    "Invalid theme key: '{key}'\n\n\
                    Reason: {reason}\n\n\
                    Please use valid theme keys (alphanumeric, hyphens, underscores only)."
                )
            }
            ThemeValidationError::InvalidColor {
                field,
                value,
                reason,
            } => {
                format!(
                    "Invalid color for '{field}': '{value}'\n\n\
                    Reason: {reason}\n\n\
                    Please use six digit hex colors such as '#2563eb'."
                )
            }
            ThemeValidationError::MissingField { field } => {
                format!(
                    "Missing theme field: '{field}'\n\n\
                    Please ensure the theme defines every color, layout and typography token."
                )
            }
        }
    }
}

/// Validator for registry keys
pub struct ThemeKeyValidator;

impl Validator<str> for ThemeKeyValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidKey {
            key: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Key cannot be empty"));
        }

        if input.len() > 50 {
            return Err(invalid("Key too long (max 50 characters)"));
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(
                "Key contains invalid characters (only alphanumeric, hyphens, and underscores allowed)",
            ));
        }

        if input.starts_with(['-', '_']) || input.ends_with(['-', '_']) {
            return Err(invalid(
                "Key cannot start or end with hyphens or underscores",
            ));
        }

        Ok(())
    }
}

/// Validator for `#rrggbb` colour tokens
pub struct ColorTokenValidator;

impl<'a> Validator<(&'a str, &'a str)> for ColorTokenValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &(&'a str, &'a str)) -> Result<(), Self::Error> {
        let (field, value) = *input;
        if !value.starts_with('#') {
            return Err(ThemeValidationError::InvalidColor {
                field: field.to_string(),
                value: value.to_string(),
                reason: "Color must start with '#'".to_string(),
            });
        }

        Rgb::parse(value)
            .map(|_| ())
            .map_err(|reason| ThemeValidationError::InvalidColor {
                field: field.to_string(),
                value: value.to_string(),
                reason: reason.to_string(),
            })
    }
}

/// Validator for complete theme records
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        if input.name.trim().is_empty() {
            return Err(ThemeValidationError::MissingField {
                field: "name".to_string(),
            });
        }

        let color_validator = ColorTokenValidator;
        for token in input.colors.tokens() {
            color_validator.validate(&token)?;
        }

        let typography = [
            ("typography.font_family", &input.typography.font_family),
            ("typography.heading_size", &input.typography.heading_size),
            ("typography.body_size", &input.typography.body_size),
        ];
        for (field, value) in typography {
            if value.trim().is_empty() {
                return Err(ThemeValidationError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_key_validator() {
        let validator = ThemeKeyValidator;

        // Valid keys
        assert!(validator.validate("theme1").is_ok());
        assert!(validator.validate("professional-dark").is_ok());
        assert!(validator.validate("high_contrast").is_ok());

        // Invalid keys
        assert!(validator.validate("").is_err());
        assert!(validator.validate("_hidden").is_err());
        assert!(validator.validate("trailing-").is_err());
        assert!(validator.validate("with space").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_color_token_validator() {
        let validator = ColorTokenValidator;

        assert!(validator.validate(&("primary", "#2563eb")).is_ok());
        assert!(validator.validate(&("primary", "2563eb")).is_err());
        assert!(validator.validate(&("primary", "#25")).is_err());
        assert!(validator.validate(&("primary", "blue")).is_err());
    }

    #[test]
    fn test_user_message_mentions_offending_value() {
        let error = ThemeValidationError::InvalidColor {
            field: "accent".to_string(),
            value: "orange".to_string(),
            reason: "Color must start with '#'".to_string(),
        };
        let message = error.user_message();
        assert!(message.contains("accent"));
        assert!(message.contains("orange"));
    }
}
