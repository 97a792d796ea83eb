use crate::theme::types::{Theme, ThemeColors, ThemeLayout, Typography};
use crate::theme::validation::{ThemeKeyValidator, ThemeValidationError, ThemeValidator};
use crate::validation::Validator;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Built-in themes embedded in the binary
pub const BUILTIN_THEMES: &str = include_str!("../../themes/builtin.toml");

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to parse theme registry: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read theme file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme registry is empty")]
    Empty,

    #[error("Theme registry does not declare a default theme")]
    NoDefault,

    #[error("Default theme '{0}' is not defined in the registry")]
    MissingDefault(String),

    #[error("Theme key '{0}' is defined more than once")]
    DuplicateKey(String),

    #[error("Theme '{key}' is invalid: {source}")]
    InvalidTheme {
        key: String,
        #[source]
        source: ThemeValidationError,
    },
}

/// On-disk shape of a registry file. `default` is optional so that user theme
/// files can add themes without redeclaring it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    default: Option<String>,
    #[serde(default)]
    themes: Vec<ThemeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeEntry {
    key: String,
    name: String,
    colors: ThemeColors,
    layout: ThemeLayout,
    typography: Typography,
}

impl ThemeEntry {
    fn into_pair(self) -> (String, Theme) {
        (
            self.key,
            Theme {
                name: self.name,
                colors: self.colors,
                layout: self.layout,
                typography: self.typography,
            },
        )
    }
}

/// Immutable mapping of theme key to theme record, the sole source of valid keys.
///
/// Keys keep their declaration order so pickers list themes the way the
/// registry file does.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    default_key: String,
    default_theme: Arc<Theme>,
    entries: Vec<(String, Arc<Theme>)>,
}

impl ThemeRegistry {
    /// Load the registry embedded in the binary
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_toml_str(BUILTIN_THEMES)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content)?;
        let default_key = file.default.ok_or(RegistryError::NoDefault)?;
        let entries = file.themes.into_iter().map(ThemeEntry::into_pair).collect();
        Self::from_entries(default_key, entries)
    }

    /// Build a registry from already parsed themes, validating every entry.
    pub fn from_entries(
        default_key: impl Into<String>,
        entries: Vec<(String, Theme)>,
    ) -> Result<Self, RegistryError> {
        let default_key = default_key.into();
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let key_validator = ThemeKeyValidator;
        let theme_validator = ThemeValidator;
        let mut validated: Vec<(String, Arc<Theme>)> = Vec::with_capacity(entries.len());

        for (key, theme) in entries {
            key_validator
                .validate(&key)
                .map_err(|source| RegistryError::InvalidTheme {
                    key: key.clone(),
                    source,
                })?;
            theme_validator
                .validate(&theme)
                .map_err(|source| RegistryError::InvalidTheme {
                    key: key.clone(),
                    source,
                })?;

            if validated.iter().any(|(existing, _)| *existing == key) {
                return Err(RegistryError::DuplicateKey(key));
            }
            validated.push((key, Arc::new(theme)));
        }

        let Some(default_theme) = validated
            .iter()
            .find(|(key, _)| *key == default_key)
            .map(|(_, theme)| Arc::clone(theme))
        else {
            return Err(RegistryError::MissingDefault(default_key));
        };

        log::debug!(
            "Theme registry loaded with {} themes (default: {default_key})",
            validated.len()
        );

        Ok(Self {
            default_key,
            default_theme,
            entries: validated,
        })
    }

    /// Merge a user theme file over this registry.
    ///
    /// Entries with an existing key replace that theme in place, new keys are
    /// appended. The file may also move the default to any key of the result.
    pub fn with_overrides(self, path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RegistryFile = toml::from_str(&content)?;

        let Self {
            default_key,
            default_theme,
            entries,
        } = self;
        drop(default_theme);

        let mut entries: Vec<(String, Theme)> = entries
            .into_iter()
            .map(|(key, theme)| (key, Arc::unwrap_or_clone(theme)))
            .collect();

        let mut seen_in_file: Vec<String> = Vec::new();
        for entry in file.themes {
            let (key, theme) = entry.into_pair();
            if seen_in_file.contains(&key) {
                return Err(RegistryError::DuplicateKey(key));
            }
            seen_in_file.push(key.clone());

            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => {
                    log::info!("Theme '{key}' overridden by {}", path.display());
                    slot.1 = theme;
                }
                None => {
                    log::info!("Theme '{key}' added from {}", path.display());
                    entries.push((key, theme));
                }
            }
        }

        let default_key = file.default.unwrap_or(default_key);
        Self::from_entries(default_key, entries)
    }

    /// Move the default to another registered key.
    pub fn with_default(mut self, key: &str) -> Result<Self, RegistryError> {
        let Some(theme) = self.get(key) else {
            return Err(RegistryError::MissingDefault(key.to_string()));
        };
        self.default_key = key.to_string();
        self.default_theme = theme;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<Arc<Theme>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, theme)| Arc::clone(theme))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn default_theme(&self) -> Arc<Theme> {
        Arc::clone(&self.default_theme)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Theme>)> {
        self.entries.iter().map(|(key, theme)| (key.as_str(), theme))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
