//! Theme records, validation and the read-only registry of available themes.
//!
//! A theme is a named bundle of colour, layout and typography tokens. The
//! [`ThemeRegistry`] is built once at startup from the embedded
//! `themes/builtin.toml`, optionally merged with a user theme file, and is the
//! only authority on which theme keys exist.

pub mod registry;
pub mod types;
pub mod validation;

pub use registry::{BUILTIN_THEMES, RegistryError, ThemeRegistry};
pub use types::{LayoutType, Rgb, Spacing, TextColors, Theme, ThemeColors, ThemeLayout, Typography};
pub use validation::{
    ColorTokenValidator, ThemeKeyValidator, ThemeValidationError, ThemeValidator,
};
