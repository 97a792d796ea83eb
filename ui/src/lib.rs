//! # Vitrine UI Library
//!
//! Terminal storefront built with Ratatui and tui-realm. It renders the home
//! (catalog), about and contact pages with whichever theme is active, and lets
//! the user switch themes at runtime through a picker or quick keys.
//!
//! ## Modules
//!
//! - [`app`] - Application model, lifecycle and message handling
//! - [`components`] - Pages, chrome and popups
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging setup
//! - [`theme`] - Terminal palette and typography derived from the active theme
//! - [`validation`] - Contact form validation
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::AppError;

pub use components::common::Msg;

pub use validation::Validator;
