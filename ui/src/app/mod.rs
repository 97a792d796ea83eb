//! # Application Module
//!
//! Core application logic for the Vitrine TUI: the model that owns the
//! tui-realm application, the lifecycle that starts and stops it, and the
//! message handlers that turn component events into state changes.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - Theme store handle, page state and mounted components
//! - **View** - Header, optional sidebar rail, the current page and popups
//! - **Updates** - Message handling and state transitions
//!
//! Page state ([`catalog_state`], [`contact_state`]) lives in the model.
//! Components are remounted from a fresh copy whenever it changes, and every
//! component is remounted when the theme store reports a new snapshot.
//!
//! ## Usage
//!
//! ```no_run
//! use vitrine::app::application_lifecycle::ApplicationLifecycle;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationLifecycle::load_configuration(None)?;
//!     let mut model = ApplicationLifecycle::initialize(config).await?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)?;
//!     Ok(())
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Home page state: feed, search, filters and selection
pub mod catalog_state;
/// Contact form state and submission
pub mod contact_state;
/// Component managers for different UI areas
pub mod managers;
/// Core application model and state structures
pub mod model;
/// Background task management and coordination
pub mod task_manager;
/// Message processing and state update logic
pub mod updates;
