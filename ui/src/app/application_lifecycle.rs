//! Application lifecycle management
//!
//! This module handles the initialization, main loop, and shutdown of the application.
//! It assembles the theme registry, the selected-theme storage and the theme store
//! before handing them to the model.

use crate::app::model::Model;
use crate::components::common::Msg;
use crate::config::{self, AppConfig, ConfigLoadResult, ThemeSettings};
use crate::error::{AppError, ErrorReporter};
use engine::storage::{FileStore, KeyValueStore, MemoryStore};
use engine::taskpool::TaskPool;
use engine::{ThemeRegistry, ThemeStore};

use log::{debug, error, info, warn};
use std::error::Error as StdError;
use std::path::Path;
use std::sync::Arc;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Workers the theme store runs its transitions on
const THEME_STORE_WORKERS: usize = 2;

/// Theme registry plus the problems met while assembling it.
pub struct RegistrySetup {
    pub registry: ThemeRegistry,
    pub warnings: Vec<String>,
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Load and validate the configuration. Problems are printed before the
    /// terminal is taken over, then returned as an error.
    pub fn load_configuration(path: Option<&Path>) -> Result<AppConfig, Box<dyn StdError>> {
        let config = match config::load_config(path) {
            ConfigLoadResult::Success(config) => *config,
            ConfigLoadResult::LoadError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.clone()),
                    "ConfigurationLoader",
                    "load_config",
                    "Configuration loading failed. The application cannot start without a valid configuration.",
                );
                return Err(error.into());
            }
            ConfigLoadResult::DeserializeError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.clone()),
                    "ConfigurationParser",
                    "parse_config",
                    "Configuration parsing failed. Please fix your configuration syntax and try again.",
                );
                return Err(error.into());
            }
        };

        if let Err(validation_errors) = config.validate() {
            error!(
                "Configuration validation failed with {} errors",
                validation_errors.len()
            );
            for validation_error in &validation_errors {
                error!("Config validation error: {validation_error:?}");
                eprintln!("{}\n", validation_error.user_message());
            }
            return Err("Configuration validation failed".into());
        }

        Ok(config)
    }

    /// Initialize the application and return the configured model
    pub async fn initialize(
        config: AppConfig,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting Vitrine");

        let RegistrySetup { registry, warnings } = Self::build_registry(config.theme())?;
        let (storage, storage_warning) = Self::open_storage(config.theme());

        let store = ThemeStore::new(
            registry,
            storage,
            config.theme().timings(),
            TaskPool::new(THEME_STORE_WORKERS),
        );
        info!(
            "Theme store ready with '{}' active ({} themes)",
            store.active_key(),
            store.registry().len()
        );

        let model = Self::create_model(Arc::new(config), store).await?;

        // Non fatal setup problems become warning popups once the UI is up
        for warning in warnings.into_iter().chain(storage_warning) {
            model
                .error_reporter
                .report_theme_error("setup", warning);
        }

        Ok(model)
    }

    /// Built-in themes, merged with the user's theme file and default key.
    ///
    /// Only a broken built-in registry is fatal; a bad theme file or default
    /// key is skipped with a warning.
    pub fn build_registry(settings: &ThemeSettings) -> Result<RegistrySetup, Box<dyn StdError>> {
        let mut registry = ThemeRegistry::builtin().map_err(|e| {
            Self::report_critical_error(
                AppError::Theme(e.to_string()),
                "ThemeRegistry",
                "builtin",
                "The built-in themes could not be loaded. The application cannot start.",
            );
            e
        })?;
        let mut warnings = Vec::new();

        if let Some(path) = settings.themes_file() {
            match registry.clone().with_overrides(path) {
                Ok(merged) => registry = merged,
                Err(e) => {
                    warn!("Ignoring theme file {}: {e}", path.display());
                    warnings.push(format!("Ignoring theme file {}: {e}", path.display()));
                }
            }
        }

        if let Some(key) = settings.default_key() {
            match registry.clone().with_default(key) {
                Ok(updated) => registry = updated,
                Err(e) => {
                    warn!("Keeping default theme '{}': {e}", registry.default_key());
                    warnings.push(format!(
                        "{e}. Using '{}' as the default theme.",
                        registry.default_key()
                    ));
                }
            }
        }

        Ok(RegistrySetup { registry, warnings })
    }

    /// Storage for the selected theme. Falls back to memory when persistence
    /// is off or no location can be resolved.
    pub fn open_storage(settings: &ThemeSettings) -> (Arc<dyn KeyValueStore>, Option<String>) {
        if !settings.persist() {
            info!("Theme persistence disabled");
            return (Arc::new(MemoryStore::new()), None);
        }

        if let Some(path) = settings.storage_path() {
            debug!("Persisting theme selection to {}", path.display());
            return (Arc::new(FileStore::new(path.clone())), None);
        }

        match config::setup::get_storage_file_path() {
            Ok(path) => {
                debug!("Persisting theme selection to {}", path.display());
                (Arc::new(FileStore::new(path)), None)
            }
            Err(e) => {
                warn!("No storage location for the selected theme: {e}");
                (
                    Arc::new(MemoryStore::new()),
                    Some(format!(
                        "The selected theme will not be remembered between runs: {e}"
                    )),
                )
            }
        }
    }

    /// Create and initialize the application model
    async fn create_model(
        config: Arc<AppConfig>,
        store: ThemeStore,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config, store).await {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    AppError::Component(e.to_string()),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start. Please check your configuration and try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.state_manager.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    /// Process a single iteration of the main loop
    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        // Tick and handle messages
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        // Handle redraw if needed
        Self::handle_redraw(model)?;

        Ok(())
    }

    /// Handle tick errors by showing error popup
    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        let error = AppError::Component(format!("Application error: {err:?}"));
        if let Err(e) = model.mount_error_notice(&error) {
            error!("Failed to mount error popup: {e}");
            return Err(format!("Failed to display error: {err:?}").into());
        }
        model.state_manager.set_redraw(true);
        Ok(())
    }

    /// Process all received messages
    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.state_manager.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    /// Handle view redraw if needed
    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) -> Result<(), Box<dyn StdError>> {
        if model.state_manager.needs_redraw() {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                if let Err(popup_err) = model.mount_error_notice(&e) {
                    model
                        .error_reporter
                        .report_mount_error("NoticePopup", "mount", popup_err);
                }
            }
            model.state_manager.redraw_complete();
        }
        Ok(())
    }

    /// Properly shutdown the application
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        // Terminate terminal
        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }

    /// Report critical error and prepare for application exit
    fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        // No UI yet, so nothing listens on the channel
        let (tx, _rx) = std::sync::mpsc::channel();
        let error_reporter = ErrorReporter::new(tx);

        error_reporter.report_critical_and_exit(error, component, operation, user_message);

        eprintln!("Critical Error: {user_message}");
    }
}
