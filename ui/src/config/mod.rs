//! Configuration loading.
//!
//! Sources, lowest priority first:
//!
//! 1. `config.toml` in the user config directory (optional)
//! 2. `config.toml` in the working directory, or the file passed with `--config`
//! 3. `VITRINE__<SECTION>__<KEY>` environment variables (a `.env` file is read first)
//!
//! Every key is optional; missing values fall back to the defaults documented
//! on each accessor. The loaded [`AppConfig`] is validated once and then handed
//! around as an `Arc`, never through a global.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod catalog;
pub mod limits;
pub mod setup;
pub mod theme;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use theme::ThemeSettings;
pub use ui::UIConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `VITRINE__THEME__DEFAULT_KEY`.
pub const ENV_PREFIX: &str = "VITRINE";

const ENV_SEPARATOR: &str = "__";
const LOCAL_CONFIG_NAME: &str = "config";

/// Load the configuration. `path` replaces the working-directory `config.toml`
/// and, unlike it, must exist.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();
    load_config_without_dotenv(path)
}

/// [`load_config`] minus the `.env` file, so tests control the environment.
pub fn load_config_without_dotenv(path: Option<&Path>) -> ConfigLoadResult {
    let mut builder = Config::builder();

    match setup::get_config_file_path() {
        Ok(user_file) => {
            builder = builder.add_source(File::from(user_file).required(false));
        }
        Err(e) => log::debug!("No user config directory: {e}"),
    }

    builder = match path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => builder.add_source(File::with_name(LOCAL_CONFIG_NAME).required(false)),
    };

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// `[logging]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub(crate) fn set_level(&mut self, level: String) {
        self.level = Some(level);
    }
}
