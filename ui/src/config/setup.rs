use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "vitrine";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDir(String),
}

/// Standard configuration directory for the current platform.
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/vitrine on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .ok_or_else(|| SetupError::ConfigDir("Unable to determine config directory".to_string()))
}

pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Default location of the selected-theme slot.
pub fn get_storage_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("storage.json");
    Ok(config_dir)
}
