use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid theme.default_key '{configured}': {reason}")]
    DefaultThemeKey { configured: String, reason: String },
    #[error("Invalid theme.{name}: {configured} (limit: {limit})")]
    TransitionDelay {
        name: &'static str,
        configured: u64,
        limit: u64,
    },
    #[error("Invalid ui.poll_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    PollTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid ui.tick_interval_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid ui.cell_width_px: {configured} (min: {min_limit}, max: {max_limit})")]
    CellWidth {
        configured: u16,
        min_limit: u16,
        max_limit: u16,
    },
    #[error("Invalid ui.worker_tasks: {configured} (limit: {limit})")]
    WorkerTasks { configured: usize, limit: usize },
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::DefaultThemeKey { configured, reason } => {
                format!(
                    "Default theme key is not valid!\n\n\
                    Your configured value: {configured}\n\
                    Problem: {reason}\n\n\
                    Please update default_key in the [theme] section of config.toml."
                )
            }
            ConfigValidationError::TransitionDelay {
                name,
                configured,
                limit,
            } => {
                format!(
                    "Theme transition delay too long!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update {name} in the [theme] section of config.toml."
                )
            }
            ConfigValidationError::PollTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Poll timeout out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update poll_timeout_ms in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_ms in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::CellWidth {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Cell width out of range!\n\n\
                    Your configured value: {configured} px\n\
                    Valid range: {min_limit} - {max_limit} px\n\n\
                    Please update cell_width_px in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::WorkerTasks { configured, limit } => {
                format!(
                    "Worker task count out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: 1 - {limit}\n\n\
                    Please update worker_tasks in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Accepted values: trace, debug, info, warn, error, off\n\n\
                    Please update level in the [logging] section of config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
