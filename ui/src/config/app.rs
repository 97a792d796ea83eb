use super::{
    CatalogConfig, LoggingConfig, ThemeSettings, UIConfig, limits::*,
    validation::ConfigValidationError,
};
use engine::validation::Validator;
use engine::theme::ThemeKeyValidator;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    theme: ThemeSettings,
    #[serde(default)]
    catalog: CatalogConfig,
    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(key) = self.theme.default_key() {
            if let Err(e) = ThemeKeyValidator.validate(key) {
                errors.push(ConfigValidationError::DefaultThemeKey {
                    configured: key.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        for (name, configured) in [
            ("apply_delay_ms", self.theme.apply_delay_ms()),
            ("settle_delay_ms", self.theme.settle_delay_ms()),
        ] {
            if configured > MAX_TRANSITION_PHASE_MS {
                errors.push(ConfigValidationError::TransitionDelay {
                    name,
                    configured,
                    limit: MAX_TRANSITION_PHASE_MS,
                });
            }
        }

        let poll = self.ui.poll_timeout_ms();
        if !(MIN_POLL_TIMEOUT_MS..=MAX_POLL_TIMEOUT_MS).contains(&poll) {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll,
                min_limit: MIN_POLL_TIMEOUT_MS,
                max_limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        let tick = self.ui.tick_interval_ms();
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let cell_width = self.ui.cell_width_px();
        if !(MIN_CELL_WIDTH_PX..=MAX_CELL_WIDTH_PX).contains(&cell_width) {
            errors.push(ConfigValidationError::CellWidth {
                configured: cell_width,
                min_limit: MIN_CELL_WIDTH_PX,
                max_limit: MAX_CELL_WIDTH_PX,
            });
        }

        let workers = self.ui.worker_tasks();
        if workers == 0 || workers > MAX_WORKER_TASKS {
            errors.push(ConfigValidationError::WorkerTasks {
                configured: workers,
                limit: MAX_WORKER_TASKS,
            });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// `--no-persist`: run without reading or writing the selected theme.
    pub fn disable_persistence(&mut self) {
        self.theme.set_persist(false);
    }

    pub fn override_log_level(&mut self, level: String) {
        self.logging.set_level(level);
    }
}
