use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Log file used when the configuration does not name one. The TUI owns
/// stdout, so logs always go to a file.
pub const DEFAULT_LOG_FILE: &str = "vitrine.log";

pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger(logging: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let log_level = level_filter(logging.level());

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level)
        // Third-party crates stay at warn unless asked for explicitly
        .level_for("mio", LevelFilter::Warn);

    let file_path = Path::new(logging.file().unwrap_or(DEFAULT_LOG_FILE));

    match open_log_file(file_path) {
        Ok((file, path)) => {
            base_config.chain(file).apply()?;
            println!("Logging to file: {}", path.display());
        }
        Err(e) => {
            eprintln!("Warning: No writable log file ({e}), logging warnings to stderr.");
            // Only warnings and errors, the TUI shares the terminal
            base_config
                .chain(
                    fern::Dispatch::new()
                        .level(LevelFilter::Warn)
                        .chain(std::io::stderr()),
                )
                .apply()?;
        }
    }

    log::info!("Logger initialized with level: {}", logging.level());
    Ok(())
}

/// Open `path` for appending, falling back to [`DEFAULT_LOG_FILE`] in the
/// system temp directory.
pub fn open_log_file(path: &Path) -> std::io::Result<(File, PathBuf)> {
    match append_to(path) {
        Ok(file) => Ok((file, path.to_path_buf())),
        Err(e) => {
            let fallback = std::env::temp_dir().join(DEFAULT_LOG_FILE);
            eprintln!(
                "Warning: Failed to open log file '{}': {e}. Using {}",
                path.display(),
                fallback.display()
            );
            append_to(&fallback).map(|file| (file, fallback))
        }
    }
}

fn append_to(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn test_open_log_file_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let (_, opened) = assert_ok!(open_log_file(&path));
        assert_eq!(opened, path);
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_falls_back_to_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let (_, opened) = assert_ok!(open_log_file(&path));
        assert_eq!(opened, std::env::temp_dir().join(DEFAULT_LOG_FILE));
        assert!(!path.exists());
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter("TRACE"), LevelFilter::Trace);
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("error"), LevelFilter::Error);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("verbose"), LevelFilter::Info);
    }
}
