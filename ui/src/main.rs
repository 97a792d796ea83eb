use clap::Parser;
use std::path::PathBuf;
use vitrine::app::application_lifecycle::ApplicationLifecycle;

/// Terminal storefront with runtime-switchable themes
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
struct Args {
    /// Path to a configuration file (defaults to ./config.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not read or write the selected theme
    #[arg(long)]
    no_persist: bool,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = ApplicationLifecycle::load_configuration(args.config.as_deref())?;
    if args.no_persist {
        config.disable_persistence();
    }
    if let Some(level) = args.log_level {
        config.override_log_level(level);
    }

    if let Err(e) = vitrine::logger::setup_logger(config.logging()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut model = ApplicationLifecycle::initialize(config).await?;
    ApplicationLifecycle::setup_terminal(&mut model)?;

    let loop_result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;

    loop_result
}
