// Standard library
use std::path::Path;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::error;

// Project modules
mod cli;
mod functions;
mod logging;
mod models;
mod providers;
mod reconciler;
mod settings;
mod utility;

// Project imports
use crate::cli::functions::EXIT_USAGE;
use crate::cli::{usage_exit_code, Cli};
use crate::logging::init_logging;
use crate::settings::constants::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL};
use crate::settings::Settings;

/// Entry point for a single DNS sync run.
///
/// Discovers the public address of each supported family, compares it with
/// what the record currently resolves to and, when they differ, writes the
/// record through the selected provider and verifies the echo.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    let settings = match Settings::load(cli.config.as_deref(), cli.provider) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(DEFAULT_LOG_LEVEL, Path::new(DEFAULT_LOG_DIRECTORY)).ok();
            error!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if let Err(e) = init_logging(&settings.get_log_level(), &settings.log.directory) {
        eprintln!("Failed to install the logger: {}", e);
    }

    ExitCode::from(functions::run(&cli, &settings).await)
}
