//! Plaudit CLI entrypoint for add-on review moderation.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use plaudit::cli;
use plaudit::{OperationMode, PlauditConfig, StorefrontError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StorefrontError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::ReviewTui => cli::review_tui::run(&config).await,
        OperationMode::Summary => cli::summary::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StorefrontError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<PlauditConfig, StorefrontError> {
    PlauditConfig::load().map_err(|error| StorefrontError::Configuration {
        message: error.to_string(),
    })
}
