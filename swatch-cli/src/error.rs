use swatch::ParseColorError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
