//! Startup errors shared by every binary

use thiserror::Error;

/// Failures raised before the server accepts requests.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
