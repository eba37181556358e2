//! Error types for `FleetDesk` core library.

use thiserror::Error;

/// Result type alias using `FleetDesk` Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for `FleetDesk` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognised computer status
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}
