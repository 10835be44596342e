//! Error types for the thermoprobe hardware library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when accessing hardware sensors.
#[derive(Error, Debug)]
pub enum Error {
    /// Component enumeration is not available on this platform.
    #[error("hardware sensor enumeration is not supported on this platform")]
    Unsupported,
}
