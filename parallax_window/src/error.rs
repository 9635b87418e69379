//! Error types for the parallax window
//!
//! Tracking failures are absorbed by the tracking feed and never reach the
//! frame loop. These errors surface at startup (config, device start) and
//! from the render substrate.

use std::fmt;

/// Result type for parallax window operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parallax window errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Capture device could not be opened by the tracking subsystem
    DeviceUnavailable(String),

    /// Initialization failed (tracker thread, window, subsystems)
    InitializationFailed(String),

    /// Configuration values violate an invariant (near >= far, zero size, ...)
    InvalidConfig(String),

    /// Configuration file could not be parsed or serialized
    ConfigParse(String),

    /// I/O failure (reading or writing a config file)
    Io(String),

    /// Render substrate failure (window update, presentation)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceUnavailable(msg) => write!(f, "Device unavailable: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
