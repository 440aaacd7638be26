//! Bridge error types
//!
//! Only connection and configuration failures are fatal. Everything after
//! startup (reads, parsing, pointer calls) is best-effort and never surfaces
//! an error to the sample loop.

use thiserror::Error;

/// Errors that can occur while bridging the device to the pointer
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Device not connected: {0}")]
    NotConnected(String),

    #[error("Serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pointer error: {0}")]
    Pointer(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
