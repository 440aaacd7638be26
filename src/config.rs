//! Bridge configuration
//!
//! Thresholds, step size and polling cadence are fixed per build. The
//! polling interval must match the delay the firmware waits between frames;
//! a mismatch makes frames queue up or get skipped but never corrupts them,
//! since each read is parsed from its first line onwards.

use crate::bridge::channel::{BridgeError, BridgeResult};
use serde::Serialize;
use std::time::Duration;

#[cfg(target_os = "windows")]
const DEFAULT_PORT: &str = "COM3";

#[cfg(not(target_os = "windows"))]
const DEFAULT_PORT: &str = "/dev/ttyACM0";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Serial port identifier (e.g. "COM3", "/dev/ttyACM0")
    pub port: String,
    /// Serial baud rate
    pub baud_rate: u32,
    /// Accelerometer threshold for the x axis (raw sensor units)
    pub threshold_x: i32,
    /// Accelerometer threshold for the y axis (raw sensor units)
    pub threshold_y: i32,
    /// Pixels moved per axis on each triggered cycle
    pub one_move: i32,
    /// Polling period, must equal the device send period
    pub interval: Duration,
    /// Maximum bytes taken from the port per cycle
    pub read_buffer_size: usize,
    /// Wait after opening the port so the board can reset
    pub settle_delay: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud_rate: 115_200,
            threshold_x: 5000,
            threshold_y: 5000,
            one_move: 30,
            interval: Duration::from_millis(100),
            read_buffer_size: 255,
            settle_delay: Duration::from_millis(2000),
        }
    }
}

impl BridgeConfig {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.port.trim().is_empty() {
            return Err(BridgeError::Configuration(
                "port must not be empty".to_string(),
            ));
        }
        if self.baud_rate == 0 {
            return Err(BridgeError::Configuration(
                "baud_rate must be non-zero".to_string(),
            ));
        }
        if self.threshold_x < 0 || self.threshold_y < 0 {
            return Err(BridgeError::Configuration(format!(
                "thresholds must be non-negative, got ({}, {})",
                self.threshold_x, self.threshold_y
            )));
        }
        if self.one_move <= 0 {
            return Err(BridgeError::Configuration(format!(
                "one_move must be positive, got {}",
                self.one_move
            )));
        }
        if self.interval.is_zero() {
            return Err(BridgeError::Configuration(
                "interval must be non-zero".to_string(),
            ));
        }
        if self.read_buffer_size == 0 {
            return Err(BridgeError::Configuration(
                "read_buffer_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
