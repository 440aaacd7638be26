//! Device-to-pointer bridge
//!
//! Owns the connection lifecycle and the fixed-rate sample loop.

pub mod channel;
pub mod sampler;

pub use channel::{BridgeError, BridgeResult};
pub use sampler::{CycleReport, Sampler};
