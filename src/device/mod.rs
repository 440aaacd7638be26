//! Air mouse device link
//!
//! Reads telemetry from the board over serial and turns it into [`Reading`]s.

pub mod frame;
pub mod serial;

pub use frame::{parse_frame, Axes3, Reading, FIELD_COUNT};
pub use serial::{SerialTransport, Transport};
