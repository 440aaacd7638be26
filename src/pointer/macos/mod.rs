//! macOS pointer backend
//!
//! Posts Quartz events through core-graphics. Injecting clicks requires the
//! Accessibility permission for the terminal or binary running the bridge.

pub mod input;

pub use input::*;
