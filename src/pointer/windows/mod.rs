//! Windows pointer backend
//!
//! Uses the Win32 cursor functions and `mouse_event` for clicks.

pub mod input;

pub use input::*;
