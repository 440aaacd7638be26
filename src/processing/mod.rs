//! Sensor interpretation
//!
//! Pure functions that turn a [`Reading`](crate::device::Reading) into
//! motion and click intents. No smoothing or filtering is applied.

pub mod click;
pub mod motion;

pub use click::{detect_click, ClickAction};
pub use motion::{classify, classify_axis, AxisFlag, MotionIntent};
