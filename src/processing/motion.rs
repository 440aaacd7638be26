//! Acceleration to direction classification
//!
//! Each axis is compared against a symmetric threshold with no hysteresis:
//! a value hovering around the threshold flips direction on every sample.

/// Direction intent on one screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisFlag {
    Negative = -1,
    #[default]
    Neutral = 0,
    Positive = 1,
}

impl AxisFlag {
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// Per-cycle motion intent derived from the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionIntent {
    pub axis_x: AxisFlag,
    pub axis_y: AxisFlag,
}

impl MotionIntent {
    pub fn new(axis_x: AxisFlag, axis_y: AxisFlag) -> Self {
        Self { axis_x, axis_y }
    }

    pub fn is_idle(&self) -> bool {
        self.axis_x == AxisFlag::Neutral && self.axis_y == AxisFlag::Neutral
    }
}

/// Classify a single reading against `threshold`
pub fn classify_axis(value: i32, threshold: i32) -> AxisFlag {
    if value > threshold {
        AxisFlag::Positive
    } else if value < -threshold {
        AxisFlag::Negative
    } else {
        AxisFlag::Neutral
    }
}

/// Classify both accelerometer axes independently
pub fn classify(accel_x: i32, accel_y: i32, threshold_x: i32, threshold_y: i32) -> MotionIntent {
    MotionIntent {
        axis_x: classify_axis(accel_x, threshold_x),
        axis_y: classify_axis(accel_y, threshold_y),
    }
}
