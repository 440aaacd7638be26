//! Host pointer control
//!
//! [`PointerBackend`] is the small slice of the OS pointer API the bridge
//! needs: read the cursor, warp it, and inject button events. Each platform
//! provides a `SystemPointer`; [`system_pointer`] picks the one for the
//! current target.

pub mod actuator;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

use crate::bridge::channel::BridgeResult;

pub use actuator::{apply_click, apply_motion};

#[cfg(target_os = "macos")]
use self::macos::input as platform;

#[cfg(target_os = "windows")]
use self::windows::input as platform;

/// Result type for pointer operations
pub type PointerResult<T> = BridgeResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    Down,
    Up,
}

/// OS pointer capability
pub trait PointerBackend {
    /// Current absolute cursor position in screen pixels
    fn cursor_position(&self) -> PointerResult<(i32, i32)>;

    /// Move the cursor to an absolute position. The OS clamps to the screen.
    fn set_cursor_position(&self, x: i32, y: i32) -> PointerResult<()>;

    /// Inject a single button transition at `(x, y)`
    fn emit_button_event(
        &self,
        button: MouseButton,
        phase: ButtonPhase,
        x: i32,
        y: i32,
    ) -> PointerResult<()>;
}

impl<P: PointerBackend + ?Sized> PointerBackend for Box<P> {
    fn cursor_position(&self) -> PointerResult<(i32, i32)> {
        (**self).cursor_position()
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> PointerResult<()> {
        (**self).set_cursor_position(x, y)
    }

    fn emit_button_event(
        &self,
        button: MouseButton,
        phase: ButtonPhase,
        x: i32,
        y: i32,
    ) -> PointerResult<()> {
        (**self).emit_button_event(button, phase, x, y)
    }
}

/// Pointer backend for the current platform
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub fn system_pointer() -> BridgeResult<Box<dyn PointerBackend>> {
    Ok(Box::new(platform::SystemPointer::new()?))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn system_pointer() -> BridgeResult<Box<dyn PointerBackend>> {
    Err(crate::bridge::channel::BridgeError::Platform(
        "pointer control not supported on this platform".to_string(),
    ))
}
