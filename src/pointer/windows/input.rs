use crate::bridge::channel::{BridgeError, BridgeResult};
use crate::pointer::{ButtonPhase, MouseButton, PointerBackend, PointerResult};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    mouse_event, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_RIGHTDOWN,
    MOUSEEVENTF_RIGHTUP,
};
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, SetCursorPos};

/// Win32 cursor control
pub struct SystemPointer;

impl SystemPointer {
    pub fn new() -> BridgeResult<Self> {
        Ok(Self)
    }
}

impl PointerBackend for SystemPointer {
    fn cursor_position(&self) -> PointerResult<(i32, i32)> {
        let mut pos = POINT::default();
        unsafe { GetCursorPos(&mut pos) }
            .map_err(|e| BridgeError::Pointer(format!("GetCursorPos failed: {}", e)))?;
        Ok((pos.x, pos.y))
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> PointerResult<()> {
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| BridgeError::Pointer(format!("SetCursorPos failed: {}", e)))
    }

    fn emit_button_event(
        &self,
        button: MouseButton,
        phase: ButtonPhase,
        x: i32,
        y: i32,
    ) -> PointerResult<()> {
        let flags = match (button, phase) {
            (MouseButton::Left, ButtonPhase::Down) => MOUSEEVENTF_LEFTDOWN,
            (MouseButton::Left, ButtonPhase::Up) => MOUSEEVENTF_LEFTUP,
            (MouseButton::Right, ButtonPhase::Down) => MOUSEEVENTF_RIGHTDOWN,
            (MouseButton::Right, ButtonPhase::Up) => MOUSEEVENTF_RIGHTUP,
        };

        // dx/dy only apply with MOUSEEVENTF_MOVE; the click lands at the
        // cursor, which the caller just read as (x, y)
        unsafe { mouse_event(flags, x, y, 0, 0) };
        Ok(())
    }
}
