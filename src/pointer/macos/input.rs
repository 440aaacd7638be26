use crate::bridge::channel::{BridgeError, BridgeResult};
use crate::pointer::{ButtonPhase, MouseButton, PointerBackend, PointerResult};
use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

/// Quartz cursor control
pub struct SystemPointer;

impl SystemPointer {
    pub fn new() -> BridgeResult<Self> {
        // Fail at startup rather than on the first cycle
        event_source()?;
        Ok(Self)
    }
}

fn event_source() -> PointerResult<CGEventSource> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| BridgeError::Pointer("failed to create CGEventSource".to_string()))
}

fn point(x: i32, y: i32) -> CGPoint {
    CGPoint::new(x as f64, y as f64)
}

impl PointerBackend for SystemPointer {
    fn cursor_position(&self) -> PointerResult<(i32, i32)> {
        // An empty event carries the current global cursor location
        let event = CGEvent::new(event_source()?)
            .map_err(|_| BridgeError::Pointer("failed to create CGEvent".to_string()))?;
        let location = event.location();
        Ok((location.x.round() as i32, location.y.round() as i32))
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> PointerResult<()> {
        CGDisplay::warp_mouse_cursor_position(point(x, y))
            .map_err(|e| BridgeError::Pointer(format!("cursor warp failed (CGError {})", e)))
    }

    fn emit_button_event(
        &self,
        button: MouseButton,
        phase: ButtonPhase,
        x: i32,
        y: i32,
    ) -> PointerResult<()> {
        let (event_type, cg_button) = match (button, phase) {
            (MouseButton::Left, ButtonPhase::Down) => {
                (CGEventType::LeftMouseDown, CGMouseButton::Left)
            }
            (MouseButton::Left, ButtonPhase::Up) => (CGEventType::LeftMouseUp, CGMouseButton::Left),
            (MouseButton::Right, ButtonPhase::Down) => {
                (CGEventType::RightMouseDown, CGMouseButton::Right)
            }
            (MouseButton::Right, ButtonPhase::Up) => {
                (CGEventType::RightMouseUp, CGMouseButton::Right)
            }
        };

        let event = CGEvent::new_mouse_event(event_source()?, event_type, point(x, y), cg_button)
            .map_err(|_| BridgeError::Pointer(format!("failed to create {:?} event", phase)))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }
}
