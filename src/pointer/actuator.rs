//! Applies motion and click intents to the host pointer
//!
//! Both operations are best-effort. A failed pointer call is logged and the
//! cycle carries on; nothing is retried.

use crate::pointer::{ButtonPhase, MouseButton, PointerBackend};
use crate::processing::{ClickAction, MotionIntent};

/// Move the cursor `one_move` pixels per active axis.
///
/// A positive flag moves towards the origin (left / up), a negative flag
/// away from it. Returns the requested displacement, or `(0, 0)` if the
/// pointer call failed. Clamping at a screen edge is up to the OS and is
/// not reflected in the result.
pub fn apply_motion<P: PointerBackend + ?Sized>(
    pointer: &P,
    intent: MotionIntent,
    one_move: i32,
) -> (i32, i32) {
    let (x, y) = match pointer.cursor_position() {
        Ok(pos) => pos,
        Err(e) => {
            tracing::warn!("Skipping move: {}", e);
            return (0, 0);
        }
    };

    let dx = -intent.axis_x.value() * one_move;
    let dy = -intent.axis_y.value() * one_move;

    let (target_x, target_y) = (x.saturating_add(dx), y.saturating_add(dy));
    if let Err(e) = pointer.set_cursor_position(target_x, target_y) {
        tracing::warn!("Move to ({}, {}) failed: {}", target_x, target_y, e);
        return (0, 0);
    }

    if dx != 0 || dy != 0 {
        tracing::debug!("Moved cursor by ({}, {}) from ({}, {})", dx, dy, x, y);
    }

    (dx, dy)
}

/// Emit a press immediately followed by a release at the cursor
pub fn apply_click<P: PointerBackend + ?Sized>(pointer: &P, action: ClickAction) {
    let button = match action {
        ClickAction::None => return,
        ClickAction::LeftClick => MouseButton::Left,
        ClickAction::RightClick => MouseButton::Right,
    };

    let (x, y) = match pointer.cursor_position() {
        Ok(pos) => pos,
        Err(e) => {
            tracing::warn!("Skipping {:?} click: {}", button, e);
            return;
        }
    };

    for phase in [ButtonPhase::Down, ButtonPhase::Up] {
        if let Err(e) = pointer.emit_button_event(button, phase, x, y) {
            tracing::warn!("{:?} {:?} at ({}, {}) failed: {}", button, phase, x, y, e);
        }
    }

    tracing::debug!("{:?} click at ({}, {})", button, x, y);
}
