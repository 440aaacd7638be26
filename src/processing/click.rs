//! Button to click detection
//!
//! Buttons are pulled up on the board, so a reading of 0 means pressed.
//! Every cycle with a pressed button produces a click; holding a button
//! repeats the click at the polling rate.

/// Click to emit this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickAction {
    #[default]
    None,
    LeftClick,
    RightClick,
}

/// Left wins when both buttons read as pressed
pub fn detect_click(left_button: i32, right_button: i32) -> ClickAction {
    if left_button == 0 {
        ClickAction::LeftClick
    } else if right_button == 0 {
        ClickAction::RightClick
    } else {
        ClickAction::None
    }
}
