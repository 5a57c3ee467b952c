use winit::event::{ElementState, VirtualKeyCode};

use crate::camera::Movement;

/// Maps a key event to the camera move it triggers.
///
/// Only presses move the camera; auto-repeated presses move it again.
pub fn movement_for(state: ElementState, key: Option<VirtualKeyCode>) -> Option<Movement> {
    if state != ElementState::Pressed {
        return None;
    }

    match key? {
        VirtualKeyCode::W => Some(Movement::Forward),
        VirtualKeyCode::S => Some(Movement::Backward),
        VirtualKeyCode::A => Some(Movement::Left),
        VirtualKeyCode::D => Some(Movement::Right),
        _ => None,
    }
}

/// Returns true if the key event asks to close the window.
pub fn is_exit(state: ElementState, key: Option<VirtualKeyCode>) -> bool {
    state == ElementState::Pressed && key == Some(VirtualKeyCode::Escape)
}
