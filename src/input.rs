//! Folds winit window events into one [`FrameInput`] per tick.

use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

use crate::{cursor::Pointer, navigation::Zoom, screen};

/// What the navigator should do this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// At most one zoom per tick. Zoom-in wins if both buttons are held.
    pub zoom: Option<Zoom>,
    pub recenter: bool,
    pub reset: bool,
    pub pointer: Pointer,
}

#[derive(Debug, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    middle_pressed: bool,
    space_pressed: bool,
    /// Last position reported by the window system, origin top-left.
    cursor_position: (f64, f64),
}

impl InputState {
    pub fn handle(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.left_held = pressed,
                    MouseButton::Right => self.right_held = pressed,
                    MouseButton::Middle if pressed => self.middle_pressed = true,
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Space),
                        ..
                    },
                ..
            } => {
                self.space_pressed = true;
            }
            WindowEvent::Focused(false) => {
                self.left_held = false;
                self.right_held = false;
            }
            _ => {}
        }
    }

    /// Snapshot the held buttons and consume the one-shot presses.
    pub fn take_frame(&mut self, screen: screen::Size) -> FrameInput {
        let zoom = if self.left_held {
            Some(Zoom::In)
        } else if self.right_held {
            Some(Zoom::Out)
        } else {
            None
        };
        let (x, y) = self.cursor_position;

        FrameInput {
            zoom,
            recenter: std::mem::take(&mut self.middle_pressed),
            reset: std::mem::take(&mut self.space_pressed),
            pointer: Pointer::from_top_left(x, y, screen),
        }
    }
}
