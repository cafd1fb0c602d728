use crate::{screen, viewport::Viewport};

/// Pointer position in pixels, measured from the bottom-left corner of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Convert a window-system position (origin top-left, y down) to bottom-left origin.
    pub fn from_top_left(x: f64, y: f64, screen: screen::Size) -> Self {
        Self {
            x,
            y: screen.height() as f64 - y,
        }
    }
}

/// Plane-space distance from the viewport center to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorOffset {
    pub dx: f64,
    pub dy: f64,
}

impl CursorOffset {
    pub const ZERO: Self = CursorOffset { dx: 0.0, dy: 0.0 };
}

pub fn offset_from_center(
    pointer: Pointer,
    screen: screen::Size,
    viewport: &Viewport,
) -> CursorOffset {
    let screen_width = screen.width() as f64;
    let screen_height = screen.height() as f64;
    CursorOffset {
        dx: (pointer.x - screen_width / 2.0) / screen_width * viewport.width(),
        dy: (pointer.y - screen_height / 2.0) / screen_height * viewport.height(),
    }
}
