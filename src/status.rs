use std::fmt;

use crate::{cursor::CursorOffset, viewport::Viewport};

/// What the viewer reports about the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Status {
    pub center_real: f64,
    pub center_imag: f64,
    pub width: f64,
    pub height: f64,
    pub iteration_budget: i32,
    pub frame_time: f64,
    pub cursor: CursorOffset,
}

impl Status {
    pub fn new(viewport: &Viewport, frame_time: f64, cursor: CursorOffset) -> Self {
        Self {
            center_real: viewport.center_real(),
            center_imag: viewport.center_imag(),
            width: viewport.width(),
            height: viewport.height(),
            iteration_budget: viewport.iteration_budget(),
            frame_time,
            cursor,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Real Part: {} | Imaginary Part: {} | Width: {} | Height: {} | Iterations: {} | {:.4}s | mouse.x: {} | mouse.y: {}",
            self.center_real,
            self.center_imag,
            self.width,
            self.height,
            self.iteration_budget,
            self.frame_time,
            self.cursor.dx,
            self.cursor.dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen;

    #[test]
    fn display_lists_every_field() {
        let screen = screen::Size::new(800, 400).unwrap();
        let viewport = Viewport::session_start(screen, 4096);
        let status = Status::new(&viewport, 0.016, CursorOffset { dx: 0.5, dy: -1.0 });

        assert_eq!(
            status.to_string(),
            "Real Part: -3.25 | Imaginary Part: -1.4 | Width: 5 | Height: 2.5 | Iterations: 4096 | 0.0160s | mouse.x: 0.5 | mouse.y: -1"
        );
    }
}
