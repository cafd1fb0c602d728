//! The window onto the complex plane that the kernel rasterises.

use crate::screen;

/// Plane width restored by [`Viewport::reset`] and used at session start.
pub const WIDTH: f64 = 5.0;
/// Real coordinate restored by [`Viewport::reset`].
pub const REAL: f64 = -3.25;
/// Imaginary coordinate restored by [`Viewport::reset`].
pub const IMAGINARY: f64 = -1.5;

/// Real coordinate of the first frame of a session.
pub const SESSION_START_REAL: f64 = -3.25;
/// Imaginary coordinate of the first frame of a session. Differs from [`IMAGINARY`].
pub const SESSION_START_IMAGINARY: f64 = -1.4;

/// Lowest iteration budget the kernel is ever given.
pub const MIN_ITERATION_BUDGET: i32 = 100;

/// Plane rectangle plus iteration budget.
///
/// Invariants: `width > 0`, `height > 0`, `height == width * screen.height / screen.width`
/// after every reset or resize, and `iteration_budget >= MIN_ITERATION_BUDGET`.
///
/// Only [`crate::navigation::Navigator`] mutates a viewport; everything else sees `&Viewport`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) center_real: f64,
    pub(crate) center_imag: f64,
    pub(crate) iteration_budget: i32,
}

impl Viewport {
    pub fn session_start(screen: screen::Size, iteration_budget: i32) -> Self {
        Self {
            width: WIDTH,
            height: WIDTH * screen.aspect(),
            center_real: SESSION_START_REAL,
            center_imag: SESSION_START_IMAGINARY,
            iteration_budget: iteration_budget.max(MIN_ITERATION_BUDGET),
        }
    }

    /// Restore the default rectangle for `screen`: [`WIDTH`] wide, `WIDTH * screen.aspect()`
    /// high (2.5 on a 2:1 screen). The iteration budget is left alone.
    pub(crate) fn reset(&mut self, screen: screen::Size) {
        self.width = WIDTH;
        self.height = WIDTH * screen.aspect();
        self.center_real = REAL;
        self.center_imag = IMAGINARY;
    }

    /// Recompute the height from the current width for a new screen shape.
    pub(crate) fn lock_aspect(&mut self, screen: screen::Size) {
        self.height = self.width * screen.aspect();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    pub fn center_imag(&self) -> f64 {
        self.center_imag
    }

    pub fn iteration_budget(&self) -> i32 {
        self.iteration_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> screen::Size {
        screen::Size::new(width, height).unwrap()
    }

    #[test]
    fn session_start_uses_its_own_imaginary_default() {
        let viewport = Viewport::session_start(size(800, 400), 4096);

        assert_eq!(viewport.width(), 5.0);
        assert_eq!(viewport.height(), 2.5);
        assert_eq!(viewport.center_real(), -3.25);
        assert_eq!(viewport.center_imag(), -1.4);
        assert_eq!(viewport.iteration_budget(), 4096);
    }

    #[test]
    fn session_start_floors_the_budget() {
        let viewport = Viewport::session_start(size(800, 400), 3);
        assert_eq!(viewport.iteration_budget(), MIN_ITERATION_BUDGET);
    }

    #[test]
    fn reset_keeps_the_budget() {
        let mut viewport = Viewport::session_start(size(800, 400), 777);
        viewport.width = 0.01;
        viewport.center_real = 0.3;

        viewport.reset(size(800, 400));

        assert_eq!(viewport.width(), WIDTH);
        assert_eq!(viewport.height(), 2.5);
        assert_eq!(viewport.center_real(), REAL);
        assert_eq!(viewport.center_imag(), IMAGINARY);
        assert_eq!(viewport.iteration_budget(), 777);
    }

    #[test]
    fn lock_aspect_keeps_width_and_center() {
        let mut viewport = Viewport::session_start(size(800, 400), 100);
        viewport.lock_aspect(size(1000, 1000));

        assert_eq!(viewport.width(), 5.0);
        assert_eq!(viewport.height(), 5.0);
        assert_eq!(viewport.center_real(), SESSION_START_REAL);
    }
}
