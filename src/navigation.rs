//! Pan and zoom over a [`Viewport`].

use crate::{
    cursor::{self, CursorOffset, Pointer},
    screen,
    viewport::{Viewport, MIN_ITERATION_BUDGET},
};

/// Weight of the cursor offset in each zoom tick.
const CURSOR_PULL: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Fraction of the current extents removed (or added) per second of zooming.
    pub zoom_speed: f64,
    /// Iteration budget change per zoom tick.
    pub increment: i32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_speed: 1.5,
            increment: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

/// Sole owner of the session's [`Viewport`].
#[derive(Debug)]
pub struct Navigator {
    config: NavigationConfig,
    screen: screen::Size,
    viewport: Viewport,
}

impl Navigator {
    pub fn new(config: NavigationConfig, screen: screen::Size, iteration_budget: i32) -> Self {
        Self {
            config,
            screen,
            viewport: Viewport::session_start(screen, iteration_budget),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn screen(&self) -> screen::Size {
        self.screen
    }

    pub fn cursor_offset(&self, pointer: Pointer) -> CursorOffset {
        cursor::offset_from_center(pointer, self.screen, &self.viewport)
    }

    pub fn zoom(&mut self, zoom: Zoom, dt: f64, offset: CursorOffset) {
        match zoom {
            Zoom::In => self.zoom_in(dt, offset),
            Zoom::Out => self.zoom_out(dt, offset),
        }
    }

    /// Shrink the extents by `zoom_speed * dt` of their current size, nudging toward the cursor.
    ///
    /// `dt` must be finite and non-negative.
    pub fn zoom_in(&mut self, dt: f64, offset: CursorOffset) {
        let viewport = &mut self.viewport;
        viewport.iteration_budget = viewport
            .iteration_budget
            .saturating_add(self.config.increment)
            .max(MIN_ITERATION_BUDGET);

        let w_factor = viewport.width * self.config.zoom_speed * dt;
        let h_factor = viewport.height * self.config.zoom_speed * dt;
        viewport.width -= w_factor;
        viewport.height -= h_factor;
        viewport.center_real += w_factor / 2.0 + offset.dx * CURSOR_PULL;
        viewport.center_imag += h_factor / 2.0 + offset.dy * CURSOR_PULL;
    }

    /// Grow the extents by `zoom_speed * dt` of their current size.
    ///
    /// The cursor term is added here as well, so this is not the algebraic inverse of
    /// [`Navigator::zoom_in`].
    pub fn zoom_out(&mut self, dt: f64, offset: CursorOffset) {
        let viewport = &mut self.viewport;
        viewport.iteration_budget = viewport
            .iteration_budget
            .saturating_sub(self.config.increment)
            .max(MIN_ITERATION_BUDGET);

        let w_factor = viewport.width * self.config.zoom_speed * dt;
        let h_factor = viewport.height * self.config.zoom_speed * dt;
        viewport.width += w_factor;
        viewport.height += h_factor;
        viewport.center_real -= w_factor / 2.0 - offset.dx * CURSOR_PULL;
        viewport.center_imag -= h_factor / 2.0 - offset.dy * CURSOR_PULL;
    }

    /// Move the point under the cursor to the center.
    pub fn recenter(&mut self, offset: CursorOffset) {
        self.viewport.center_real += offset.dx;
        self.viewport.center_imag += offset.dy;
    }

    pub fn reset(&mut self) {
        self.viewport.reset(self.screen);
    }

    /// Adopt a new screen shape, keeping the width and re-deriving the height.
    pub fn resize(&mut self, screen: screen::Size) {
        self.screen = screen;
        self.viewport.lock_aspect(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(iteration_budget: i32) -> Navigator {
        let screen = screen::Size::new(800, 400).unwrap();
        Navigator::new(NavigationConfig::default(), screen, iteration_budget)
    }

    #[test]
    fn zoom_in_ratchets_the_budget_up() {
        let mut navigator = navigator(100);
        navigator.zoom_in(0.01, CursorOffset::ZERO);
        assert_eq!(navigator.viewport().iteration_budget(), 103);
    }

    #[test]
    fn zoom_out_stops_at_the_floor() {
        let mut navigator = navigator(104);
        navigator.zoom_out(0.01, CursorOffset::ZERO);
        assert_eq!(navigator.viewport().iteration_budget(), 101);
        navigator.zoom_out(0.01, CursorOffset::ZERO);
        assert_eq!(navigator.viewport().iteration_budget(), 100);
        navigator.zoom_out(0.01, CursorOffset::ZERO);
        assert_eq!(navigator.viewport().iteration_budget(), 100);
    }

    #[test]
    fn zoom_in_pulls_toward_the_cursor() {
        let mut navigator = navigator(100);
        navigator.reset();
        navigator.zoom_in(0.0, CursorOffset { dx: 1.0, dy: -2.0 });

        let viewport = navigator.viewport();
        assert!((viewport.center_real() - (-3.25 + 0.1)).abs() < 1e-12);
        assert!((viewport.center_imag() - (-1.5 - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn zoom_in_adds_half_the_shrink_and_the_cursor_term() {
        let mut navigator = navigator(100);
        navigator.reset();
        navigator.zoom_in(0.1, CursorOffset { dx: 0.5, dy: 0.25 });

        // w_factor = 0.75, h_factor = 0.375
        let viewport = navigator.viewport();
        assert!((viewport.center_real() - (-3.25 + 0.375 + 0.05)).abs() < 1e-12);
        assert!((viewport.center_imag() - (-1.5 + 0.1875 + 0.025)).abs() < 1e-12);
    }

    #[test]
    fn zoom_out_cursor_term_is_added() {
        let mut navigator = navigator(100);
        navigator.reset();
        navigator.zoom_out(0.0, CursorOffset { dx: 1.0, dy: -2.0 });

        let viewport = navigator.viewport();
        assert!((viewport.center_real() - (-3.25 + 0.1)).abs() < 1e-12);
        assert!((viewport.center_imag() - (-1.5 - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn zoom_dispatches_by_direction() {
        let mut a = navigator(500);
        let mut b = navigator(500);
        a.zoom(Zoom::Out, 0.05, CursorOffset::ZERO);
        b.zoom_out(0.05, CursorOffset::ZERO);
        assert_eq!(a.viewport(), b.viewport());
    }

    #[test]
    fn recenter_leaves_extents_alone() {
        let mut navigator = navigator(300);
        let before = *navigator.viewport();
        navigator.recenter(CursorOffset { dx: 0.5, dy: -0.25 });

        let after = navigator.viewport();
        assert_eq!(after.width(), before.width());
        assert_eq!(after.height(), before.height());
        assert_eq!(after.iteration_budget(), 300);
        assert_eq!(after.center_real(), before.center_real() + 0.5);
        assert_eq!(after.center_imag(), before.center_imag() - 0.25);
    }

    #[test]
    fn resize_relocks_the_aspect() {
        let mut navigator = navigator(100);
        navigator.zoom_in(0.1, CursorOffset::ZERO);
        let width = navigator.viewport().width();

        navigator.resize(screen::Size::new(300, 600).unwrap());

        assert_eq!(navigator.viewport().width(), width);
        assert_eq!(navigator.viewport().height(), width * 2.0);
    }
}
