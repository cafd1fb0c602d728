use crate::screen;

/// Side of the square pixel tile covered by one workgroup of `compute.wgsl#mandelbrot`.
pub const MANDELBROT_TILE_SIZE: u32 = 32;

/// Corresponds to `compute.wgsl#mandelbrot`'s `@workgroup_size(8, 8, 1)`.
pub const MANDELBROT_WORKGROUP_SIZE: u32 = 8;

/// Corresponds to `pixels_per_invocation` in `compute.wgsl#mandelbrot`.
pub const PIXELS_PER_INVOCATION: u32 = MANDELBROT_TILE_SIZE / MANDELBROT_WORKGROUP_SIZE;

/**
Dispatch size for `compute.wgsl#mandelbrot`.

Each workgroup covers a `32 x 32` tile. `@workgroup_size(32, 32, 1)` would be
1024 invocations, over the default `maxComputeInvocationsPerWorkgroup` of 256, so the
kernel runs `8 x 8` invocations and each one shades a `4 x 4` block.

The grid is `(width / 32, height / 32, 1)` with integer division. When a side is not
a multiple of 32 the last partial tile is never dispatched, leaving a sliver along the
right and bottom edges of the texture untouched.
*/
pub fn mandelbrot_dispatch_size(size: screen::Size) -> (u32, u32, u32) {
    (
        size.width() / MANDELBROT_TILE_SIZE,
        size.height() / MANDELBROT_TILE_SIZE,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> screen::Size {
        screen::Size::new(width, height).unwrap()
    }

    #[test]
    fn whole_tiles() {
        assert_eq!(mandelbrot_dispatch_size(size(800, 416)), (25, 13, 1));
    }

    #[test]
    fn partial_tiles_are_dropped() {
        assert_eq!(mandelbrot_dispatch_size(size(800, 400)), (25, 12, 1));
        assert_eq!(mandelbrot_dispatch_size(size(831, 63)), (25, 1, 1));
    }

    #[test]
    fn screens_smaller_than_a_tile_dispatch_nothing() {
        assert_eq!(mandelbrot_dispatch_size(size(31, 31)), (0, 0, 1));
    }

    #[test]
    fn invocations_cover_a_tile() {
        assert_eq!(
            MANDELBROT_WORKGROUP_SIZE * PIXELS_PER_INVOCATION,
            MANDELBROT_TILE_SIZE
        );
    }
}
