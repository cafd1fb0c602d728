/*!
Parameter block consumed by `compute.wgsl#mandelbrot`.

The block is one 40-byte record:

| offset | field         | type  |
|--------|---------------|-------|
| 0      | width         | `f64` |
| 8      | height        | `f64` |
| 16     | center_real   | `f64` |
| 24     | center_imag   | `f64` |
| 32     | screen_width  | `i32` |
| 36     | screen_height | `i32` |

all little-endian. [`KernelParams::encode`] writes this layout byte by byte, so
what reaches the GPU does not depend on how Rust lays the struct out.
*/

use bytemuck::{Pod, Zeroable};

use crate::{screen, viewport::Viewport};

pub const KERNEL_PARAMS_SIZE: usize = 40;

pub type KernelParamBytes = [u8; KERNEL_PARAMS_SIZE];

/// Snapshot of a [`Viewport`] and the screen it is drawn to.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct KernelParams {
    pub width: f64,
    pub height: f64,
    pub center_real: f64,
    pub center_imag: f64,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl KernelParams {
    pub fn snapshot(viewport: &Viewport, screen: screen::Size) -> Self {
        // `screen::Size` only holds sides that fit an i32.
        Self {
            width: viewport.width(),
            height: viewport.height(),
            center_real: viewport.center_real(),
            center_imag: viewport.center_imag(),
            screen_width: screen.width() as i32,
            screen_height: screen.height() as i32,
        }
    }

    pub fn encode(&self) -> KernelParamBytes {
        let mut bytes = [0; KERNEL_PARAMS_SIZE];
        bytes[0..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.center_real.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.center_imag.to_le_bytes());
        bytes[32..36].copy_from_slice(&self.screen_width.to_le_bytes());
        bytes[36..40].copy_from_slice(&self.screen_height.to_le_bytes());
        bytes
    }
}
