use crate::error::{Error, Result};

/// Pixel dimensions of the host surface.
///
/// Both sides are non-zero and fit in an `i32`, which is what the kernel
/// parameter block carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let fits = |value: u32| value > 0 && i32::try_from(value).is_ok();
        if fits(width) && fits(height) {
            Ok(Self { width, height })
        } else {
            Err(Error::InvalidScreenDimension { width, height })
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `height / width`, the factor that turns a plane width into the matching plane height.
    pub fn aspect(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl TryFrom<winit::dpi::PhysicalSize<u32>> for Size {
    type Error = Error;

    fn try_from(size: winit::dpi::PhysicalSize<u32>) -> Result<Self> {
        Self::new(size.width, size.height)
    }
}
