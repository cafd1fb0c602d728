//! An interactive Mandelbrot viewer driven by a `wgpu` compute kernel.
//!
//! [`navigation::Navigator`] owns the [`viewport::Viewport`] and applies pointer-driven
//! pan and zoom to it once per frame; [`dispatcher::Dispatcher`] marshals the viewport
//! into [`kernel::KernelParams`] and runs `compute.wgsl#mandelbrot` into a texture
//! that [`presenter::Presenter`] draws to the window.

pub mod command_encoder;
pub mod compute;
pub mod config;
pub mod cursor;
pub mod dispatcher;
pub mod error;
pub mod gpu;
pub mod input;
pub mod kernel;
pub mod navigation;
pub mod presenter;
pub mod screen;
pub mod session;
pub mod status;
pub mod var;
pub mod viewport;

pub use error::{Error, Result};
