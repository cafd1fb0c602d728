use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to initialise the GPU: {0}")]
    DeviceInit(#[from] DeviceInitError),

    /// A dispatch or teardown was attempted after [`crate::dispatcher::Dispatcher::teardown`].
    #[error("dispatcher used after teardown")]
    UseAfterTeardown,

    #[error("invalid screen dimension {width}x{height}")]
    InvalidScreenDimension { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum DeviceInitError {
    #[error("no suitable adapter found")]
    NoAdapter,

    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// Captured from a wgpu error scope. Kept as text because `wgpu::Error` is not `Sync`.
    #[error("could not allocate {resource}: {message}")]
    Allocation {
        resource: &'static str,
        message: String,
    },
}
