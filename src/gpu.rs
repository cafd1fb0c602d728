use log::info;

use crate::{
    error::{DeviceInitError, Result},
    screen,
};

fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
    let info = adapter.get_info();
    info!("using adapter {} ({:?})", info.name, info.backend);

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("device"),
            features: wgpu::Features::empty(),
            limits: wgpu::Limits::default(),
        },
        None,
    ))
    .map_err(DeviceInitError::from)?;
    Ok((device, queue))
}

/// Device and queue without a surface, for offscreen dispatches.
pub fn headless() -> Result<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(wgpu::Backends::all());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: Default::default(),
        force_fallback_adapter: false,
        compatible_surface: None,
    }))
    .ok_or(DeviceInitError::NoAdapter)?;
    request_device(&adapter)
}

/// A window's surface plus the device that draws to it.
pub struct Gpu {
    pub surface: wgpu::Surface,
    pub surface_configuration: wgpu::SurfaceConfiguration,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Gpu {
    pub fn new(window: &winit::window::Window, size: screen::Size) -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::Backends::all());

        // SAFETY: the surface is dropped together with `Gpu`, which the host keeps
        // alongside `window` for the whole event loop.
        let surface = unsafe { instance.create_surface(window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(DeviceInitError::NoAdapter)?;
        let (device, queue) = request_device(&adapter)?;

        let format = surface
            .get_supported_formats(&adapter)
            .first()
            .copied()
            .ok_or(DeviceInitError::NoSurfaceFormat)?;
        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width(),
            height: size.height(),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        Ok(Self {
            surface,
            surface_configuration,
            device,
            queue,
        })
    }

    pub fn resize(&mut self, size: screen::Size) {
        self.surface_configuration.width = size.width();
        self.surface_configuration.height = size.height();
        self.reconfigure();
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_configuration);
    }
}
