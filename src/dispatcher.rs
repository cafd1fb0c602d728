//! Owns the kernel's GPU resources and issues one dispatch per frame.

use std::num::NonZeroU64;

use log::{debug, info};

use crate::{
    command_encoder::{self, CommandEncoderExt},
    compute,
    error::{DeviceInitError, Error, Result},
    kernel::{KernelParamBytes, KernelParams, KERNEL_PARAMS_SIZE},
    screen,
    var::Var,
    viewport::Viewport,
};

pub const OUTPUT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Run `create` inside error scopes, turning any allocation or validation failure into
/// [`DeviceInitError::Allocation`].
fn allocate<T>(
    device: &wgpu::Device,
    resource: &'static str,
    create: impl FnOnce() -> T,
) -> Result<T> {
    device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = create();
    let validation = pollster::block_on(device.pop_error_scope());
    let out_of_memory = pollster::block_on(device.pop_error_scope());

    match validation.or(out_of_memory) {
        None => Ok(value),
        Some(error) => Err(DeviceInitError::Allocation {
            resource,
            message: error.to_string(),
        }
        .into()),
    }
}

struct OutputTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: screen::Size,
}

impl OutputTexture {
    fn create(device: &wgpu::Device, size: screen::Size) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("result-texture"),
            size: wgpu::Extent3d {
                width: size.width(),
                height: size.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OUTPUT_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            size,
        }
    }
}

fn compute_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    output: &OutputTexture,
    params: &Var<KernelParamBytes>,
    iterations: &Var<i32>,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("compute-bind-group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&output.view),
            },
            params.bind_group_entry(1),
            iterations.bind_group_entry(2),
        ],
    })
}

struct Resources {
    pipeline: wgpu::ComputePipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    params: Var<KernelParamBytes>,
    iterations: Var<i32>,
    output: OutputTexture,
    bind_group: wgpu::BindGroup,
}

impl Resources {
    fn create_bind_group(&self, device: &wgpu::Device) -> wgpu::BindGroup {
        compute_bind_group(
            device,
            &self.bind_group_layout,
            &self.output,
            &self.params,
            &self.iterations,
        )
    }

    fn resize(&mut self, device: &wgpu::Device, size: screen::Size) -> Result<()> {
        debug!(
            "reallocating result texture for {}x{}",
            size.width(),
            size.height()
        );
        let output = allocate(device, "result texture", || {
            OutputTexture::create(device, size)
        })?;
        let previous = std::mem::replace(&mut self.output, output);
        previous.texture.destroy();
        self.bind_group = self.create_bind_group(device);
        Ok(())
    }
}

/// Marshals the viewport into the kernel's parameter block and dispatches the kernel.
///
/// Live from [`Dispatcher::initialize`] until [`Dispatcher::teardown`]; every call after
/// teardown fails with [`Error::UseAfterTeardown`].
pub struct Dispatcher {
    resources: Option<Resources>,
}

impl Dispatcher {
    pub fn initialize(device: &wgpu::Device, size: screen::Size) -> Result<Self> {
        let compute_shader_module = allocate(device, "compute shader", || {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("compute-shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("compute.wgsl").into()),
            })
        })?;

        let bind_group_layout = allocate(device, "compute bind group layout", || {
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("compute-bind-group-layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::StorageTexture {
                            access: wgpu::StorageTextureAccess::WriteOnly,
                            format: OUTPUT_FORMAT,
                            view_dimension: wgpu::TextureViewDimension::D2,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: NonZeroU64::new(KERNEL_PARAMS_SIZE as u64),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: NonZeroU64::new(std::mem::size_of::<i32>() as u64),
                        },
                        count: None,
                    },
                ],
            })
        })?;

        let pipeline_layout = allocate(device, "compute pipeline layout", || {
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("compute-pipeline-layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            })
        })?;

        let pipeline = allocate(device, "compute pipeline", || {
            device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: Some("compute-pipeline"),
                layout: Some(&pipeline_layout),
                module: &compute_shader_module,
                entry_point: "mandelbrot",
            })
        })?;

        let (params, iterations) = allocate(device, "kernel parameter buffers", || {
            (
                Var::create(
                    device,
                    "kernel-params-buffer",
                    wgpu::BufferUsages::STORAGE,
                    [0u8; KERNEL_PARAMS_SIZE],
                ),
                Var::create(
                    device,
                    "iterations-buffer",
                    wgpu::BufferUsages::UNIFORM,
                    0i32,
                ),
            )
        })?;

        let output = allocate(device, "result texture", || {
            OutputTexture::create(device, size)
        })?;

        let bind_group =
            compute_bind_group(device, &bind_group_layout, &output, &params, &iterations);

        info!(
            "dispatcher initialised for {}x{}",
            size.width(),
            size.height()
        );

        Ok(Self {
            resources: Some(Resources {
                pipeline,
                bind_group_layout,
                params,
                iterations,
                output,
                bind_group,
            }),
        })
    }

    /// Upload a snapshot of `viewport`, set the iteration budget and run the kernel.
    ///
    /// The returned view is the output texture as of this dispatch. A `size` different
    /// from the current texture reallocates it first.
    pub fn sync_and_dispatch(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        viewport: &Viewport,
        size: screen::Size,
        iteration_budget: i32,
    ) -> Result<&wgpu::TextureView> {
        let resources = self.resources.as_mut().ok_or(Error::UseAfterTeardown)?;

        if resources.output.size != size {
            resources.resize(device, size)?;
        }

        let params = KernelParams::snapshot(viewport, size);
        resources.params.write(queue, &params.encode());
        resources.iterations.write(queue, &iteration_budget);

        let (x, y, z) = compute::mandelbrot_dispatch_size(size);
        let resources = &*resources;
        let command_buffer = command_encoder::record(device, "mandelbrot-encoder", |encoder| {
            encoder.with_debug_group("compute-pass", |encoder| {
                encoder.with_compute_pass("compute-pass", |compute_pass| {
                    compute_pass.set_pipeline(&resources.pipeline);
                    compute_pass.set_bind_group(0, &resources.bind_group, &[]);
                    compute_pass.insert_debug_marker("mandelbrot");
                    compute_pass.dispatch_workgroups(x, y, z);
                })
            })
        });
        queue.submit([command_buffer]);

        Ok(&resources.output.view)
    }

    pub fn is_torn_down(&self) -> bool {
        self.resources.is_none()
    }

    /// Release the buffers and texture. A second call fails with [`Error::UseAfterTeardown`].
    pub fn teardown(&mut self) -> Result<()> {
        let resources = self.resources.take().ok_or(Error::UseAfterTeardown)?;
        resources.params.destroy();
        resources.iterations.destroy();
        resources.output.texture.destroy();
        info!("dispatcher torn down");
        Ok(())
    }
}
