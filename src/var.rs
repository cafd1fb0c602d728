//! A GPU buffer holding exactly one `A`.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

pub struct Var<A> {
    buffer: wgpu::Buffer,
    phantom_data: PhantomData<A>,
}

impl<A: bytemuck::Pod + bytemuck::Zeroable> Var<A> {
    /// `usage` is extended with `COPY_DST` so the value can be rewritten every frame.
    pub fn create(
        device: &wgpu::Device,
        label: &str,
        usage: wgpu::BufferUsages,
        initial: A,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&initial),
            usage: usage | wgpu::BufferUsages::COPY_DST,
        });

        Var {
            buffer,
            phantom_data: PhantomData,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, contents: &A) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(contents));
    }

    pub fn bind_group_entry(&self, binding: u32) -> wgpu::BindGroupEntry {
        wgpu::BindGroupEntry {
            binding,
            resource: self.buffer.as_entire_binding(),
        }
    }

    pub fn destroy(self) {
        self.buffer.destroy()
    }
}
