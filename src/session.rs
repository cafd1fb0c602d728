use log::trace;

use crate::{
    dispatcher::Dispatcher,
    error::Result,
    input::FrameInput,
    navigation::{NavigationConfig, Navigator},
    screen,
    status::Status,
};

/// One viewing session: the navigator's viewport and the dispatcher that draws it.
pub struct Session {
    navigator: Navigator,
    dispatcher: Dispatcher,
}

impl Session {
    pub fn new(
        device: &wgpu::Device,
        config: NavigationConfig,
        screen: screen::Size,
        iteration_budget: i32,
    ) -> Result<Self> {
        Ok(Self {
            navigator: Navigator::new(config, screen, iteration_budget),
            dispatcher: Dispatcher::initialize(device, screen)?,
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn resize(&mut self, screen: screen::Size) {
        self.navigator.resize(screen);
    }

    /// Apply this tick's input, then dispatch the kernel for the resulting viewport.
    ///
    /// Actions run in a fixed order: zoom, recenter, reset. The cursor offset is taken
    /// once, before any of them.
    pub fn tick(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        input: &FrameInput,
        dt: f64,
    ) -> Result<(Status, &wgpu::TextureView)> {
        let offset = self.navigator.cursor_offset(input.pointer);

        if let Some(zoom) = input.zoom {
            self.navigator.zoom(zoom, dt, offset);
        }
        if input.recenter {
            self.navigator.recenter(offset);
        }
        if input.reset {
            self.navigator.reset();
        }

        let viewport = self.navigator.viewport();
        let status = Status::new(viewport, dt, self.navigator.cursor_offset(input.pointer));
        trace!("{}", status);

        let texture = self.dispatcher.sync_and_dispatch(
            device,
            queue,
            viewport,
            self.navigator.screen(),
            viewport.iteration_budget(),
        )?;
        Ok((status, texture))
    }

    pub fn teardown(&mut self) -> Result<()> {
        self.dispatcher.teardown()
    }
}
