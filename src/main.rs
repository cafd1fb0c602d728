use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};
use mandelbrot_viewer::{
    config::Args, gpu::Gpu, input::InputState, presenter::Presenter, screen, session::Session,
};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init();

    let navigation = args.navigation_config().context("validating arguments")?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("mandelbrot")
        .with_inner_size(PhysicalSize::new(args.width, args.height))
        .build(&event_loop)
        .context("creating window")?;

    let mut screen_size =
        screen::Size::try_from(window.inner_size()).context("reading window size")?;
    let mut gpu = Gpu::new(&window, screen_size).context("initialising GPU")?;
    let presenter = Presenter::new(&gpu.device, gpu.surface_configuration.format);
    let mut session = Session::new(&gpu.device, navigation, screen_size, args.iterations)
        .context("initialising dispatcher")?;

    let mut input = InputState::default();
    let mut minimised = false;
    let max_frame_time = args.max_frame_time;
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| match event {
        Event::MainEventsCleared => {
            // Redraw continuously; held buttons keep zooming without new events.
            window.request_redraw();
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => {
            input.handle(&event);
            match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => match screen::Size::try_from(size) {
                    Ok(size) => {
                        debug!("resizing to {:?}", size);
                        screen_size = size;
                        minimised = false;
                        gpu.resize(size);
                        session.resize(size);
                    }
                    Err(_) => {
                        debug!("window minimised");
                        minimised = true;
                    }
                },
                _ => {}
            }
        }
        Event::RedrawRequested(window_id) if window_id == window.id() && !minimised => {
            let now = Instant::now();
            let dt = now
                .duration_since(last_tick)
                .as_secs_f64()
                .min(max_frame_time);
            last_tick = now;

            let frame = render_frame(
                &gpu,
                &presenter,
                &mut session,
                &mut input,
                &window,
                screen_size,
                dt,
            );
            if let Err(error) = frame {
                error!("{:#}", error);
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::LoopDestroyed => {
            if let Err(error) = session.teardown() {
                error!("{}", error);
            }
        }
        _ => {}
    });
}

fn render_frame(
    gpu: &Gpu,
    presenter: &Presenter,
    session: &mut Session,
    input: &mut InputState,
    window: &Window,
    screen_size: screen::Size,
    dt: f64,
) -> Result<()> {
    let surface_texture = match gpu.surface.get_current_texture() {
        Ok(surface_texture) => surface_texture,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            debug!("surface lost, reconfiguring");
            gpu.reconfigure();
            return Ok(());
        }
        Err(error) => return Err(error).context("acquiring surface texture"),
    };

    let frame_input = input.take_frame(screen_size);
    let (status, result) = session
        .tick(&gpu.device, &gpu.queue, &frame_input, dt)
        .context("dispatching kernel")?;

    let surface_texture_view = surface_texture
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    presenter.draw(&gpu.device, &gpu.queue, &surface_texture_view, result);
    surface_texture.present();

    window.set_title(&status.to_string());
    Ok(())
}
