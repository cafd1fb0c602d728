use mandelbrot_viewer::{
    dispatcher::Dispatcher,
    gpu,
    navigation::{NavigationConfig, Navigator},
    screen, Error,
};

/// A device, or `None` on machines without any adapter.
fn device() -> Option<(wgpu::Device, wgpu::Queue)> {
    match gpu::headless() {
        Ok(device) => Some(device),
        Err(error) => {
            eprintln!("skipping GPU test: {}", error);
            None
        }
    }
}

#[test]
fn dispatch_then_teardown() {
    let Some((device, queue)) = device() else {
        return;
    };
    // Not a multiple of 32 on either side.
    let size = screen::Size::new(200, 130).unwrap();
    let navigator = Navigator::new(NavigationConfig::default(), size, 256);

    let mut dispatcher = Dispatcher::initialize(&device, size).unwrap();
    let viewport = navigator.viewport();
    dispatcher
        .sync_and_dispatch(&device, &queue, viewport, size, viewport.iteration_budget())
        .unwrap();
    device.poll(wgpu::Maintain::Wait);

    dispatcher.teardown().unwrap();
    assert!(dispatcher.is_torn_down());

    assert!(matches!(
        dispatcher.sync_and_dispatch(&device, &queue, viewport, size, 256),
        Err(Error::UseAfterTeardown)
    ));
    assert!(matches!(dispatcher.teardown(), Err(Error::UseAfterTeardown)));
}

#[test]
fn oversized_texture_is_a_device_init_error() {
    let Some((device, _queue)) = device() else {
        return;
    };
    let size = screen::Size::new(100_000, 64).unwrap();

    assert!(matches!(
        Dispatcher::initialize(&device, size),
        Err(Error::DeviceInit(_))
    ));
}

#[test]
fn dispatch_reallocates_for_a_new_size() {
    let Some((device, queue)) = device() else {
        return;
    };
    let small = screen::Size::new(64, 64).unwrap();
    let large = screen::Size::new(96, 160).unwrap();
    let mut navigator = Navigator::new(NavigationConfig::default(), small, 100);

    let mut dispatcher = Dispatcher::initialize(&device, small).unwrap();
    dispatcher
        .sync_and_dispatch(&device, &queue, navigator.viewport(), small, 100)
        .unwrap();

    navigator.resize(large);
    dispatcher
        .sync_and_dispatch(&device, &queue, navigator.viewport(), large, 100)
        .unwrap();
    device.poll(wgpu::Maintain::Wait);

    dispatcher.teardown().unwrap();
}
