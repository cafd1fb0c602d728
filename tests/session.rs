use mandelbrot_viewer::{
    cursor::{CursorOffset, Pointer},
    gpu,
    input::FrameInput,
    navigation::{NavigationConfig, Zoom},
    screen,
    session::Session,
    viewport,
};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-12
}

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

fn session(device: &wgpu::Device) -> Session {
    let size = screen::Size::new(800, 400).unwrap();
    Session::new(device, NavigationConfig::default(), size, 100).unwrap()
}

#[test]
fn zoom_runs_before_recenter_with_one_cursor_offset() {
    let Some((device, queue)) = device() else {
        return;
    };
    let mut session = session(&device);

    // dx = 200 / 800 * 5.0, dy = -100 / 400 * 2.5, both taken before the zoom.
    let input = FrameInput {
        zoom: Some(Zoom::In),
        recenter: true,
        reset: false,
        pointer: Pointer { x: 600.0, y: 100.0 },
    };
    let (status, _) = session.tick(&device, &queue, &input, 0.1).unwrap();

    // zoom: +w_factor/2 + dx*0.1, then recenter: +dx
    assert!(close(status.width, 4.25));
    assert!(close(status.height, 2.125));
    assert!(close(status.center_real, -3.25 + 0.375 + 0.125 + 1.25));
    assert!(close(status.center_imag, -1.4 + 0.1875 - 0.0625 - 0.625));
    assert_eq!(status.iteration_budget, 103);
    assert_eq!(status.frame_time, 0.1);
    // The reported cursor offset is measured against the updated viewport.
    assert!(close(status.cursor.dx, 0.25 * 4.25));
    assert!(close(status.cursor.dy, -0.25 * 2.125));

    session.teardown().unwrap();
}

#[test]
fn reset_runs_last() {
    let Some((device, queue)) = device() else {
        return;
    };
    let mut session = session(&device);

    let input = FrameInput {
        zoom: Some(Zoom::In),
        recenter: true,
        reset: true,
        pointer: Pointer { x: 700.0, y: 300.0 },
    };
    let (status, _) = session.tick(&device, &queue, &input, 0.05).unwrap();

    assert_eq!(status.width, viewport::WIDTH);
    assert_eq!(status.height, viewport::WIDTH * 0.5);
    assert_eq!(status.center_real, viewport::REAL);
    assert_eq!(status.center_imag, viewport::IMAGINARY);
    // Reset leaves the budget the zoom raised.
    assert_eq!(status.iteration_budget, 103);
    assert_eq!(session.navigator().viewport().center_imag(), viewport::IMAGINARY);

    session.teardown().unwrap();
}

#[test]
fn idle_tick_reports_the_session_start_view() {
    let Some((device, queue)) = device() else {
        return;
    };
    let mut session = session(&device);

    let input = FrameInput {
        pointer: Pointer { x: 400.0, y: 200.0 },
        ..FrameInput::default()
    };
    let (status, _) = session.tick(&device, &queue, &input, 0.016).unwrap();

    assert_eq!(status.center_real, viewport::SESSION_START_REAL);
    assert_eq!(status.center_imag, viewport::SESSION_START_IMAGINARY);
    assert_eq!(status.iteration_budget, 100);
    assert_eq!(status.cursor, CursorOffset::ZERO);

    session.teardown().unwrap();
}
