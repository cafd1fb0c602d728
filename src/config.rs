use clap::Parser;

use crate::navigation::NavigationConfig;

#[derive(Parser, Debug, Clone)]
#[command(about = "Interactive GPU Mandelbrot viewer", version)]
pub struct Args {
    /// Fraction of the visible extents zoomed per second while a button is held
    #[arg(long, default_value_t = 1.5)]
    pub zoom_speed: f64,

    /// Iteration budget change per zoom tick
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i32).range(1..))]
    pub increment: i32,

    /// Iteration budget of the first frame (never below 100)
    #[arg(long, default_value_t = 4096)]
    pub iterations: i32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Longest frame, in seconds, a single zoom tick may account for
    #[arg(long, default_value_t = 0.25)]
    pub max_frame_time: f64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("zoom speed must be a positive number (got {0})")]
    ZoomSpeed(f64),

    #[error("max frame time must be a positive number (got {0})")]
    MaxFrameTime(f64),

    #[error("zoom speed {zoom_speed} over a {max_frame_time}s frame would collapse the viewport")]
    ZoomStepTooLarge { zoom_speed: f64, max_frame_time: f64 },
}

impl Args {
    pub fn navigation_config(&self) -> Result<NavigationConfig, ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.zoom_speed) {
            return Err(ConfigError::ZoomSpeed(self.zoom_speed));
        }
        if !positive(self.max_frame_time) {
            return Err(ConfigError::MaxFrameTime(self.max_frame_time));
        }
        if self.zoom_speed * self.max_frame_time >= 1.0 {
            return Err(ConfigError::ZoomStepTooLarge {
                zoom_speed: self.zoom_speed,
                max_frame_time: self.max_frame_time,
            });
        }

        Ok(NavigationConfig {
            zoom_speed: self.zoom_speed,
            increment: self.increment,
        })
    }
}
