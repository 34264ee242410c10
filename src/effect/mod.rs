//! Effect integration
//!
//! An [`Effect`] renders frames for a given frame time into the LED slice
//! handed to it by the render loop.

mod gauge;

use embassy_time::Instant;

pub use gauge::{DEFAULT_WAVE_SPEED, GaugeConfig, GaugeEffect};

use crate::color::Rgb;

/// Frame renderer driven by the frame time
pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}

    /// Check if the effect is transitioning
    fn is_transitioning(&self) -> bool {
        false
    }
}
