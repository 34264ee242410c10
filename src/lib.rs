#![no_std]

//! Gauge effect for 1D addressable LED strips
//!
//! A value in `[0, 1]` lights a proportional prefix of the strip with a
//! three-color gradient, and a sine wave travels along the lit part at a
//! caller-controlled speed and direction.
//!
//! - [`gauge`] - the per-frame renderer over a caller-owned phase
//! - [`timer`] - renderers that keep their own frame timing
//! - [`effect`] - [`GaugeEffect`] for frame-time driven render loops

pub mod buffer;
pub mod color;
pub mod effect;
pub mod gauge;
pub mod math8;
pub mod timer;
pub mod transition;
pub mod wave;

pub use buffer::PixelBuffer;
pub use effect::{Effect, GaugeConfig, GaugeEffect};
pub use gauge::{GaugePalette, render_gauge, render_gauge_with};
pub use timer::{SelfTimedGauge, SharedSelfTimedGauge};
pub use wave::{WAVE_AMPLITUDE, WAVE_CYCLES};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
