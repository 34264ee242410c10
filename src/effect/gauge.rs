//! Gauge effect
//!
//! Keeps the gauge parameters between frames and times the wave on its own.
//! Value changes can glide over a transition duration.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::Rgb,
    gauge::GaugePalette,
    timer::SelfTimedGauge,
    transition::ValueTransition,
};

/// Wave speed used by [`GaugeConfig::default`]
pub const DEFAULT_WAVE_SPEED: f32 = 0.3;

/// Initial gauge parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeConfig {
    /// Fill level (0.0-1.0)
    pub value: f32,
    /// Gradient stops
    pub palette: GaugePalette,
    /// Wave speed (-1.0-1.0), negative for reverse direction
    pub wave_speed: f32,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            palette: GaugePalette::default(),
            wave_speed: DEFAULT_WAVE_SPEED,
        }
    }
}

impl GaugeConfig {
    /// Set the fill level
    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the gradient stops
    #[must_use]
    pub const fn with_palette(mut self, palette: GaugePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the wave speed
    #[must_use]
    pub const fn with_wave_speed(mut self, wave_speed: f32) -> Self {
        self.wave_speed = wave_speed;
        self
    }
}

/// Gauge effect with a traveling wave
#[derive(Debug, Clone)]
pub struct GaugeEffect {
    level: ValueTransition<f32>,
    palette: GaugePalette,
    wave_speed: f32,
    timer: SelfTimedGauge,
}

impl Default for GaugeEffect {
    fn default() -> Self {
        Self::new(&GaugeConfig::default())
    }
}

impl GaugeEffect {
    /// Create a gauge effect, clamping the configured value and wave speed
    pub fn new(config: &GaugeConfig) -> Self {
        Self {
            level: ValueTransition::new_level(config.value.clamp(0.0, 1.0)),
            palette: config.palette,
            wave_speed: config.wave_speed.clamp(-1.0, 1.0),
            timer: SelfTimedGauge::new(),
        }
    }

    /// Current fill level, including any running transition
    pub const fn value(&self) -> f32 {
        self.level.current()
    }

    /// Current gradient stops
    pub const fn palette(&self) -> GaugePalette {
        self.palette
    }

    /// Current wave speed in `[-1, 1]`
    pub const fn wave_speed(&self) -> f32 {
        self.wave_speed
    }

    /// Current wave phase in radians
    pub const fn phase(&self) -> f32 {
        self.timer.phase()
    }

    /// Set the fill level with smooth transition
    ///
    /// # Arguments
    /// * `value` - Target level, clamped to `[0, 1]`
    /// * `duration` - Transition duration, zero applies immediately
    pub fn set_value(&mut self, value: f32, duration: Duration, now: Instant) {
        self.level.set(value.clamp(0.0, 1.0), duration, now);
    }

    /// Replace the gradient stops, effective from the next frame
    pub fn set_palette(&mut self, palette: GaugePalette) {
        self.palette = palette;
    }

    /// Set the wave speed, clamped to `[-1, 1]`
    pub fn set_wave_speed(&mut self, wave_speed: f32) {
        self.wave_speed = wave_speed.clamp(-1.0, 1.0);
    }
}

impl Effect for GaugeEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.level.tick(now);
        self.timer
            .render_palette_at(now, leds, self.level.current(), &self.palette, self.wave_speed);
    }

    fn reset(&mut self) {
        self.timer.reset();
    }

    fn is_transitioning(&self) -> bool {
        self.level.is_transitioning()
    }
}
