//! Self-timed gauge rendering
//!
//! [`SelfTimedGauge`] owns the wave phase and the timestamp of the previous
//! frame, so callers that do not need external timing control only pass the
//! gauge parameters. Each gauge instance keeps its own state; several
//! gauges can run side by side.
//!
//! [`SharedSelfTimedGauge`] wraps the same state in a critical-section mutex
//! for use from a `static` shared between execution contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    buffer::PixelBuffer,
    color::Rgb,
    gauge::{GaugePalette, render_gauge_with},
    wave::advance_phase,
};

/// Gauge renderer that tracks its own frame timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfTimedGauge {
    /// Time of the previous frame, `None` until the first frame
    last_update: Option<Instant>,
    /// Wave phase in `[0, 2π)`
    phase: f32,
}

impl Default for SelfTimedGauge {
    fn default() -> Self {
        Self::new()
    }
}

impl SelfTimedGauge {
    /// Create a gauge whose first frame has a zero time delta
    pub const fn new() -> Self {
        Self {
            last_update: None,
            phase: 0.0,
        }
    }

    /// Create a gauge measuring its first time delta from instant zero
    ///
    /// The first frame then advances the wave by the whole uptime, which is
    /// how a zero-initialized timestamp behaves.
    pub const fn with_epoch_baseline() -> Self {
        Self {
            last_update: Some(Instant::from_millis(0)),
            phase: 0.0,
        }
    }

    /// Current wave phase in radians
    pub const fn phase(&self) -> f32 {
        self.phase
    }

    /// Time of the previous frame
    pub const fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Forget the previous frame time and rewind the wave
    pub fn reset(&mut self) {
        self.last_update = None;
        self.phase = 0.0;
    }

    /// Seconds elapsed since the previous frame, recording `now` as the new
    /// previous frame
    ///
    /// Millisecond resolution. A clock that went backwards yields zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn delta_seconds(&mut self, now: Instant) -> f32 {
        let previous = self.last_update.replace(now);
        match previous {
            Some(previous) => now.saturating_duration_since(previous).as_millis() as f32 / 1000.0,
            None => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[SelfTimedGauge.delta_seconds] first frame at {} ms",
                    now.as_millis()
                );
                0.0
            }
        }
    }

    /// Advance the wave to `now` and return the new phase
    pub fn advance(&mut self, now: Instant, wave_speed: f32) -> f32 {
        let dt = self.delta_seconds(now);
        advance_phase(&mut self.phase, wave_speed, dt);
        self.phase
    }

    /// Render a frame timed by the monotonic clock
    pub fn render<B: PixelBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        value: f32,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
        wave_speed: f32,
    ) {
        self.render_at(Instant::now(), buffer, value, c1, c2, c3, wave_speed);
    }

    /// Render a frame for the given frame time
    #[allow(clippy::too_many_arguments)]
    pub fn render_at<B: PixelBuffer + ?Sized>(
        &mut self,
        now: Instant,
        buffer: &mut B,
        value: f32,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
        wave_speed: f32,
    ) {
        self.render_palette_at(now, buffer, value, &GaugePalette::new(c1, c2, c3), wave_speed);
    }

    /// Render a frame for the given frame time using a [`GaugePalette`]
    pub fn render_palette_at<B: PixelBuffer + ?Sized>(
        &mut self,
        now: Instant,
        buffer: &mut B,
        value: f32,
        palette: &GaugePalette,
        wave_speed: f32,
    ) {
        let dt = self.delta_seconds(now);
        render_gauge_with(buffer, value, palette, wave_speed, &mut self.phase, dt);
    }
}

/// [`SelfTimedGauge`] behind a critical-section mutex
///
/// Only the timing update runs inside the critical section; the pixels are
/// rendered afterwards with interrupts enabled.
pub struct SharedSelfTimedGauge {
    inner: Mutex<RefCell<SelfTimedGauge>>,
}

impl Default for SharedSelfTimedGauge {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSelfTimedGauge {
    /// Create a shared gauge whose first frame has a zero time delta
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SelfTimedGauge::new())),
        }
    }

    /// Current wave phase in radians
    pub fn phase(&self) -> f32 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().phase())
    }

    /// Forget the previous frame time and rewind the wave
    pub fn reset(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().reset());
    }

    /// Render a frame timed by the monotonic clock
    pub fn render<B: PixelBuffer + ?Sized>(
        &self,
        buffer: &mut B,
        value: f32,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
        wave_speed: f32,
    ) {
        self.render_at(Instant::now(), buffer, value, c1, c2, c3, wave_speed);
    }

    /// Render a frame for the given frame time
    #[allow(clippy::too_many_arguments)]
    pub fn render_at<B: PixelBuffer + ?Sized>(
        &self,
        now: Instant,
        buffer: &mut B,
        value: f32,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
        wave_speed: f32,
    ) {
        let mut phase = critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().advance(now, wave_speed)
        });
        let palette = GaugePalette::new(c1, c2, c3);
        render_gauge_with(buffer, value, &palette, wave_speed, &mut phase, 0.0);
    }
}
