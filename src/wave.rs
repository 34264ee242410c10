//! Traveling brightness wave
//!
//! The wave is a sine running along the strip. Its phase is an angle that
//! accumulates `2π * wave_speed` radians per second, so `wave_speed == 1.0`
//! moves one full period per second and the sign picks the direction.

use core::f32::consts::{PI, TAU};

/// Wave shift across the whole strip in multiples of π (three full periods)
pub const WAVE_CYCLES: f32 = 6.0;

/// Wave brightness amplitude (0.0-1.0)
///
/// Also the dimming applied at rest: with no wave the lit pixels sit at
/// `1.0 - WAVE_AMPLITUDE` brightness.
pub const WAVE_AMPLITUDE: f32 = 0.4;

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// The result is not clamped.
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Wrap a phase angle into `[0, 2π)`
///
/// Handles any number of wraps in one step. Non-finite input yields NaN.
#[inline]
pub fn normalize_phase(phase: f32) -> f32 {
    let mut wrapped = libm::fmodf(phase, TAU);
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // A tiny negative remainder plus TAU rounds up to TAU itself
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Advance the phase accumulator by `dt` seconds
///
/// `wave_speed` is clamped to `[-1, 1]`. A negative `dt` moves the phase
/// backwards.
#[inline]
pub fn advance_phase(phase: &mut f32, wave_speed: f32, dt: f32) {
    let wave_speed = wave_speed.clamp(-1.0, 1.0);
    let angular_velocity = TAU * wave_speed;
    *phase = normalize_phase(*phase + angular_velocity * dt);
}

/// Brightness factor (0-255) of the wave at `position` along the strip
///
/// `position` is the pixel offset in `[0, 1)`. The wave swings between
/// `1 - WAVE_AMPLITUDE ± |wave_speed| * WAVE_AMPLITUDE`, so a faster wave
/// also pulses deeper. With `wave_speed == 0` the result is a flat 153.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub fn brightness_scale(position: f32, phase: f32, wave_speed: f32) -> u8 {
    let wave_speed = wave_speed.clamp(-1.0, 1.0);
    let wave_shift = WAVE_CYCLES * PI * position;
    let wave_value = libm::sinf(phase - wave_shift);
    let wave_amplitude = libm::fabsf(wave_speed) * WAVE_AMPLITUDE;

    let min_brightness = 1.0 - WAVE_AMPLITUDE - wave_amplitude;
    let max_brightness = 1.0 - WAVE_AMPLITUDE + wave_amplitude;

    (remap(wave_value, -1.0, 1.0, min_brightness, max_brightness) * 255.0) as u8
}
