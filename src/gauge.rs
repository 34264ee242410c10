//! Gauge rendering
//!
//! Lights a prefix of the strip proportional to a value in `[0, 1]` with a
//! three-color gradient and overlays the traveling brightness wave from
//! [`crate::wave`]. Pixels past the lit prefix are written black.

use crate::{
    buffer::PixelBuffer,
    color::{BLACK, Rgb, gradient, rgb_from_u32, scale_color},
    wave::{advance_phase, brightness_scale, remap},
};

#[allow(clippy::unreadable_literal)]
const DEFAULT_START: Rgb = rgb_from_u32(0x00FF00);
#[allow(clippy::unreadable_literal)]
const DEFAULT_MID: Rgb = rgb_from_u32(0xFFFF00);
#[allow(clippy::unreadable_literal)]
const DEFAULT_END: Rgb = rgb_from_u32(0xFF0000);

/// Three gradient stops of a gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugePalette {
    /// Color at the start of the strip
    pub start: Rgb,
    /// Color at the middle of the strip
    pub mid: Rgb,
    /// Color at the end of the strip
    pub end: Rgb,
}

impl GaugePalette {
    /// Create a palette from its start, middle and end colors
    pub const fn new(start: Rgb, mid: Rgb, end: Rgb) -> Self {
        Self { start, mid, end }
    }
}

/// Green, yellow, red
impl Default for GaugePalette {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_MID, DEFAULT_END)
    }
}

/// Number of lit pixels for a gauge `value` on a strip of `len` pixels
///
/// `value` is clamped to `[0, 1]` first.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[inline]
pub fn lit_count(value: f32, len: usize) -> usize {
    let value = value.clamp(0.0, 1.0);
    ((value * len as f32) as usize).min(len)
}

/// Base gradient color at `position` (0.0-1.0) before wave modulation
///
/// The first half blends `start` into `mid`, the second half `mid` into
/// `end`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gradient_color_at(palette: &GaugePalette, position: f32) -> Rgb {
    if position < 0.5 {
        let amount = remap(position, 0.0, 0.5, 0.0, 255.0) as u8;
        gradient(palette.start, palette.mid, amount)
    } else {
        let amount = remap(position, 0.5, 1.0, 0.0, 255.0) as u8;
        gradient(palette.mid, palette.end, amount)
    }
}

/// Render one gauge frame
///
/// # Arguments
/// * `buffer` - Strip pixels; every pixel is overwritten
/// * `value` - Fill level, clamped to `[0, 1]`
/// * `c1`, `c2`, `c3` - Start, middle and end gradient colors
/// * `wave_speed` - Wave speed, clamped to `[-1, 1]`; negative runs backwards
/// * `phase` - Wave phase accumulator, kept in `[0, 2π)`
/// * `dt` - Seconds since the previous frame
///
/// The buffer length is read once at the start of the call. Non-finite
/// inputs are not guarded.
#[allow(clippy::too_many_arguments)]
pub fn render_gauge<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    value: f32,
    c1: Rgb,
    c2: Rgb,
    c3: Rgb,
    wave_speed: f32,
    phase: &mut f32,
    dt: f32,
) {
    render_gauge_with(buffer, value, &GaugePalette::new(c1, c2, c3), wave_speed, phase, dt);
}

/// Render one gauge frame using a [`GaugePalette`]
///
/// Same behavior as [`render_gauge`].
#[allow(clippy::cast_precision_loss)]
pub fn render_gauge_with<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    value: f32,
    palette: &GaugePalette,
    wave_speed: f32,
    phase: &mut f32,
    dt: f32,
) {
    let value = value.clamp(0.0, 1.0);
    let wave_speed = wave_speed.clamp(-1.0, 1.0);

    advance_phase(phase, wave_speed, dt);

    let len = buffer.size();
    let lit = lit_count(value, len);

    for i in 0..len {
        if i >= lit {
            buffer.set_pixel(i, BLACK);
            continue;
        }

        let position = i as f32 / len as f32;
        let base = gradient_color_at(palette, position);
        let scale = brightness_scale(position, *phase, wave_speed);
        buffer.set_pixel(i, scale_color(base, scale));
    }
}
