use crate::{color::Rgb, math8::scale8};

/// Linear interpolation between two colors
///
/// # Arguments
/// * `from` - Color at `amount == 0`
/// * `to` - Color at `amount == 255`
/// * `amount` - Position between the two colors (0-255)
///
/// Each channel is computed as `from + (to - from) * amount / 255` and
/// truncated toward zero.
#[inline]
pub fn gradient(from: Rgb, to: Rgb, amount: u8) -> Rgb {
    let t = f32::from(amount) / 255.0;
    Rgb {
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t) as u8
}

/// Scale every channel of a color by `scale` (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
