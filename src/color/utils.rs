pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, scale8_video},
};

/// Build an RGB color from hue, saturation and value
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Blend `overlay` into `existing` in place
#[inline]
pub fn nblend(existing: &mut Rgb, overlay: Rgb, amount_of_overlay: u8) {
    *existing = blend_colors(*existing, overlay, amount_of_overlay);
}

/// Per-channel saturating add
#[inline]
pub fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Per-channel maximum
#[inline]
pub fn max_channels(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Dim a color without letting lit channels drop to zero
#[inline]
pub fn nscale8_video(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8_video(color.r, scale),
        g: scale8_video(color.g, scale),
        b: scale8_video(color.b, scale),
    }
}

/// Fill every pixel with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
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
