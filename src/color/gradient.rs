use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

const RAINBOW_SATURATION: u8 = 240;

/// Fill a linear RGB gradient between two positions (inclusive)
///
/// Channels are stepped in 8.8 fixed point. Positions past the end of
/// `leds` are clamped.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn fill_gradient_rgb(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Rgb,
    end_pos: usize,
    end_color: Rgb,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, start_color, end_color) = if end_pos < start_pos {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    let pixel_distance = end_pos - start_pos;
    let divisor = if pixel_distance == 0 {
        1
    } else {
        i32::try_from(pixel_distance).unwrap_or(i32::MAX)
    };

    // 8.8 fixed-point per-pixel deltas
    let delta88 = |from: u8, to: u8| ((i32::from(to) - i32::from(from)) << 8) / divisor;
    let r_delta = delta88(start_color.r, end_color.r);
    let g_delta = delta88(start_color.g, end_color.g);
    let b_delta = delta88(start_color.b, end_color.b);

    let mut r88 = i32::from(start_color.r) << 8;
    let mut g88 = i32::from(start_color.g) << 8;
    let mut b88 = i32::from(start_color.b) << 8;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = Rgb {
            r: (r88 >> 8).clamp(0, 255) as u8,
            g: (g88 >> 8).clamp(0, 255) as u8,
            b: (b88 >> 8).clamp(0, 255) as u8,
        };
        r88 += r_delta;
        g88 += g_delta;
        b88 += b_delta;
    }
}

/// Fill with a rainbow that advances `hue_step` per pixel
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, hue_step: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SATURATION,
            val: 255,
        });
        hue = hue.wrapping_add(hue_step);
    }
}
