//! 16-stop color palettes
//!
//! A palette maps a 0-255 index onto 16 evenly spaced color stops. Index
//! `16 * k` lands exactly on stop `k`; the 15 values in between are resolved
//! by the [`BlendMode`]. The last segment wraps back to stop 0.

use rand::RngCore;

use crate::{
    color::{Hsv, Rgb, fill_gradient_rgb, hsv, hsv2rgb, rgb_from_u32},
    math8::scale8,
    random::{random8, random8_lim, random8_range},
};

/// Number of stops in a palette
pub const PALETTE_SIZE: usize = 16;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        Palette16::from_stops([
            $(rgb_from_u32($color)),*
        ])
    };
}

/// How a fractional palette index resolves to a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Interpolate between the two surrounding stops
    #[default]
    Linear,
    /// Snap to the nearer stop
    Nearest,
}

/// 16-stop palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    stops: [Rgb; PALETTE_SIZE],
}

impl Default for Palette16 {
    fn default() -> Self {
        Self::PARTY
    }
}

impl Palette16 {
    /// Red through the full hue wheel
    #[allow(clippy::unreadable_literal)]
    pub const RAINBOW: Self = hex_palette![
        0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
        0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
    ];

    /// Purple, red and orange without the greens
    #[allow(clippy::unreadable_literal)]
    pub const PARTY: Self = hex_palette![
        0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
        0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
    ];

    /// Dark embers up to yellow, lower index is darker
    #[allow(clippy::unreadable_literal)]
    pub const FIRE: Self = hex_palette![
        0x020000, 0x040000, 0x080000, 0x080000, 0x100000, 0xFF0000, 0xFF0000, 0xFF0000,
        0xFF8C00, 0xFF8C00, 0xFFA500, 0xFFA500, 0xFFFF00, 0xFFA500, 0xFFFF00, 0xFFFF00,
    ];

    /// Create a palette from explicit stops
    pub const fn from_stops(stops: [Rgb; PALETTE_SIZE]) -> Self {
        Self { stops }
    }

    /// Spread four colors over the 16 stops as three linear segments
    pub fn from_four(c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) -> Self {
        let mut stops = [Rgb::default(); PALETTE_SIZE];
        let one_third = PALETTE_SIZE / 3;
        let two_thirds = PALETTE_SIZE * 2 / 3;
        let last = PALETTE_SIZE - 1;

        fill_gradient_rgb(&mut stops, 0, c1, one_third, c2);
        fill_gradient_rgb(&mut stops, one_third, c2, two_thirds, c3);
        fill_gradient_rgb(&mut stops, two_thirds, c3, last, c4);

        Self { stops }
    }

    /// Same as [`Self::from_four`] with HSV stops
    pub fn from_four_hsv(c1: Hsv, c2: Hsv, c3: Hsv, c4: Hsv) -> Self {
        Self::from_four(hsv2rgb(c1), hsv2rgb(c2), hsv2rgb(c3), hsv2rgb(c4))
    }

    /// Random four-hue palette, each stop at least half bright
    pub fn random_four<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let stop = |sat: u8, rng: &mut R| {
            let hue = random8(rng);
            hsv(hue, sat, random8_range(rng, 128, 255))
        };
        let c1 = stop(255, rng);
        let c2 = stop(255, rng);
        let c3 = stop(192, rng);
        let c4 = stop(255, rng);
        Self::from_four(c1, c2, c3, c4)
    }

    /// Random palette with every hue within 32 steps of `base_hue`
    pub fn random_around<R: RngCore + ?Sized>(rng: &mut R, base_hue: u8) -> Self {
        let stop = |sat: u8, rng: &mut R| {
            let hue = base_hue.wrapping_add(random8_lim(rng, 32));
            hsv(hue, sat, random8_range(rng, 128, 255))
        };
        let c1 = stop(192, rng);
        let c2 = stop(255, rng);
        let c3 = stop(192, rng);
        let c4 = stop(255, rng);
        Self::from_four(c1, c2, c3, c4)
    }

    /// Palette stops
    pub const fn stops(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.stops
    }

    /// Sample the palette at `index` and scale by `brightness`
    pub fn sample(&self, index: u8, brightness: u8, mode: BlendMode) -> Rgb {
        let hi4 = usize::from(index >> 4);
        let lo4 = index & 0x0F;
        let entry = self.stops[hi4];
        let next = self.stops[(hi4 + 1) % PALETTE_SIZE];

        let color = match mode {
            BlendMode::Linear if lo4 != 0 => {
                let f2 = lo4 << 4;
                let f1 = 255 - f2;
                let mix = |a: u8, b: u8| scale8(a, f1).saturating_add(scale8(b, f2));
                Rgb {
                    r: mix(entry.r, next.r),
                    g: mix(entry.g, next.g),
                    b: mix(entry.b, next.b),
                }
            }
            BlendMode::Nearest if lo4 >= 8 => next,
            _ => entry,
        };

        match brightness {
            255 => color,
            0 => Rgb::default(),
            _ => Rgb {
                r: scale8(color.r, brightness),
                g: scale8(color.g, brightness),
                b: scale8(color.b, brightness),
            },
        }
    }

    /// Move this palette toward `target` by at most `max_changes` channel steps.
    ///
    /// Each channel rises by one or falls by up to two per call and never
    /// passes its target. Returns the number of steps taken; zero means the
    /// palettes are equal.
    pub fn blend_towards(&mut self, target: &Self, max_changes: u8) -> usize {
        let budget = usize::from(max_changes.max(1));
        let mut changes = 0;

        for (current, goal) in self.stops.iter_mut().zip(target.stops.iter()) {
            for (channel, goal) in [
                (&mut current.r, goal.r),
                (&mut current.g, goal.g),
                (&mut current.b, goal.b),
            ] {
                if *channel == goal {
                    continue;
                }
                if *channel < goal {
                    *channel += 1;
                } else {
                    *channel -= 1;
                    if *channel > goal {
                        *channel -= 1;
                    }
                }
                changes += 1;
                if changes >= budget {
                    return changes;
                }
            }
        }

        changes
    }
}
