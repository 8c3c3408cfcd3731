//! Buffer transforms shared by several effects

use rand::RngCore;

use crate::{
    color::{Rgb, add_saturating, named::WHITE},
    math8::scale8,
    random::{chance8, random_index},
};

/// Direction of a one-slot buffer shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Toward the last pixel
    Up,
    /// Toward pixel 0
    Down,
}

/// Scale every channel of every pixel by `scale / 256`
pub fn nscale8(leds: &mut [Rgb], scale: u8) {
    for led in leds {
        led.r = scale8(led.r, scale);
        led.g = scale8(led.g, scale);
        led.b = scale8(led.b, scale);
    }
}

/// Dim every pixel by `amount / 255`; 255 is black, 0 is a no-op
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    nscale8(leds, 255 - amount);
}

/// With probability `chance / 256`, add white to one random pixel
pub fn add_glitter<R: RngCore + ?Sized>(leds: &mut [Rgb], chance: u8, rng: &mut R) {
    if leds.is_empty() || !chance8(rng, chance) {
        return;
    }
    let index = random_index(rng, leds.len());
    leds[index] = add_saturating(leds[index], WHITE);
}

/// Shift the first half of the buffer toward pixel 0 and the second half
/// toward the end, so content seeded in the middle ripples outward.
///
/// Pixel `len / 2` keeps its value and seeds both halves; the outermost
/// values fall off.
pub fn waveit(leds: &mut [Rgb]) {
    let len = leds.len();
    if len < 2 {
        return;
    }
    let half = len / 2;

    // Move to the right.
    for i in (half + 1..len).rev() {
        leds[i] = leds[i - 1];
    }

    // Move to the left.
    for i in 0..half {
        leds[i] = leds[i + 1];
    }
}

/// Shift the whole buffer one slot, duplicating the edge it leaves
pub fn lineit(leds: &mut [Rgb], direction: ShiftDirection) {
    if leds.len() < 2 {
        return;
    }
    match direction {
        ShiftDirection::Up => leds.copy_within(..leds.len() - 1, 1),
        ShiftDirection::Down => leds.copy_within(1.., 0),
    }
}

/// Move `value` one step in `direction`, clamped to `min..=max`
pub fn shift(value: i32, min: i32, max: i32, direction: ShiftDirection) -> i32 {
    let stepped = match direction {
        ShiftDirection::Up => value.saturating_add(1),
        ShiftDirection::Down => value.saturating_sub(1),
    };
    if max < min {
        return min;
    }
    stepped.clamp(min, max)
}
