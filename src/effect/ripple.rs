//! Peak-triggered ripple
//!
//! Every audio peak restarts the ripple at a random center. The ripple then
//! spreads one pixel per tick in both directions, dimming as it goes, and
//! stops after [`RIPPLE_MAX_STEPS`] until the next peak.

use super::{Effect, Frame};
use crate::{
    bounds::wrap_index,
    random::random_index,
    strip::Strip,
    transform::{add_glitter, fade_to_black_by},
};

/// Step at which a ripple stops spreading
pub const RIPPLE_MAX_STEPS: i8 = 16;

const RIPPLE_FADE: u8 = 64;

/// Expanding ring of palette color around a random center
#[derive(Debug, Clone, Copy)]
pub struct RippleEffect {
    color: u8,
    center: usize,
    step: i8,
}

impl Default for RippleEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleEffect {
    pub const fn new() -> Self {
        Self {
            color: 0,
            center: 0,
            step: -1,
        }
    }

    /// Current ripple step: -1 before a center is picked, then 0 up to
    /// [`RIPPLE_MAX_STEPS`]
    pub const fn step(&self) -> i8 {
        self.step
    }

    /// Center of the running ripple
    pub const fn center(&self) -> usize {
        self.center
    }

    /// Brightness of the two ring pixels at `step`
    fn ring_brightness(step: i8) -> u8 {
        let step = u16::from(step.unsigned_abs());
        u8::try_from(255 / step * 2).unwrap_or(u8::MAX)
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for RippleEffect {
    #[allow(clippy::cast_possible_wrap)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        if frame.audio.sample_peak {
            self.step = -1;
        }

        fade_to_black_by(strip.leds_mut(), RIPPLE_FADE);

        let count = strip.count();
        if self.step == -1 {
            self.center = random_index(frame.rng, count);
            self.color = frame.audio.previous_sample % 255;
            self.step = 0;
        }

        match self.step {
            0 => {
                let color = strip.sample(self.color, 255);
                strip.add_pixel(self.center, color);
                self.step = 1;
            }
            RIPPLE_MAX_STEPS => {}
            step => {
                let color = strip.sample(self.color, Self::ring_brightness(step));
                let center = self.center as isize;
                let offset = isize::from(step);
                strip.add_pixel(wrap_index(center + offset, count), color);
                strip.add_pixel(wrap_index(center - offset, count), color);
                self.step += 1;
            }
        }

        add_glitter(strip.leds_mut(), frame.audio.sample_average, frame.rng);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
