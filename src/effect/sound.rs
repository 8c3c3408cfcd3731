//! Effects that paint the audio sample straight onto the strip

use super::{Effect, Frame};
use crate::{
    color::nblend,
    math8::beatsin8,
    strip::Strip,
    transform::{ShiftDirection, add_glitter, lineit},
};

const PIXEL_BLEND: u8 = 192;

/// Audio-bright palette colors streaming from pixel 0 toward the end
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixEffect {
    hue: u8,
}

impl MatrixEffect {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for MatrixEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let brightness = frame.audio.sample_average.saturating_mul(2);
        let color = strip.sample(self.hue, brightness);
        self.hue = self.hue.wrapping_add(1);

        strip.set_pixel(0, color);
        let leds = strip.leds_mut();
        lineit(leds, ShiftDirection::Up);
        add_glitter(leds, frame.audio.sample_average / 2, frame.rng);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}

/// One pixel per tick, walking the strip, tinted by the last sample
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelEffect {
    current: usize,
}

impl PixelEffect {
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Pixel written by the last frame
    pub const fn current(&self) -> usize {
        self.current
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for PixelEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        self.current = (self.current + 1) % count;

        let sample = frame.audio.previous_sample;
        let color = strip.sample(sample, sample);
        nblend(&mut strip.leds_mut()[self.current], color, PIXEL_BLEND);
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}

/// Whole strip blended toward a sample-tinted gradient that wobbles in place
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelsEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for PixelsEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let offset = usize::from(beatsin8(16, 0, 10, frame.now, 0));
        let count = strip.count();
        let sample = frame.audio.previous_sample;
        let brightness = frame.audio.sample_average;
        let palette = *strip.palette();
        let mode = strip.blend_mode();

        let leds = strip.leds_mut();
        for i in 0..count {
            let index = sample.wrapping_add((i as u8).wrapping_mul(8));
            let color = palette.sample(index, brightness, mode);
            nblend(&mut leds[(i + offset) % count], color, PIXEL_BLEND);
        }
    }
}
