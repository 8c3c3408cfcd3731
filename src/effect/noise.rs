//! Effects that walk through the 2D noise field

use super::{Effect, Frame};
use crate::{
    bounds::clamp_index,
    color::{BlendMode, Palette16},
    math8::beatsin8,
    noise::inoise8,
    strip::Strip,
    timing::Gate,
    transform::{add_glitter, fade_to_black_by, waveit},
};

const NOISE_SCALE: usize = 30;
const NOISE_BLEND_MS: u64 = 10;
const NOISE_PALETTE_MS: u64 = 5000;
const NOISE_PALETTE_STEPS: u8 = 48;
const FIRE_X_SCALE: usize = 20;
const FIRE_Y_SCALE: u64 = 3;
const CENTER_FADE: u8 = 128;

/// Noise bar in the middle of the strip whose width follows the audio level
#[derive(Debug, Clone, Copy, Default)]
pub struct FillNoiseEffect {
    xdist: u16,
    ydist: u16,
}

impl FillNoiseEffect {
    pub const fn new() -> Self {
        Self { xdist: 0, ydist: 0 }
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for FillNoiseEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let brightness = frame.audio.sample_average.min(u8::try_from(count).unwrap_or(u8::MAX));
        let width = usize::from(brightness);
        let palette = *strip.palette();

        let start = (count - width / 2) / 2;
        let end = (count + width / 2) / 2;
        let leds = strip.leds_mut();
        for i in start..end.min(count) {
            let step = (i * width) as u16;
            let index = inoise8(step.wrapping_add(self.xdist), self.ydist.wrapping_add(step));
            leds[i] = palette.sample(index, brightness, BlendMode::Linear);
        }

        let now = frame.now;
        self.xdist = self.xdist.wrapping_add(u16::from(beatsin8(5, 0, 3, now, 0)));
        self.ydist = self.ydist.wrapping_add(u16::from(beatsin8(4, 0, 3, now, 0)));

        add_glitter(leds, brightness / 2, frame.rng);
        waveit(leds);

        let center = (count / 2).saturating_sub(1);
        fade_to_black_by(&mut leds[center..(center + 2).min(count)], CENTER_FADE);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Full-strip noise on a palette that drifts to a new random one every few seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseEffect {
    dist: u16,
    blend_gate: Gate,
    palette_gate: Gate,
}

impl NoiseEffect {
    pub const fn new() -> Self {
        Self {
            dist: 0,
            blend_gate: Gate::new(),
            palette_gate: Gate::new(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill<const MAX_LEDS: usize>(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &Frame<'_>) {
        let palette = *strip.palette();
        let mode = strip.blend_mode();
        for (i, led) in strip.leds_mut().iter_mut().enumerate() {
            let step = (i * NOISE_SCALE) as u16;
            let index = inoise8(step, self.dist.wrapping_add(step));
            *led = palette.sample(index, 255, mode);
        }
        self.dist = self
            .dist
            .wrapping_add(u16::from(beatsin8(10, 1, 4, frame.now, 0)));
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for NoiseEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        if self.blend_gate.ready_ms(frame.now, NOISE_BLEND_MS) {
            strip.blend_palette_towards_target(NOISE_PALETTE_STEPS);
            self.fill(strip, frame);
        }

        if self.palette_gate.ready_ms(frame.now, NOISE_PALETTE_MS) {
            strip.set_target_palette(Palette16::random_four(frame.rng));
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Index into the fire palette at pixel `i`, darker toward the far end
#[allow(clippy::cast_possible_truncation)]
fn fire_noise_index(i: usize, count: usize, frame: &Frame<'_>) -> u8 {
    let y = frame.now.as_millis() * FIRE_Y_SCALE * count as u64 / 255;
    let noise = usize::from(inoise8((i * FIRE_X_SCALE) as u16, y as u16));
    ((255 - i * 256 / count) * noise / 128) as u8
}

/// Fire made of noise on the fire palette, brightness from the audio level
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseFireEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for NoiseFireEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        strip.set_palette(Palette16::FIRE);

        let count = strip.count();
        let brightness = frame.audio.sample_average;
        for i in 0..count {
            let index = fire_noise_index(i, count, frame);
            let color = Palette16::FIRE.sample(index, brightness, BlendMode::Nearest);
            strip.set_pixel(i, color);
        }
    }
}

/// Noise fire mirrored around the center
#[derive(Debug, Clone, Copy, Default)]
pub struct NoisePalEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for NoisePalEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        strip.set_palette(Palette16::FIRE);

        let count = strip.count();
        let half = count / 2;
        let brightness = frame.audio.sample_average;
        for i in 0..count {
            let index = fire_noise_index(i, count, frame);
            let color = Palette16::FIRE.sample(index, brightness, BlendMode::Nearest);

            let left = clamp_index(half + 1 - i / 2, count);
            let right = clamp_index((half + i / 2).saturating_sub(1), count);
            strip.set_pixel(left, color);
            strip.set_pixel(right, color);
        }
    }
}
