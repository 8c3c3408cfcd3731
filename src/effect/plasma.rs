//! Plasma: two interfering waves with drifting phases

use super::{Effect, Frame};
use crate::{
    color::{BlendMode, Palette16},
    math8::{beatsin8, beatsin_signed, cos8, cubicwave8, qsuba},
    random::random8,
    strip::Strip,
    timing::Gate,
    transform::add_glitter,
};

const PLASMA_FRAME_MS: u64 = 50;
const PLASMA_BLEND_MS: u64 = 100;
const PLASMA_PALETTE_MS: u64 = 5000;
const PLASMA_PALETTE_STEPS: u8 = 24;

/// Sum of a cubic wave and a cosine wave at pixel `k`, 0-254
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn plasma_index(k: usize, this_freq: usize, that_freq: usize, this_phase: i16, that_phase: i16) -> u8 {
    // Phases only matter modulo 256.
    let this = ((k * this_freq) as u8).wrapping_add(this_phase as u8);
    let that = ((k * that_freq) as u8).wrapping_add(that_phase as u8);
    cubicwave8(this) / 2 + cos8(that) / 2
}

/// Plasma on a palette that keeps drifting toward random hues
#[derive(Debug, Clone, Copy, Default)]
pub struct PlasmaEffect {
    frame_gate: Gate,
    blend_gate: Gate,
    palette_gate: Gate,
}

impl PlasmaEffect {
    pub const fn new() -> Self {
        Self {
            frame_gate: Gate::new(),
            blend_gate: Gate::new(),
            palette_gate: Gate::new(),
        }
    }

    fn paint<const MAX_LEDS: usize>(strip: &mut Strip<MAX_LEDS>, frame: &Frame<'_>) {
        let this_phase = beatsin_signed(6, -64, 64, frame.now);
        let that_phase = beatsin_signed(7, -64, 64, frame.now);
        let cutoff = beatsin8(7, 0, 96, frame.now, 0);
        let palette = *strip.palette();

        for (k, led) in strip.leds_mut().iter_mut().enumerate() {
            let index = plasma_index(k, 23, 15, this_phase, that_phase);
            let brightness = qsuba(index, cutoff);
            *led = palette.sample(index, brightness, BlendMode::Linear);
        }
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for PlasmaEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        if self.frame_gate.ready_ms(frame.now, PLASMA_FRAME_MS) {
            Self::paint(strip, frame);
        }

        if self.blend_gate.ready_ms(frame.now, PLASMA_BLEND_MS) {
            strip.blend_palette_towards_target(PLASMA_PALETTE_STEPS);
        }

        if self.palette_gate.ready_ms(frame.now, PLASMA_PALETTE_MS) {
            let base_hue = random8(frame.rng);
            strip.set_target_palette(Palette16::random_around(frame.rng, base_hue));
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Sound-reactive plasma: louder audio reveals more of the wave
#[derive(Debug, Clone, Copy, Default)]
pub struct PlasmaSrEffect {
    this_phase: i16,
    that_phase: i16,
}

impl PlasmaSrEffect {
    pub const fn new() -> Self {
        Self {
            this_phase: 0,
            that_phase: 0,
        }
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for PlasmaSrEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        self.this_phase = self
            .this_phase
            .wrapping_add(beatsin_signed(6, -4, 4, frame.now));
        self.that_phase = self
            .that_phase
            .wrapping_add(beatsin_signed(7, -4, 4, frame.now));

        let cutoff = 255 - frame.audio.sample_average;
        let palette = *strip.palette();
        let mode = strip.blend_mode();

        let leds = strip.leds_mut();
        for (k, led) in leds.iter_mut().enumerate() {
            let index = plasma_index(k, 8, 10, self.this_phase, self.that_phase);
            let brightness = qsuba(index, cutoff);
            *led = palette.sample(index, brightness, mode);
        }

        add_glitter(leds, frame.audio.sample_average / 2, frame.rng);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
