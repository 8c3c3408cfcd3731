//! Heat-diffusion fire
//!
//! Every strip carries one heat cell per pixel. On each step the cells cool
//! a little, heat drifts away from pixel 0, and new sparks may ignite near
//! the base. The cells are then mapped through the heat color ramp.

use rand::RngCore;

use super::{Effect, Frame};
use crate::{
    audio::AudioSnapshot,
    bounds::clamp_index,
    color::heat_color,
    math8::{map_range, qadd8, qsub8},
    random::{chance8, random8_lim, random8_range},
    strip::Strip,
    timing::Gate,
};

const FIRE_STEP_MS: u64 = 10;
const SPARK_ZONE: u8 = 7;
const SPARK_HEAT_MIN: u8 = 160;
const SPARK_HEAT_MAX: u8 = 255;

/// Tuning for one heat step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatParams {
    /// How fast cells lose heat; higher gives shorter flames
    pub cooling: u16,
    /// Chance out of 255 that a spark ignites on a step
    pub sparking: u8,
}

impl HeatParams {
    /// Fixed tuning of the plain fire effect
    pub const CLASSIC: Self = Self {
        cooling: 75,
        sparking: 100,
    };

    /// Tuning derived from the audio level, boosted on a peak
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_audio(audio: &AudioSnapshot) -> Self {
        let avg = i32::from(audio.sample_average);
        let mut sparking = map_range(avg, 0, 255, 0, 100) as u16;
        let mut cooling = map_range(255 - avg, 0, 255, 20, 200) as u16;

        if audio.sample_peak {
            sparking = sparking * 16 / 10;
            cooling = cooling * 27 / 10;
        }

        Self {
            cooling,
            sparking: u8::try_from(sparking).unwrap_or(u8::MAX),
        }
    }

    /// Upper bound of the random cooling applied to one cell
    fn cooling_limit(self, count: usize) -> u8 {
        let count = count.max(1);
        let limit = usize::from(self.cooling) * 10 / count + 2;
        u8::try_from(limit).unwrap_or(u8::MAX)
    }
}

/// Advance the heat simulation by one step.
///
/// `count` is the strip length the cooling rate is normalised against; it
/// may be larger than `cells` when only part of the strip simulates.
#[allow(clippy::cast_possible_truncation)]
pub fn heat_step<R: RngCore + ?Sized>(cells: &mut [u8], params: HeatParams, count: usize, rng: &mut R) {
    if cells.is_empty() {
        return;
    }

    // Cool down every cell a little.
    let limit = params.cooling_limit(count);
    for cell in cells.iter_mut() {
        *cell = qsub8(*cell, random8_range(rng, 0, limit));
    }

    // Heat drifts up and diffuses. Must run from the top down.
    for k in (2..cells.len()).rev() {
        let sum = u16::from(cells[k - 1]) + 2 * u16::from(cells[k - 2]);
        cells[k] = (sum / 3) as u8;
    }

    // Randomly ignite new sparks near the bottom.
    if chance8(rng, params.sparking) {
        let y = clamp_index(usize::from(random8_lim(rng, SPARK_ZONE)), cells.len());
        cells[y] = qadd8(cells[y], random8_range(rng, SPARK_HEAT_MIN, SPARK_HEAT_MAX));
    }
}

/// How a fire effect picks its tuning and lays out its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireVariant {
    /// Fixed cooling and sparking
    Fixed,
    /// Cooling and sparking follow the audio level
    SoundReactive,
    /// Sound reactive, burning outward from the center in both directions
    Split,
}

/// Fire simulation on the strip's heat cells
#[derive(Debug, Clone, Copy)]
pub struct FireEffect {
    variant: FireVariant,
    gate: Gate,
}

impl FireEffect {
    pub const fn new(variant: FireVariant) -> Self {
        Self {
            variant,
            gate: Gate::new(),
        }
    }

    pub const fn variant(&self) -> FireVariant {
        self.variant
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for FireEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        if !self.gate.ready_ms(frame.now, FIRE_STEP_MS) {
            return;
        }

        let params = match self.variant {
            FireVariant::Fixed => HeatParams::CLASSIC,
            FireVariant::SoundReactive | FireVariant::Split => HeatParams::from_audio(frame.audio),
        };

        let count = strip.count();
        let (heat, leds) = strip.heat_and_leds_mut();
        match self.variant {
            FireVariant::Fixed | FireVariant::SoundReactive => {
                heat_step(heat, params, count, frame.rng);
                for (led, cell) in leds.iter_mut().zip(heat.iter()) {
                    *led = heat_color(*cell);
                }
            }
            FireVariant::Split => {
                let half = count / 2;
                let cells = &mut heat[..half];
                heat_step(cells, params, count, frame.rng);
                for (j, cell) in cells.iter().enumerate() {
                    let color = heat_color(*cell);
                    leds[half - j - 1] = color;
                    leds[half + j] = color;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.gate = Gate::new();
    }
}
