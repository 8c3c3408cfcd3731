//! Classic demo effects driven by the strip hue and color
//!
//! None of these keep state between frames beyond what is already in the
//! pixel buffer.

use super::{Effect, Frame};
use crate::{
    bounds::{clamp_index, last_index_u16},
    color::{
        BlendMode, fill_rainbow, fill_solid, hsv, max_channels,
        named::{GREEN, RED, WHITE},
    },
    math8::{beatsin8, beatsin16},
    random::{random_index, random8_lim},
    strip::Strip,
    transform::{add_glitter, fade_to_black_by},
};

const RAINBOW_HUE_STEP: u8 = 7;
const GLITTER_CHANCE: u8 = 80;
const GLITTER_FADE: u8 = 20;
const CONFETTI_FADE: u8 = 10;
const TRAIL_FADE: u8 = 20;
const SINELON_BPM: u16 = 13;
const BPM_TEMPO: u16 = 62;
const JUGGLE_DOTS: u16 = 8;

/// Fill with the strip color
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for SolidEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, _frame: &mut Frame<'_>) {
        let color = strip.color();
        fill_solid(strip.leds_mut(), color);
    }
}

/// Wiring check: white body, green at index 0, red at the far end
#[derive(Debug, Clone, Copy, Default)]
pub struct TestPatternEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for TestPatternEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, _frame: &mut Frame<'_>) {
        let last = strip.count() - 1;
        fill_solid(strip.leds_mut(), WHITE);
        strip.set_pixel(0, GREEN);
        if last > 0 {
            strip.set_pixel(last, RED);
        }
    }
}

/// Fading white sparkles
#[derive(Debug, Clone, Copy, Default)]
pub struct GlitterEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for GlitterEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let leds = strip.leds_mut();
        fade_to_black_by(leds, GLITTER_FADE);
        add_glitter(leds, GLITTER_CHANCE, frame.rng);
    }
}

/// Rainbow starting at the strip hue, optionally with sparkles
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect {
    glitter: bool,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { glitter: false }
    }

    #[must_use]
    pub const fn with_glitter(mut self) -> Self {
        self.glitter = true;
        self
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for RainbowEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let hue = strip.hue();
        let leds = strip.leds_mut();
        fill_rainbow(leds, hue, RAINBOW_HUE_STEP);
        if self.glitter {
            add_glitter(leds, GLITTER_CHANCE, frame.rng);
        }
    }
}

/// Whole strip on the strip hue
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for CycleEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, _frame: &mut Frame<'_>) {
        let color = hsv(strip.hue(), 200, 255);
        fill_solid(strip.leds_mut(), color);
    }
}

/// Random colored speckles that blink in and fade smoothly
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfettiEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for ConfettiEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        fade_to_black_by(strip.leds_mut(), CONFETTI_FADE);

        let pos = random_index(frame.rng, strip.count());
        let hue = strip.hue().wrapping_add(random8_lim(frame.rng, 64));
        strip.add_pixel(pos, hsv(hue, 200, 255));
    }
}

/// A colored dot sweeping back and forth, with fading trails
#[derive(Debug, Clone, Copy, Default)]
pub struct SinelonEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for SinelonEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        fade_to_black_by(strip.leds_mut(), TRAIL_FADE);

        let count = strip.count();
        let pos = beatsin16(SINELON_BPM, 0, last_index_u16(count), frame.now, 0);
        let color = hsv(strip.hue(), 255, 192);
        strip.add_pixel(clamp_index(usize::from(pos), count), color);
    }
}

/// Colored stripes pulsing at a defined tempo
#[derive(Debug, Clone, Copy, Default)]
pub struct BpmEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for BpmEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let beat = beatsin8(BPM_TEMPO, 64, 255, frame.now, 0);
        let hue = strip.hue();
        let palette = *strip.palette();

        for (i, led) in strip.leds_mut().iter_mut().enumerate() {
            let i = i as u8;
            let index = hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat.wrapping_sub(hue).wrapping_add(i.wrapping_mul(10));
            *led = palette.sample(index, brightness, BlendMode::Linear);
        }
    }
}

/// Eight colored dots, weaving in and out of sync with each other
#[derive(Debug, Clone, Copy, Default)]
pub struct JuggleEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for JuggleEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let last = last_index_u16(count);
        let leds = strip.leds_mut();
        fade_to_black_by(leds, TRAIL_FADE);

        let mut dot_hue: u8 = 0;
        for dot in 0..JUGGLE_DOTS {
            let pos = beatsin16(dot + 7, 0, last, frame.now, 0);
            let index = clamp_index(usize::from(pos), count);
            leds[index] = max_channels(leds[index], hsv(dot_hue, 200, 255));
            dot_hue = dot_hue.wrapping_add(32);
        }
    }
}

