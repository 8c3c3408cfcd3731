//! Beat-synchronized effects
//!
//! Positions and hues come from sine beats on the tick clock, brightness
//! mostly from the audio average.

use super::{Effect, Frame};
use crate::{
    bounds::{clamp_index, last_index_u16},
    color::{
        BlendMode, Rgb, blend_colors, fill_gradient_rgb, fill_rainbow, hsv,
        named::{AQUA, BLUE, PURPLE, RED, WHITE},
    },
    math8::{beatsin8, beatsin16, beatsin_signed, cubicwave8, qsuba},
    random::random_index,
    strip::Strip,
    transform::{add_glitter, fade_to_black_by, nscale8, waveit},
};

const BESIN_FADE: u8 = 2;
const DOT_BEAT_BPM: u16 = 30;
const DOT_BEAT_KEEP: u8 = 224;
const MURICA_BPM: u16 = 8;
const MURICA_FADE: u8 = 4;
const ONE_SINE_FREQ: i32 = 32;
const RAINBOW_BIT_FADE: u8 = 40;
const RAINBOW_BIT_HUE_STEP: u8 = 8;

/// Audio-bright palette color injected at the center and rippled outward
#[derive(Debug, Clone, Copy, Default)]
pub struct BesinEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for BesinEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let index = frame.now.as_millis() as u8;
        let color = strip
            .palette()
            .sample(index, frame.audio.sample_average, BlendMode::Nearest);

        let center = count / 2;
        strip.set_pixel(clamp_index(center, count), color);
        strip.set_pixel(center.saturating_sub(1), color);

        let leds = strip.leds_mut();
        waveit(leds);
        fade_to_black_by(leds, BESIN_FADE);
    }
}

/// Two drifting hue blends meeting at a sweeping split point
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendwaveEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for BlendwaveEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let now = frame.now;
        let speed = beatsin8(6, 0, 255, now, 0);
        let slow = hsv(beatsin8(3, 0, 255, now, 0), 255, 255);
        let fast = hsv(beatsin8(4, 0, 255, now, 0), 255, 255);

        let clr1 = blend_colors(slow, fast, speed);
        let clr2 = blend_colors(fast, slow, speed);

        let count = strip.count();
        let last = count - 1;
        let split = clamp_index(usize::from(beatsin16(10, 0, last_index_u16(count), now, 0)), count);

        let leds = strip.leds_mut();
        fill_gradient_rgb(leds, 0, clr2, split, clr1);
        fill_gradient_rgb(leds, split, clr2, last, clr1);
    }
}

/// Three dots bouncing over nested ranges, leaving trails
#[derive(Debug, Clone, Copy, Default)]
pub struct DotBeatEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for DotBeatEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let quarter = u16::try_from(count / 4).unwrap_or(u16::MAX);
        let third = u16::try_from(count / 3).unwrap_or(u16::MAX);

        let inner = beatsin16(DOT_BEAT_BPM, quarter, quarter.saturating_mul(3), frame.now, 0);
        let outer = beatsin16(DOT_BEAT_BPM, 0, last_index_u16(count), frame.now, 0);
        let middle = beatsin16(DOT_BEAT_BPM, third, third.saturating_mul(2), frame.now, 0);

        nscale8(strip.leds_mut(), DOT_BEAT_KEEP);

        strip.set_pixel(clamp_index(usize::from(middle), count), PURPLE);
        strip.set_pixel(clamp_index(usize::from(inner), count), BLUE);
        strip.set_pixel(clamp_index(usize::from(outer), count), AQUA);
    }
}

/// Blue, red and white dots sweeping a third of a cycle apart
#[derive(Debug, Clone, Copy, Default)]
pub struct MuricaEffect;

impl MuricaEffect {
    const COLORS: [Rgb; 3] = [BLUE, RED, WHITE];
    const PHASES: [u16; 3] = [0, 85 << 8, 170 << 8];
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for MuricaEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let last = last_index_u16(count);

        for (color, phase) in Self::COLORS.into_iter().zip(Self::PHASES) {
            let pos = beatsin16(MURICA_BPM, 0, last, frame.now, phase);
            strip.set_pixel(clamp_index(usize::from(pos), count), color);
        }

        fade_to_black_by(strip.leds_mut(), MURICA_FADE);
    }
}

/// A single sine wave whose visible width follows the audio level
#[derive(Debug, Clone, Copy, Default)]
pub struct OneSineEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for OneSineEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let cutoff = 255 - frame.audio.sample_average;
        let phase = i32::from(beatsin_signed(20, -600, 600, frame.now));
        let mut color_index = (frame.now.as_millis() >> 4) as u8;
        let palette = *strip.palette();
        let mode = strip.blend_mode();

        let leds = strip.leds_mut();
        for (k, led) in leds.iter_mut().enumerate() {
            let wave_phase = (k as i32).wrapping_mul(ONE_SINE_FREQ).wrapping_add(phase) as u8;
            let brightness = qsuba(cubicwave8(wave_phase), cutoff);
            *led = palette.sample(color_index, brightness, mode);
            color_index = color_index.wrapping_add(3);
        }

        add_glitter(leds, frame.audio.sample_average / 2, frame.rng);
    }
}

/// A burst of rainbow on a random span at every audio peak
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowBitEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for RainbowBitEffect {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let hue = beatsin8(17, 0, 255, frame.now, 0);
        let half = strip.count() / 2;
        let leds = strip.leds_mut();

        if frame.audio.sample_peak {
            let start = random_index(frame.rng, half);
            let len = random_index(frame.rng, half);
            fill_rainbow(&mut leds[start..start + len], hue, RAINBOW_BIT_HUE_STEP);
        }

        fade_to_black_by(leds, RAINBOW_BIT_FADE);
        add_glitter(leds, frame.audio.sample_average, frame.rng);
    }
}

/// Palette spread stretched by three interfering beats
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowGEffect;

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for RainbowGEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let beat_a = usize::from(beatsin8(17, 0, 255, frame.now, 0));
        let beat_b = usize::from(beatsin8(13, 0, 255, frame.now, 0));
        let beat_c = usize::from(beatsin8(11, 0, 255, frame.now, 0));
        let spread = (beat_a + beat_b + beat_c) / 3;

        let count = strip.count();
        let brightness = frame.audio.sample_average;
        let palette = *strip.palette();
        let mode = strip.blend_mode();

        let leds = strip.leds_mut();
        for (i, led) in leds.iter_mut().enumerate() {
            let index = (spread * i * 4 / count) as u8;
            *led = palette.sample(index, brightness, mode);
        }

        add_glitter(leds, brightness, frame.rng);
    }
}
