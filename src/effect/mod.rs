//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations. Each effect
//! implements the [`Effect`] trait and keeps whatever it must remember
//! between frames in its own struct, so two strips running the same effect
//! never share state.

mod beat;
mod fire;
mod fireworks;
mod noise;
mod plasma;
mod ripple;
mod simple;
mod sound;

use embassy_time::Instant;
use rand::RngCore;

pub use beat::{
    BesinEffect, BlendwaveEffect, DotBeatEffect, MuricaEffect, OneSineEffect, RainbowBitEffect,
    RainbowGEffect,
};
pub use fire::{FireEffect, FireVariant, HeatParams, heat_step};
pub use fireworks::{FireworksEffect, FireworksStage};
pub use noise::{FillNoiseEffect, NoiseEffect, NoiseFireEffect, NoisePalEffect};
pub use plasma::{PlasmaEffect, PlasmaSrEffect};
pub use ripple::{RIPPLE_MAX_STEPS, RippleEffect};
pub use simple::{
    BpmEffect, ConfettiEffect, CycleEffect, GlitterEffect, JuggleEffect, RainbowEffect,
    SinelonEffect, SolidEffect, TestPatternEffect,
};
pub use sound::{MatrixEffect, PixelEffect, PixelsEffect};

use crate::{audio::AudioSnapshot, strip::Strip};

/// Inputs shared by every effect for one tick
pub struct Frame<'a> {
    /// Tick time
    pub now: Instant,
    /// Audio snapshot, identical for every strip in this tick
    pub audio: &'a AudioSnapshot,
    /// Randomness source
    pub rng: &'a mut dyn RngCore,
}

impl<'a> Frame<'a> {
    pub fn new(now: Instant, audio: &'a AudioSnapshot, rng: &'a mut dyn RngCore) -> Self {
        Self { now, audio, rng }
    }
}

pub trait Effect<const MAX_LEDS: usize> {
    /// Render a single frame into the strip's pixel buffer
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    Solid = 0,
    Test = 1,
    Glitter = 2,
    Rainbow = 3,
    RainbowGlitter = 4,
    Cycle = 5,
    Confetti = 6,
    Sinelon = 7,
    Bpm = 8,
    Juggle = 9,
    Besin = 10,
    Blendwave = 11,
    DotBeat = 12,
    FillNoise = 13,
    Fire = 14,
    FireSr = 15,
    SplitFireSr = 16,
    Fireworks = 17,
    Matrix = 18,
    Murica = 19,
    Noise = 20,
    NoiseFire = 21,
    NoisePal = 22,
    OneSine = 23,
    Pixel = 24,
    Pixels = 25,
    Plasma = 26,
    PlasmaSr = 27,
    RainbowBit = 28,
    RainbowG = 29,
    Ripple = 30,
}

impl EffectId {
    /// Every effect, ordered by raw id
    pub const ALL: [Self; 31] = [
        Self::Solid,
        Self::Test,
        Self::Glitter,
        Self::Rainbow,
        Self::RainbowGlitter,
        Self::Cycle,
        Self::Confetti,
        Self::Sinelon,
        Self::Bpm,
        Self::Juggle,
        Self::Besin,
        Self::Blendwave,
        Self::DotBeat,
        Self::FillNoise,
        Self::Fire,
        Self::FireSr,
        Self::SplitFireSr,
        Self::Fireworks,
        Self::Matrix,
        Self::Murica,
        Self::Noise,
        Self::NoiseFire,
        Self::NoisePal,
        Self::OneSine,
        Self::Pixel,
        Self::Pixels,
        Self::Plasma,
        Self::PlasmaSr,
        Self::RainbowBit,
        Self::RainbowG,
        Self::Ripple,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Test => "test",
            Self::Glitter => "glitter",
            Self::Rainbow => "rainbow",
            Self::RainbowGlitter => "rainbow_glitter",
            Self::Cycle => "cycle",
            Self::Confetti => "confetti",
            Self::Sinelon => "sinelon",
            Self::Bpm => "bpm",
            Self::Juggle => "juggle",
            Self::Besin => "besin",
            Self::Blendwave => "blendwave",
            Self::DotBeat => "dot_beat",
            Self::FillNoise => "fill_noise",
            Self::Fire => "fire",
            Self::FireSr => "fire_sr",
            Self::SplitFireSr => "split_fire_sr",
            Self::Fireworks => "fireworks",
            Self::Matrix => "matrix",
            Self::Murica => "murica",
            Self::Noise => "noise",
            Self::NoiseFire => "noise_fire",
            Self::NoisePal => "noise_pal",
            Self::OneSine => "one_sine",
            Self::Pixel => "pixel",
            Self::Pixels => "pixels",
            Self::Plasma => "plasma",
            Self::PlasmaSr => "plasma_sr",
            Self::RainbowBit => "rainbow_bit",
            Self::RainbowG => "rainbow_g",
            Self::Ripple => "ripple",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// Build a fresh effect instance for this id
    pub fn to_slot<const MAX_LEDS: usize>(self) -> EffectSlot<MAX_LEDS> {
        match self {
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::Test => EffectSlot::Test(TestPatternEffect),
            Self::Glitter => EffectSlot::Glitter(GlitterEffect),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::RainbowGlitter => EffectSlot::RainbowGlitter(RainbowEffect::new().with_glitter()),
            Self::Cycle => EffectSlot::Cycle(CycleEffect),
            Self::Confetti => EffectSlot::Confetti(ConfettiEffect),
            Self::Sinelon => EffectSlot::Sinelon(SinelonEffect),
            Self::Bpm => EffectSlot::Bpm(BpmEffect),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect),
            Self::Besin => EffectSlot::Besin(BesinEffect),
            Self::Blendwave => EffectSlot::Blendwave(BlendwaveEffect),
            Self::DotBeat => EffectSlot::DotBeat(DotBeatEffect),
            Self::FillNoise => EffectSlot::FillNoise(FillNoiseEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new(FireVariant::Fixed)),
            Self::FireSr => EffectSlot::FireSr(FireEffect::new(FireVariant::SoundReactive)),
            Self::SplitFireSr => EffectSlot::SplitFireSr(FireEffect::new(FireVariant::Split)),
            Self::Fireworks => EffectSlot::Fireworks(FireworksEffect::new()),
            Self::Matrix => EffectSlot::Matrix(MatrixEffect::new()),
            Self::Murica => EffectSlot::Murica(MuricaEffect),
            Self::Noise => EffectSlot::Noise(NoiseEffect::new()),
            Self::NoiseFire => EffectSlot::NoiseFire(NoiseFireEffect),
            Self::NoisePal => EffectSlot::NoisePal(NoisePalEffect),
            Self::OneSine => EffectSlot::OneSine(OneSineEffect),
            Self::Pixel => EffectSlot::Pixel(PixelEffect::new()),
            Self::Pixels => EffectSlot::Pixels(PixelsEffect),
            Self::Plasma => EffectSlot::Plasma(PlasmaEffect::new()),
            Self::PlasmaSr => EffectSlot::PlasmaSr(PlasmaSrEffect::new()),
            Self::RainbowBit => EffectSlot::RainbowBit(RainbowBitEffect),
            Self::RainbowG => EffectSlot::RainbowG(RainbowGEffect),
            Self::Ripple => EffectSlot::Ripple(RippleEffect::new()),
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const MAX_LEDS: usize> {
    /// Fill with the strip color
    Solid(SolidEffect),
    /// White with green first and red last pixel
    Test(TestPatternEffect),
    /// Fading white sparkles
    Glitter(GlitterEffect),
    /// Rainbow starting at the strip hue
    Rainbow(RainbowEffect),
    /// Rainbow with sparkles
    RainbowGlitter(RainbowEffect),
    /// Whole strip cycling through hues
    Cycle(CycleEffect),
    /// Random speckles that fade out
    Confetti(ConfettiEffect),
    /// Dot sweeping back and forth with a trail
    Sinelon(SinelonEffect),
    /// Palette stripes pulsing at a fixed tempo
    Bpm(BpmEffect),
    /// Eight weaving dots
    Juggle(JuggleEffect),
    /// Amplitude-driven center pixels waving outward
    Besin(BesinEffect),
    /// Two blended beat colors split at a moving point
    Blendwave(BlendwaveEffect),
    /// Three dots on nested beat ranges
    DotBeat(DotBeatEffect),
    /// Noise soundbar as wide as the amplitude
    FillNoise(FillNoiseEffect),
    /// Heat simulation with fixed cooling and sparking
    Fire(FireEffect),
    /// Heat simulation driven by the audio amplitude
    FireSr(FireEffect),
    /// Sound-reactive heat simulation mirrored from the center
    SplitFireSr(FireEffect),
    /// Launch, flare, explode and fade particle show
    Fireworks(FireworksEffect<MAX_LEDS>),
    /// Palette column scrolling up the strip
    Matrix(MatrixEffect),
    /// Blue, red and white wave
    Murica(MuricaEffect),
    /// Noise field over a drifting random palette
    Noise(NoiseEffect),
    /// Noise mapped onto a fire palette
    NoiseFire(NoiseFireEffect),
    /// Noise fire mirrored around the center
    NoisePal(NoisePalEffect),
    /// One sine wave cut off by the amplitude
    OneSine(OneSineEffect),
    /// One pixel at a time blended toward the sample hue
    Pixel(PixelEffect),
    /// Whole strip blended toward sample hues
    Pixels(PixelsEffect),
    /// Two-wave plasma over a drifting random palette
    Plasma(PlasmaEffect),
    /// Plasma thresholded by the amplitude
    PlasmaSr(PlasmaSrEffect),
    /// Rainbow bursts on peaks
    RainbowBit(RainbowBitEffect),
    /// Three-beat palette rainbow
    RainbowG(RainbowGEffect),
    /// Ripples started by peaks
    Ripple(RippleEffect),
}

impl<const MAX_LEDS: usize> Default for EffectSlot<MAX_LEDS> {
    fn default() -> Self {
        Self::Rainbow(RainbowEffect::new())
    }
}

impl<const MAX_LEDS: usize> EffectSlot<MAX_LEDS> {
    fn as_effect_mut(&mut self) -> &mut dyn Effect<MAX_LEDS> {
        match self {
            Self::Solid(effect) => effect,
            Self::Test(effect) => effect,
            Self::Glitter(effect) => effect,
            Self::Rainbow(effect) | Self::RainbowGlitter(effect) => effect,
            Self::Cycle(effect) => effect,
            Self::Confetti(effect) => effect,
            Self::Sinelon(effect) => effect,
            Self::Bpm(effect) => effect,
            Self::Juggle(effect) => effect,
            Self::Besin(effect) => effect,
            Self::Blendwave(effect) => effect,
            Self::DotBeat(effect) => effect,
            Self::FillNoise(effect) => effect,
            Self::Fire(effect) | Self::FireSr(effect) | Self::SplitFireSr(effect) => effect,
            Self::Fireworks(effect) => effect,
            Self::Matrix(effect) => effect,
            Self::Murica(effect) => effect,
            Self::Noise(effect) => effect,
            Self::NoiseFire(effect) => effect,
            Self::NoisePal(effect) => effect,
            Self::OneSine(effect) => effect,
            Self::Pixel(effect) => effect,
            Self::Pixels(effect) => effect,
            Self::Plasma(effect) => effect,
            Self::PlasmaSr(effect) => effect,
            Self::RainbowBit(effect) => effect,
            Self::RainbowG(effect) => effect,
            Self::Ripple(effect) => effect,
        }
    }

    /// Render the current effect
    pub fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        self.as_effect_mut().render(strip, frame);
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        self.as_effect_mut().reset();
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid(_) => EffectId::Solid,
            Self::Test(_) => EffectId::Test,
            Self::Glitter(_) => EffectId::Glitter,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::RainbowGlitter(_) => EffectId::RainbowGlitter,
            Self::Cycle(_) => EffectId::Cycle,
            Self::Confetti(_) => EffectId::Confetti,
            Self::Sinelon(_) => EffectId::Sinelon,
            Self::Bpm(_) => EffectId::Bpm,
            Self::Juggle(_) => EffectId::Juggle,
            Self::Besin(_) => EffectId::Besin,
            Self::Blendwave(_) => EffectId::Blendwave,
            Self::DotBeat(_) => EffectId::DotBeat,
            Self::FillNoise(_) => EffectId::FillNoise,
            Self::Fire(_) => EffectId::Fire,
            Self::FireSr(_) => EffectId::FireSr,
            Self::SplitFireSr(_) => EffectId::SplitFireSr,
            Self::Fireworks(_) => EffectId::Fireworks,
            Self::Matrix(_) => EffectId::Matrix,
            Self::Murica(_) => EffectId::Murica,
            Self::Noise(_) => EffectId::Noise,
            Self::NoiseFire(_) => EffectId::NoiseFire,
            Self::NoisePal(_) => EffectId::NoisePal,
            Self::OneSine(_) => EffectId::OneSine,
            Self::Pixel(_) => EffectId::Pixel,
            Self::Pixels(_) => EffectId::Pixels,
            Self::Plasma(_) => EffectId::Plasma,
            Self::PlasmaSr(_) => EffectId::PlasmaSr,
            Self::RainbowBit(_) => EffectId::RainbowBit,
            Self::RainbowG(_) => EffectId::RainbowG,
            Self::Ripple(_) => EffectId::Ripple,
        }
    }
}
