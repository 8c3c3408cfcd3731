use embassy_time::{Duration, Instant};
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::audio::AudioSnapshot;
use crate::color::{Rgb, fill_solid};
use crate::effect::{EffectId, EffectSlot, Frame};
use crate::intent_processor::{IntentProcessor, IntentReceiver, LightIntent};
use crate::strip::{Strip, StripConfig, StripError};
use crate::timing::Gate;
use crate::transform::nscale8;

/// How often the strip hue advances by one step
pub const HUE_STEP_INTERVAL: Duration = Duration::from_millis(20);

/// Drives one strip: applies intents, runs the active effect and produces
/// the brightness-scaled frame for the output driver.
pub struct StripRenderer<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize> {
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,

    strip: Strip<MAX_LEDS>,
    effect: EffectSlot<MAX_LEDS>,
    hue_gate: Gate,
    power: bool,
    brightness: u8,

    output: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a renderer for the strip described by `config`.
    ///
    /// The strip starts powered on with the configured effect.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &StripConfig,
    ) -> Result<Self, StripError> {
        let strip = Strip::new(config)?;
        Ok(Self {
            intent_processor: IntentProcessor::new(intents),
            strip,
            effect: config.effect.to_slot(),
            hue_gate: Gate::new(),
            power: true,
            brightness: config.brightness,
            output: [Rgb::default(); MAX_LEDS],
        })
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per tick with the
    /// audio snapshot shared by every strip for that tick.
    pub fn render(&mut self, now: Instant, audio: &AudioSnapshot, rng: &mut dyn RngCore) -> &[Rgb] {
        self.process_intents();

        if self.hue_gate.ready(now, HUE_STEP_INTERVAL) {
            self.strip.advance_hue();
        }

        let mut frame = Frame::new(now, audio, rng);
        self.effect.render(&mut self.strip, &mut frame);

        self.compose_output()
    }

    /// Copy the effect buffer into the output buffer, scaled by brightness
    fn compose_output(&mut self) -> &[Rgb] {
        let count = self.strip.count();
        let output = &mut self.output[..count];
        if self.power {
            output.copy_from_slice(self.strip.leds());
            nscale8(output, self.brightness);
        } else {
            fill_solid(output, Rgb::default());
        }
        output
    }

    fn process_intents(&mut self) {
        if let Some(intent) = self.intent_processor.process_pending() {
            self.apply(intent);
        }
    }

    /// Apply a merged intent
    pub fn apply(&mut self, intent: LightIntent) {
        if let Some(effect) = intent.effect {
            self.set_effect(effect);
        }
        if let Some(color) = intent.color {
            self.strip.set_color(color);
        }
        if let Some(brightness) = intent.brightness {
            self.brightness = brightness;
        }
        if let Some(power) = intent.power {
            self.power = power;
        }
    }

    /// Switch to a fresh instance of `effect`.
    ///
    /// The previous effect's private state is discarded and the heat cells
    /// are cleared, so fires always start cold.
    pub fn set_effect(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripRenderer.set_effect] pin {}: {} -> {}",
            self.strip.pin(),
            self.effect.id().as_str(),
            effect.as_str()
        );

        self.effect = effect.to_slot();
        self.effect.reset();
        self.strip.clear_heat();
    }

    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn is_on(&self) -> bool {
        self.power
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
    }

    pub const fn strip(&self) -> &Strip<MAX_LEDS> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<MAX_LEDS> {
        &mut self.strip
    }
}
