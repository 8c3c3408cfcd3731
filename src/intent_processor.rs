//! Intent processing module
//!
//! The control side describes what the lamp should look like; the renderer
//! drains those intents once per frame and applies the merged result.

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::effect::EffectId;

/// Requested change to one strip. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightIntent {
    pub power: Option<bool>,
    pub brightness: Option<u8>,
    pub color: Option<Rgb>,
    pub effect: Option<EffectId>,
}

impl LightIntent {
    pub const fn new() -> Self {
        Self {
            power: None,
            brightness: None,
            color: None,
            effect: None,
        }
    }

    #[must_use]
    pub const fn with_power(mut self, power: bool) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Overlay `newer` on top of `self`; fields set in `newer` win
    #[must_use]
    pub fn merge(self, newer: Self) -> Self {
        Self {
            power: newer.power.or(self.power),
            brightness: newer.brightness.or(self.brightness),
            color: newer.color.or(self.color),
            effect: newer.effect.or(self.effect),
        }
    }

    /// Check if the intent changes anything
    pub const fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.brightness.is_none()
            && self.color.is_none()
            && self.effect.is_none()
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, LightIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, LightIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<LightIntent, SIZE>;

/// Drains queued intents into one merged change
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Take every pending intent (non-blocking) and merge them in arrival
    /// order. Returns `None` when nothing was queued.
    pub fn process_pending(&mut self) -> Option<LightIntent> {
        let mut merged = LightIntent::new();
        let received = self.intents.drain(|intent| merged = merged.merge(intent));
        (received > 0).then_some(merged)
    }
}
