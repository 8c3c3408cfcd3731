#![no_std]

pub mod audio;
pub mod bounds;
pub mod channel;
pub mod color;
pub mod effect;
pub mod frame_scheduler;
pub mod intent_processor;
pub mod math8;
pub mod noise;
pub mod random;
pub mod renderer;
pub mod strip;
pub mod timing;
pub mod transform;

pub use audio::AudioSnapshot;
pub use effect::{Effect, EffectId, EffectSlot, Frame};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent_processor::{
    IntentChannel, IntentProcessor, IntentReceiver, IntentSender, LightIntent,
};
pub use renderer::StripRenderer;
pub use strip::{Strip, StripConfig, StripError};
pub use timing::Gate;

pub use color::{BlendMode, Hsv, Palette16, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
