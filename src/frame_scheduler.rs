//! Frame pacing for one strip.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::audio::AudioSnapshot;
use crate::{OutputDriver, StripRenderer};

/// Default target frame rate (100 FPS, one frame per fire step).
pub const DEFAULT_FPS: u64 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let audio = microphone.snapshot();
///     let result = scheduler.tick(now, &audio, &mut rng);
///
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
{
    output: O,
    renderer: StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler running at [`DEFAULT_FPS`].
    pub fn new(renderer: StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, hand it to the output driver and return when the
    /// next one is due.
    ///
    /// When the caller has fallen more than two frames behind, the schedule
    /// restarts from `now` instead of rendering the backlog.
    pub fn tick(&mut self, now: Instant, audio: &AudioSnapshot, rng: &mut dyn RngCore) -> FrameResult {
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now, audio, rng);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn renderer(&self) -> &StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut StripRenderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
