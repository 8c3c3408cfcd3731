//! Fireworks particle simulation
//!
//! A single rocket climbs from pixel 0 trailed by a few launch sparks,
//! bursts at its apex into a spray of sparks proportional to its height,
//! and the sparks cool from white through yellow and red to black while
//! they drift down. Then the strip stays dark for a random pause.
//!
//! Positions and velocities are in pixels and pixels per tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use libm::fabsf;

use super::{Effect, Frame};
use crate::{
    bounds::position_index,
    color::{Rgb, heat_color, hsv, nscale8_video},
    random::{random8, random16_range},
    strip::Strip,
    timing::Gate,
};

const LAUNCH_SPARKS: usize = 5;
const GRAVITY: f32 = -0.002;
const FLARE_DECAY: f32 = 0.985;
const FLARE_APEX_VELOCITY: f32 = -0.1;
const LAUNCH_SPARK_COOLING: f32 = 0.98;
const LAUNCH_SPARK_SCALE: u8 = 50;
const SPARK_DECAY: f32 = 0.99;
const DYING_GRAVITY_DECAY: f32 = 0.70;
const WHITE_THRESHOLD: f32 = 96.0;
const RED_THRESHOLD: f32 = 48.0;
const TRACKED_SPARK_FLOOR: f32 = RED_THRESHOLD / 128.0;
const WAIT_MIN_MS: u16 = 500;
const WAIT_MAX_MS: u16 = 5000;

/// Stage of the fireworks state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworksStage {
    /// Dark pause before the next rocket
    Wait,
    /// Rocket and launch sparks are placed at pixel 0
    Launch,
    /// Rocket climbing until it passes its apex
    Flare,
    /// Burst sparks are spawned at the apex
    Explode,
    /// Burst sparks drift and cool down
    Fade,
}

/// Fireworks state, sized for up to `MAX_LEDS` sparks
#[derive(Debug, Clone)]
pub struct FireworksEffect<const MAX_LEDS: usize> {
    stage: FireworksStage,
    spark_pos: [f32; MAX_LEDS],
    spark_vel: [f32; MAX_LEDS],
    spark_col: [f32; MAX_LEDS],
    spark_count: usize,
    flare_pos: f32,
    flare_vel: f32,
    brightness: f32,
    dying_gravity: f32,
    wait_gate: Gate,
    wait_interval: Option<u64>,
}

impl<const MAX_LEDS: usize> Default for FireworksEffect<MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize> FireworksEffect<MAX_LEDS> {
    pub const fn new() -> Self {
        Self {
            stage: FireworksStage::Wait,
            spark_pos: [0.0; MAX_LEDS],
            spark_vel: [0.0; MAX_LEDS],
            spark_col: [0.0; MAX_LEDS],
            spark_count: 0,
            flare_pos: 0.0,
            flare_vel: 0.0,
            brightness: 0.0,
            dying_gravity: GRAVITY,
            wait_gate: Gate::new(),
            wait_interval: None,
        }
    }

    pub const fn stage(&self) -> FireworksStage {
        self.stage
    }

    /// Number of burst sparks alive in the fade stage
    pub const fn spark_count(&self) -> usize {
        self.spark_count
    }

    pub const fn flare_position(&self) -> f32 {
        self.flare_pos
    }

    /// Energy of the spark whose cooling ends the burst
    pub fn tracked_energy(&self) -> f32 {
        self.spark_col.first().copied().unwrap_or(0.0)
    }

    fn enter(&mut self, stage: FireworksStage) {
        #[cfg(feature = "esp32-log")]
        println!("[Fireworks] {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    fn wait(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        strip.clear();

        let interval = match self.wait_interval {
            Some(interval) => interval,
            None => {
                let interval = u64::from(random16_range(frame.rng, WAIT_MIN_MS, WAIT_MAX_MS));
                self.wait_gate.reset(frame.now);
                self.wait_interval = Some(interval);
                interval
            }
        };

        if self.wait_gate.ready_ms(frame.now, interval) {
            self.wait_interval = None;
            self.enter(FireworksStage::Launch);
        }
    }

    fn launch(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        self.flare_pos = 0.0;
        self.flare_vel = f32::from(random16_range(frame.rng, 35, 45)) / 100.0;
        self.brightness = 1.0;

        let sparks = LAUNCH_SPARKS.min(MAX_LEDS);
        for i in 0..sparks {
            self.spark_pos[i] = 0.0;
            self.spark_vel[i] = f32::from(random8(frame.rng)) / 255.0 * (self.flare_vel / 5.0);
            self.spark_col[i] = (self.spark_vel[i] * 2000.0).clamp(32.0, 255.0);
        }

        strip.clear();
        self.enter(FireworksStage::Flare);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn flare(&mut self, strip: &mut Strip<MAX_LEDS>) {
        if self.flare_vel < FLARE_APEX_VELOCITY {
            self.enter(FireworksStage::Explode);
            return;
        }

        let count = strip.count();
        let top = count as f32;
        strip.clear();

        let sparks = LAUNCH_SPARKS.min(MAX_LEDS);
        for i in 0..sparks {
            self.spark_pos[i] = (self.spark_pos[i] + self.spark_vel[i]).clamp(0.0, top);
            self.spark_vel[i] += GRAVITY;
            self.spark_col[i] = (self.spark_col[i] - LAUNCH_SPARK_COOLING).clamp(32.0, 255.0);

            let color = nscale8_video(heat_color(self.spark_col[i] as u8), LAUNCH_SPARK_SCALE);
            strip.set_pixel(position_index(self.spark_pos[i], count), color);
        }

        let flare = hsv(0, 0, (self.brightness * 255.0) as u8);
        strip.set_pixel(position_index(self.flare_pos, count), flare);

        self.flare_pos = (self.flare_pos + self.flare_vel).clamp(0.0, top);
        self.flare_vel += GRAVITY;
        self.brightness *= FLARE_DECAY;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn explode(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        let count = strip.count();
        let height_scale = (self.flare_pos / 8.0) / count as f32;
        // Always keep the tracked spark so the fade stage can end.
        self.spark_count = ((self.flare_pos / 3.0) as usize).max(1).min(MAX_LEDS);

        for i in 0..self.spark_count {
            let velocity = f32::from(random16_range(frame.rng, 0, 20000)) / 10000.0 - 1.0;
            self.spark_pos[i] = self.flare_pos;
            self.spark_col[i] = (fabsf(velocity) * 300.0).clamp(128.0, 255.0);
            self.spark_vel[i] = velocity * height_scale;
        }

        if let Some(tracked) = self.spark_col.first_mut() {
            *tracked = 255.0;
        }
        self.dying_gravity = GRAVITY;

        strip.clear();
        self.enter(FireworksStage::Fade);
    }

    #[allow(clippy::cast_precision_loss)]
    fn fade(&mut self, strip: &mut Strip<MAX_LEDS>) {
        if self.tracked_energy() <= TRACKED_SPARK_FLOOR {
            self.spark_count = 0;
            self.enter(FireworksStage::Wait);
            return;
        }

        let count = strip.count();
        let top = count as f32;
        strip.clear();

        for i in 0..self.spark_count {
            self.spark_pos[i] = (self.spark_pos[i] + self.spark_vel[i]).clamp(0.0, top);
            self.spark_vel[i] += self.dying_gravity;
            self.spark_col[i] = (self.spark_col[i] * SPARK_DECAY).clamp(0.0, 255.0);

            strip.set_pixel(position_index(self.spark_pos[i], count), spark_color(self.spark_col[i]));
        }

        self.dying_gravity *= DYING_GRAVITY_DECAY;
        strip.set_pixel(0, Rgb::default());
    }
}

/// White to yellow to red to black ramp over spark energy 255..0
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn spark_color(energy: f32) -> Rgb {
    if energy > WHITE_THRESHOLD {
        let blue = 255.0 * (energy - WHITE_THRESHOLD) / (255.0 - WHITE_THRESHOLD);
        Rgb::new(255, 255, blue as u8)
    } else if energy < RED_THRESHOLD {
        let red = 255.0 * energy / RED_THRESHOLD;
        Rgb::new(red as u8, 0, 0)
    } else {
        let green = 255.0 * (energy - RED_THRESHOLD) / (WHITE_THRESHOLD - RED_THRESHOLD);
        Rgb::new(255, green as u8, 0)
    }
}

impl<const MAX_LEDS: usize> Effect<MAX_LEDS> for FireworksEffect<MAX_LEDS> {
    fn render(&mut self, strip: &mut Strip<MAX_LEDS>, frame: &mut Frame<'_>) {
        match self.stage {
            FireworksStage::Wait => self.wait(strip, frame),
            FireworksStage::Launch => self.launch(strip, frame),
            FireworksStage::Flare => self.flare(strip),
            FireworksStage::Explode => self.explode(strip, frame),
            FireworksStage::Fade => self.fade(strip),
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
