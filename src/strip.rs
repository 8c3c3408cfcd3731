//! Per-strip render state
//!
//! One [`Strip`] exists per physical strand. Effects get it by mutable
//! reference every tick and own nothing in it except what they write into
//! the pixel and heat buffers.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::{checked_index, clamp_index};
use crate::color::{BlendMode, Palette16, Rgb, add_saturating, fill_solid};
use crate::effect::EffectId;

/// Startup configuration of one strip
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of pixels actually attached
    pub pixel_count: usize,
    /// Output pin, passed through to the driver
    pub pin: u8,
    /// Output offset, passed through to the driver
    pub offset: u16,
    /// Effect selected at boot
    pub effect: EffectId,
    /// Primary color for single-color effects
    pub color: Rgb,
    /// Output brightness (0-255)
    pub brightness: u8,
}

impl StripConfig {
    /// Configuration with the given pixel count and defaults for the rest
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            pin: 0,
            offset: 0,
            effect: EffectId::Rainbow,
            color: Rgb { r: 255, g: 255, b: 255 },
            brightness: 255,
        }
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_output(mut self, pin: u8, offset: u16) -> Self {
        self.pin = pin;
        self.offset = offset;
        self
    }
}

/// Rejected strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Pixel count of zero
    EmptyStrip,
    /// Pixel count larger than the compiled buffer capacity
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "strip must have at least one pixel"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "strip of {requested} pixels exceeds buffer capacity of {capacity}"
            ),
        }
    }
}

impl core::error::Error for StripError {}

/// Durable state of one strip
#[derive(Debug, Clone)]
pub struct Strip<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    heat: [u8; MAX_LEDS],
    count: usize,
    pin: u8,
    offset: u16,

    current_palette: Palette16,
    target_palette: Palette16,
    blend_mode: BlendMode,

    hue: u8,
    color: Rgb,
}

impl<const MAX_LEDS: usize> Strip<MAX_LEDS> {
    /// Create a strip, rejecting an empty or oversized pixel count
    pub fn new(config: &StripConfig) -> Result<Self, StripError> {
        let count = config.pixel_count;
        if count == 0 {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.new] rejected empty strip on pin {}", config.pin);
            return Err(StripError::EmptyStrip);
        }
        if count > MAX_LEDS {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Strip.new] rejected {} pixels, capacity is {}",
                count, MAX_LEDS
            );
            return Err(StripError::CapacityExceeded {
                requested: count,
                capacity: MAX_LEDS,
            });
        }

        Ok(Self {
            pixels: [Rgb::default(); MAX_LEDS],
            heat: [0; MAX_LEDS],
            count,
            pin: config.pin,
            offset: config.offset,
            current_palette: Palette16::PARTY,
            target_palette: Palette16::PARTY,
            blend_mode: BlendMode::Linear,
            hue: 0,
            color: config.color,
        })
    }

    /// Number of pixels in use
    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn pin(&self) -> u8 {
        self.pin
    }

    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Active pixels
    pub fn leds(&self) -> &[Rgb] {
        &self.pixels[..self.count]
    }

    /// Active pixels, mutable
    pub fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.count]
    }

    /// Active heat cells
    pub fn heat(&self) -> &[u8] {
        &self.heat[..self.count]
    }

    /// Active heat cells and pixels, borrowed together
    pub fn heat_and_leds_mut(&mut self) -> (&mut [u8], &mut [Rgb]) {
        (&mut self.heat[..self.count], &mut self.pixels[..self.count])
    }

    /// Pixel at `index`, clamped into range
    pub fn pixel(&self, index: usize) -> Rgb {
        self.pixels[clamp_index(index, self.count)]
    }

    /// Overwrite the pixel at `index`
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        let index = checked_index(index, self.count);
        self.pixels[index] = color;
    }

    /// Saturating-add `color` onto the pixel at `index`
    pub fn add_pixel(&mut self, index: usize, color: Rgb) {
        let index = checked_index(index, self.count);
        self.pixels[index] = add_saturating(self.pixels[index], color);
    }

    /// Turn every pixel black
    pub fn clear(&mut self) {
        fill_solid(self.leds_mut(), Rgb::default());
    }

    /// Cool every heat cell to zero
    pub fn clear_heat(&mut self) {
        self.heat.fill(0);
    }

    /// Palette used for rendering
    pub const fn palette(&self) -> &Palette16 {
        &self.current_palette
    }

    pub fn set_palette(&mut self, palette: Palette16) {
        self.current_palette = palette;
    }

    /// Palette the current one is drifting toward
    pub const fn target_palette(&self) -> &Palette16 {
        &self.target_palette
    }

    pub fn set_target_palette(&mut self, palette: Palette16) {
        self.target_palette = palette;
    }

    /// Step the current palette toward the target palette
    pub fn blend_palette_towards_target(&mut self, max_changes: u8) -> usize {
        let target = self.target_palette;
        self.current_palette.blend_towards(&target, max_changes)
    }

    pub const fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    /// Sample the current palette with the strip's blend mode
    pub fn sample(&self, index: u8, brightness: u8) -> Rgb {
        self.current_palette.sample(index, brightness, self.blend_mode)
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub fn set_hue(&mut self, hue: u8) {
        self.hue = hue;
    }

    /// Advance the running hue by one step
    pub fn advance_hue(&mut self) {
        self.hue = self.hue.wrapping_add(1);
    }

    /// Primary color
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}
