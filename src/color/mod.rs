mod gradient;
mod heat;
mod palette;
mod utils;

pub use gradient::{fill_gradient_rgb, fill_rainbow};
pub use heat::heat_color;
pub use palette::{BlendMode, PALETTE_SIZE, Palette16};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    add_saturating, blend_colors, fill_solid, hsv, hsv2rgb, max_channels, nblend, nscale8_video,
    rgb_from_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Named colors used by the effect catalog
pub mod named {
    use super::{Rgb, rgb_from_u32};

    pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
    pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
    pub const RED: Rgb = rgb_from_u32(0xFF_0000);
    pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
    pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
    pub const AQUA: Rgb = rgb_from_u32(0x00_FFFF);
    pub const PURPLE: Rgb = rgb_from_u32(0x80_0080);
    pub const ORANGE: Rgb = rgb_from_u32(0xFF_A500);
    pub const DARK_ORANGE: Rgb = rgb_from_u32(0xFF_8C00);
    pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
}
