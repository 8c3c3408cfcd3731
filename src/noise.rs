//! Smooth 2D value noise
//!
//! Coordinates are 8.8 fixed point: the high byte selects a lattice cell, the
//! low byte is the position inside it. Neighbouring inputs give neighbouring
//! outputs, so advancing a coordinate slowly produces organic motion.

use crate::math8::{blend8, ease_in_out_quad};

/// Deterministic lattice hash (no floats)
#[inline]
const fn hash(x: u32, y: u32) -> u8 {
    // SplitMix64-style mixing of the packed cell coordinates.
    let mut z = ((x as u64) << 32 | y as u64).wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        ((z ^ (z >> 31)) & 0xFF) as u8
    }
}

/// 2D noise at (`x`, `y`), returns 0-255
#[allow(clippy::cast_possible_truncation)]
pub fn inoise8(x: u16, y: u16) -> u8 {
    let cell_x = u32::from(x >> 8);
    let cell_y = u32::from(y >> 8);
    let fx = ease_in_out_quad((x & 0xFF) as u8);
    let fy = ease_in_out_quad((y & 0xFF) as u8);

    let next_x = (cell_x + 1) & 0xFF;
    let next_y = (cell_y + 1) & 0xFF;

    let top = blend8(hash(cell_x, cell_y), hash(next_x, cell_y), fx);
    let bottom = blend8(hash(cell_x, next_y), hash(next_x, next_y), fx);
    blend8(top, bottom, fy)
}
