//! Random helpers over an injected [`RngCore`]
//!
//! Ranges are half-open and scaled rather than rejected, so an empty range
//! returns its lower bound instead of panicking.

use rand::RngCore;

/// Random byte
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8<R: RngCore + ?Sized>(rng: &mut R) -> u8 {
    (rng.next_u32() >> 24) as u8
}

/// Random value in `0..limit`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random8_lim<R: RngCore + ?Sized>(rng: &mut R, limit: u8) -> u8 {
    ((u16::from(random8(rng)) * u16::from(limit)) >> 8) as u8
}

/// Random value in `min..max`
#[inline]
pub fn random8_range<R: RngCore + ?Sized>(rng: &mut R, min: u8, max: u8) -> u8 {
    if max <= min {
        return min;
    }
    min + random8_lim(rng, max - min)
}

/// Random 16-bit value
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random16<R: RngCore + ?Sized>(rng: &mut R) -> u16 {
    (rng.next_u32() >> 16) as u16
}

/// Random value in `0..limit`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random16_lim<R: RngCore + ?Sized>(rng: &mut R, limit: u16) -> u16 {
    ((u32::from(random16(rng)) * u32::from(limit)) >> 16) as u16
}

/// Random value in `min..max`
#[inline]
pub fn random16_range<R: RngCore + ?Sized>(rng: &mut R, min: u16, max: u16) -> u16 {
    if max <= min {
        return min;
    }
    min + random16_lim(rng, max - min)
}

/// Random pixel index in `0..len`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn random_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((u64::from(rng.next_u32()) * len as u64) >> 32) as usize
}

/// Random chance out of 255: true with probability `chance / 256`
#[inline]
pub fn chance8<R: RngCore + ?Sized>(rng: &mut R, chance: u8) -> bool {
    random8(rng) < chance
}
