//! Index helpers
//!
//! Every index an effect derives from a beat, noise or accumulator value goes
//! through one of these before touching a buffer.

/// Clamp `index` into `0..len`.
///
/// Returns 0 for an empty buffer; callers never write into one.
#[inline]
pub const fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index >= len { len - 1 } else { index }
}

/// Wrap a signed `index` into `0..len`
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

/// Clamp an index the caller promised to be in range.
///
/// Debug builds fail fast on a broken promise, release builds clamp.
#[inline]
pub fn checked_index(index: usize, len: usize) -> usize {
    debug_assert!(index < len, "pixel index {index} out of range 0..{len}");
    clamp_index(index, len)
}

/// Truncate a floating point position to a pixel index in `0..len`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn position_index(position: f32, len: usize) -> usize {
    if position <= 0.0 {
        return 0;
    }
    clamp_index(position as usize, len)
}

/// Last valid index of a `len`-pixel buffer as `u16`, for beat ranges
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn last_index_u16(len: usize) -> u16 {
    len.saturating_sub(1).min(usize::from(u16::MAX)) as u16
}
