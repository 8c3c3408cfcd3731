//! 8- and 16-bit fixed-point helpers (ported from `FastLED` lib8tion)
//!
//! Everything here is integer-only so effects stay cheap on MCUs without an
//! FPU. Waveforms take a phase on a 0-255 (or 0-65535) circle.

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, guaranteeing that non-zero input never becomes zero
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = (value as u16 * scale as u16) >> 8;
    if value != 0 && scale != 0 {
        (scaled + 1) as u8
    } else {
        scaled as u8
    }
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Saturating add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating subtract
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Analog threshold: `value - cutoff` above the cutoff, zero below it
#[inline]
pub const fn qsuba(value: u8, cutoff: u8) -> u8 {
    if value > cutoff { value - cutoff } else { 0 }
}

/// Ease in out quadratic
pub fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Ease in out cubic (`3x^2 - 2x^3`)
#[allow(clippy::cast_possible_truncation)]
pub fn ease8_in_out_cubic(i: u8) -> u8 {
    let ii = u16::from(scale8(i, i));
    let iii = u16::from(scale8(ii as u8, i));
    let r1 = (3 * ii).saturating_sub(2 * iii);
    if r1 & 0x100 != 0 { 255 } else { r1 as u8 }
}

/// Triangle wave: 0 -> 254 -> 0 over one phase cycle
pub const fn triwave8(phase: u8) -> u8 {
    let folded = if phase & 0x80 != 0 { 255 - phase } else { phase };
    folded << 1
}

/// Triangle wave with cubic easing, spends more time at the extremes
pub fn cubicwave8(phase: u8) -> u8 {
    ease8_in_out_cubic(triwave8(phase))
}

const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

/// Fast 16-bit sine approximation, returns -32767..=32767
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn sin16(theta: u16) -> i16 {
    let mut offset = (theta & 0x3FFF) >> 3; // 0..2047
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = usize::from(offset / 256); // 0..7
    let base = SIN16_BASE[section];
    let slope = u16::from(SIN16_SLOPE[section]);
    let sec_offset = u16::from((offset as u8) / 2);

    let y = (slope * sec_offset + base) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Fast 16-bit cosine approximation
pub fn cos16(theta: u16) -> i16 {
    sin16(theta.wrapping_add(16384))
}

const SIN8_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Fast 8-bit sine approximation, returns 0..=255 centred on 128
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut sec_offset = offset & 0x0F;
    if theta & 0x40 != 0 {
        sec_offset += 1;
    }

    let section = usize::from(offset >> 4) * 2;
    let base = SIN8_INTERLEAVE[section];
    let m16 = SIN8_INTERLEAVE[section + 1];

    let mx = ((u16::from(m16) * u16::from(sec_offset)) >> 4) as u8;
    let mut y = mx.wrapping_add(base) as i8;
    if theta & 0x80 != 0 {
        y = y.wrapping_neg();
    }
    (y as u8).wrapping_add(128)
}

/// Fast 8-bit cosine approximation
pub fn cos8(theta: u8) -> u8 {
    sin8(theta.wrapping_add(64))
}

/// Sawtooth phase advancing at `bpm` beats per minute.
///
/// `bpm` is taken in 8.8 fixed point internally, so one full 0..65535 sweep
/// takes exactly one beat.
#[allow(clippy::cast_possible_truncation)]
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    let bpm88 = u64::from(bpm) << 8;
    ((now.as_millis().wrapping_mul(bpm88).wrapping_mul(280)) >> 16) as u16
}

/// 8-bit sawtooth at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave at `bpm` that oscillates between `low` and `high` (8-bit)
pub fn beatsin8(bpm: u16, low: u8, high: u8, now: Instant, phase_offset: u8) -> u8 {
    let wave = sin8(beat8(bpm, now).wrapping_add(phase_offset));
    let range = high.saturating_sub(low);
    low.saturating_add(scale8(wave, range))
}

/// Sine wave at `bpm` that oscillates between `low` and `high` (16-bit)
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: Instant, phase_offset: u16) -> u16 {
    let phase = beat16(bpm, now).wrapping_add(phase_offset);
    let wave = (i32::from(sin16(phase)) + 32768) as u16;
    let range = high.saturating_sub(low);
    low.saturating_add(scale16(wave, range))
}

/// Sine wave at `bpm` over a signed range, used for phase offsets
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin_signed(bpm: u16, low: i16, high: i16, now: Instant) -> i16 {
    if high <= low {
        return low;
    }
    let range = (i32::from(high) - i32::from(low)) as u16;
    let wave = (i32::from(sin16(beat16(bpm, now))) + 32768) as u16;
    (i32::from(low) + i32::from(scale16(wave, range))) as i16
}

/// Re-map a number from one range to another (Arduino `map`)
pub const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
