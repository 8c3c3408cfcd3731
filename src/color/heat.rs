use crate::{color::Rgb, math8::scale8_video};

/// Map a heat value to a black -> red -> yellow -> white ramp
///
/// The 0-255 input is rescaled to 0-191 and split into three 64-step
/// bands, one per ramp segment.
pub fn heat_color(temperature: u8) -> Rgb {
    let t192 = scale8_video(temperature, 191);

    // 0..63 ramp inside the current band, scaled up to 0..252
    let heat_ramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        Rgb {
            r: 255,
            g: 255,
            b: heat_ramp,
        }
    } else if t192 & 0x40 != 0 {
        Rgb {
            r: 255,
            g: heat_ramp,
            b: 0,
        }
    } else {
        Rgb {
            r: heat_ramp,
            g: 0,
            b: 0,
        }
    }
}
