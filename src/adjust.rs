//! Point operations: brightness and contrast.
//!
//! Both build a 256-entry lookup table once and run every channel of every
//! pixel through it in place. Channels are independent of each other.

use crate::error::BitmapError;
use crate::image::Image;

/// Contrast delta at which the factor's denominator vanishes.
const CONTRAST_POLE: f64 = 259.0;

/// Add `delta` to every channel, clamping to `0..=255`.
///
/// Any `delta` is accepted; values outside `-255..=255` simply saturate.
pub fn adjust_brightness(image: &mut Image, delta: i32) {
    let lut: [u8; 256] = core::array::from_fn(|v| clamp_channel((v as i32).saturating_add(delta)));
    apply_lut(image, &lut);
}

/// Scale every channel's distance from mid-gray by the factor
/// `259 * (delta + 255) / (255 * (259 - delta))`.
///
/// Results are rounded to nearest (halves up), then clamped. `delta == 259`
/// (infinite factor) and non-finite deltas are rejected with
/// [`BitmapError::InvalidParameter`] and leave the image untouched.
pub fn adjust_contrast(image: &mut Image, delta: f64) -> Result<(), BitmapError> {
    let k = contrast_factor(delta)?;
    let lut: [u8; 256] = core::array::from_fn(|v| {
        let scaled = k * (v as f64 - 128.0) + 128.0;
        // `as` saturates; everything below 0.5 ends up 0 after clamping.
        clamp_channel((scaled + 0.5) as i32)
    });
    apply_lut(image, &lut);
    Ok(())
}

pub(crate) fn contrast_factor(delta: f64) -> Result<f64, BitmapError> {
    if !delta.is_finite() {
        return Err(BitmapError::InvalidParameter(alloc::format!(
            "contrast delta must be finite, got {delta}"
        )));
    }
    if delta == CONTRAST_POLE {
        return Err(BitmapError::InvalidParameter(
            "contrast delta 259 gives an infinite contrast factor".into(),
        ));
    }
    Ok(CONTRAST_POLE * (delta + 255.0) / (255.0 * (CONTRAST_POLE - delta)))
}

fn apply_lut(image: &mut Image, lut: &[u8; 256]) {
    for px in image.pixels_mut() {
        px.r = lut[px.r as usize];
        px.g = lut[px.g as usize];
        px.b = lut[px.b as usize];
    }
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
