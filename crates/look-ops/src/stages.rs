//! Per-stage color math.
//!
//! Every function takes a sample and a slider magnitude (usually in
//! `[-100, 100]`) and returns the adjusted sample. None of them clamp:
//! out-of-range values are passed on to the next stage untouched.

use std::f64::consts::FRAC_PI_3;

use look_core::{clamp01, luma_rec601, max_channel, min_channel, ColorSample};

/// Strength of the highlight/shadow offsets at full mask.
const TONE_STRENGTH: f64 = 0.3;

/// Red/blue shift per unit of temperature.
const TEMPERATURE_RB: f64 = 0.1;

/// Green shift per unit of warm temperature.
const TEMPERATURE_G: f64 = 0.05;

/// Exposure in hundredths of a stop.
///
/// ```text
/// out = in * 2^(m / 100)
/// ```
#[inline]
pub fn exposure(rgb: ColorSample, m: f64) -> ColorSample {
    let gain = 2.0_f64.powf(m / 100.0);
    [rgb[0] * gain, rgb[1] * gain, rgb[2] * gain]
}

/// Contrast around mid-gray.
///
/// ```text
/// factor = (m / 100) * 0.5 + 1
/// out    = (in - 0.5) * factor + 0.5
/// ```
#[inline]
pub fn contrast(rgb: ColorSample, m: f64) -> ColorSample {
    let factor = (m / 100.0) * 0.5 + 1.0;
    rgb.map(|c| (c - 0.5) * factor + 0.5)
}

/// Additive offset of `m / 100` on all channels.
#[inline]
pub fn brightness(rgb: ColorSample, m: f64) -> ColorSample {
    let offset = m / 100.0;
    rgb.map(|c| c + offset)
}

/// Scales each channel's distance from Rec.601 luma by `m / 100 + 1`.
///
/// Neutral grays (`r == g == b`) are unchanged.
#[inline]
pub fn saturation(rgb: ColorSample, m: f64) -> ColorSample {
    let luma = luma_rec601(rgb);
    let factor = m / 100.0 + 1.0;
    rgb.map(|c| luma + (c - luma) * factor)
}

/// Simplified warm/cool split tone.
///
/// Warm (`m > 0`) pushes red and, half as much, green. Cool (`m < 0`)
/// pushes blue.
#[inline]
pub fn temperature(rgb: ColorSample, m: f64) -> ColorSample {
    let amount = m.abs() / 100.0;
    let [r, g, b] = rgb;
    if m > 0.0 {
        [r + amount * TEMPERATURE_RB, g + amount * TEMPERATURE_G, b]
    } else if m < 0.0 {
        [r, g, b + amount * TEMPERATURE_RB]
    } else {
        rgb
    }
}

/// Power curve `out = in^(1 / gamma)`.
///
/// Negative inputs have no real power; they yield `NaN`, which the final
/// clamp turns into `0`.
#[inline]
pub fn gamma(rgb: ColorSample, gamma: f64) -> ColorSample {
    let exponent = 1.0 / gamma;
    rgb.map(|c| c.powf(exponent))
}

/// Highlight mask: `clamp01((max(r, g, b) - 0.5) * 2)`.
#[inline]
pub fn highlight_mask(rgb: ColorSample) -> f64 {
    clamp01((max_channel(rgb) - 0.5) * 2.0)
}

/// Shadow mask: `clamp01((0.5 - min(r, g, b)) * 2)`.
#[inline]
pub fn shadow_mask(rgb: ColorSample) -> f64 {
    clamp01((0.5 - min_channel(rgb)) * 2.0)
}

/// Adds `m / 100 * mask * 0.3` to all channels, masked to bright samples.
#[inline]
pub fn highlights(rgb: ColorSample, m: f64) -> ColorSample {
    let offset = m / 100.0 * highlight_mask(rgb) * TONE_STRENGTH;
    rgb.map(|c| c + offset)
}

/// Adds `m / 100 * mask * 0.3` to all channels, masked to dark samples.
#[inline]
pub fn shadows(rgb: ColorSample, m: f64) -> ColorSample {
    let offset = m / 100.0 * shadow_mask(rgb) * TONE_STRENGTH;
    rgb.map(|c| c + offset)
}

/// Selective saturation.
///
/// ```text
/// mask   = 1 - |max(r, g, b) - L|
/// factor = 1 + (m / 100) * mask
/// out    = L + (in - L) * factor
/// ```
///
/// Samples whose brightest channel sits close to luma (muted colors) get
/// the full effect.
#[inline]
pub fn vibrance(rgb: ColorSample, m: f64) -> ColorSample {
    let luma = luma_rec601(rgb);
    let mask = 1.0 - (max_channel(rgb) - luma).abs();
    let factor = 1.0 + (m / 100.0) * mask;
    rgb.map(|c| luma + (c - luma) * factor)
}

/// RGB to YIQ.
#[inline]
pub fn rgb_to_yiq(rgb: ColorSample) -> [f64; 3] {
    let [r, g, b] = rgb;
    [
        0.299 * r + 0.587 * g + 0.114 * b,
        0.596 * r - 0.275 * g - 0.321 * b,
        0.212 * r - 0.523 * g + 0.311 * b,
    ]
}

/// YIQ to RGB.
#[inline]
pub fn yiq_to_rgb(yiq: [f64; 3]) -> ColorSample {
    let [y, i, q] = yiq;
    [
        y + 0.956 * i + 0.621 * q,
        y - 0.272 * i - 0.647 * q,
        y - 1.106 * i + 1.703 * q,
    ]
}

/// Hue rotation angle in radians: `(m / 100) * (pi / 3)`.
#[inline]
pub fn hue_angle(m: f64) -> f64 {
    (m / 100.0) * FRAC_PI_3
}

/// Rotates the YIQ chroma plane by [`hue_angle`].
///
/// `m = 100` turns hue by 60 degrees; `m = ±300` by half a turn.
#[inline]
pub fn hue(rgb: ColorSample, m: f64) -> ColorSample {
    let [y, i, q] = rgb_to_yiq(rgb);
    let (sin, cos) = hue_angle(m).sin_cos();
    let i_rot = i * cos - q * sin;
    let q_rot = i * sin + q * cos;
    yiq_to_rgb([y, i_rot, q_rot])
}
