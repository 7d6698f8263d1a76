//! Color samples and per-channel helpers.

/// An `[r, g, b]` color sample.
///
/// Values are nominally in `[0, 1]` at pipeline entry. Intermediate stages
/// may push channels outside that range; only [`clamp_sample`] at pipeline
/// exit brings them back.
pub type ColorSample = [f64; 3];

/// Rec.601 luma coefficient for the red channel.
pub const REC601_LUMA_R: f64 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const REC601_LUMA_G: f64 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const REC601_LUMA_B: f64 = 0.114;

/// Rec.601 luma coefficients as an array [R, G, B].
pub const REC601_LUMA: [f64; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Rec.601 luma: `L = 0.299*R + 0.587*G + 0.114*B`.
///
/// # Example
/// ```
/// use look_core::luma_rec601;
/// let l = luma_rec601([1.0, 1.0, 1.0]);
/// assert!((l - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn luma_rec601(rgb: ColorSample) -> f64 {
    rgb[0] * REC601_LUMA_R + rgb[1] * REC601_LUMA_G + rgb[2] * REC601_LUMA_B
}

/// Largest of the three channels.
#[inline]
pub fn max_channel(rgb: ColorSample) -> f64 {
    rgb[0].max(rgb[1]).max(rgb[2])
}

/// Smallest of the three channels.
#[inline]
pub fn min_channel(rgb: ColorSample) -> f64 {
    rgb[0].min(rgb[1]).min(rgb[2])
}

/// Clamps a value to `[0, 1]`.
///
/// `NaN` and negative zero both map to `0.0`, so a clamped value never
/// formats as `NaN` or `-0.000000`.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v > 1.0 {
        1.0
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Clamps every channel of a sample with [`clamp01`].
#[inline]
pub fn clamp_sample(rgb: ColorSample) -> ColorSample {
    [clamp01(rgb[0]), clamp01(rgb[1]), clamp01(rgb[2])]
}

/// True if no channel is `NaN` or infinite.
#[inline]
pub fn is_finite_sample(rgb: ColorSample) -> bool {
    rgb.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn luma_weights_sum_to_one() {
        assert_relative_eq!(REC601_LUMA.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(luma_rec601([0.5, 0.5, 0.5]), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn clamp_edges() {
        assert_eq!(clamp01(-0.25), 0.0);
        assert_eq!(clamp01(1.75), 1.0);
        assert_eq!(clamp01(0.4), 0.4);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn clamp_drops_negative_zero() {
        let v = clamp01(-0.0);
        assert!(v.is_sign_positive());
        assert_eq!(format!("{:.6}", v), "0.000000");
    }

    #[test]
    fn channel_extremes() {
        let rgb = [0.2, 0.9, -0.1];
        assert_eq!(max_channel(rgb), 0.9);
        assert_eq!(min_channel(rgb), -0.1);
        assert_eq!(clamp_sample(rgb), [0.2, 0.9, 0.0]);
        assert!(is_finite_sample(rgb));
        assert!(!is_finite_sample([0.0, f64::NAN, 0.0]));
    }
}
