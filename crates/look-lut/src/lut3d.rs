//! 3-dimensional lookup table.

use look_core::{is_finite_sample, ColorSample};

use crate::{LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// # Structure
///
/// - `size^3` entries, each an output RGB sample
/// - Stored in `.cube` file order: R varies fastest, then G, then B
/// - Grid coordinate `i` on any axis maps to input `i / (size - 1)`
///
/// # Example
///
/// ```rust
/// use look_lut::Lut3D;
///
/// let lut = Lut3D::identity(17);
/// let out = lut.apply([0.5, 0.25, 0.75]);
/// assert!((out[1] - 0.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Entries, flattened as `(r0,g0,b0), (r1,g0,b0), ..., (rN,gN,bN)`.
    pub data: Vec<ColorSample>,
    /// Cube size per axis. Always at least 2.
    pub size: usize,
    /// Input domain minimum (per channel).
    pub domain_min: [f64; 3],
    /// Input domain maximum (per channel).
    pub domain_max: [f64; 3],
    /// Title written to / read from the `TITLE` line.
    pub title: Option<String>,
}

/// Normalized input value of grid index `index` on an axis of `size` points.
#[inline]
pub fn grid_value(index: usize, size: usize) -> f64 {
    index as f64 / (size - 1) as f64
}

impl Lut3D {
    /// Creates an identity (pass-through) 3D LUT.
    ///
    /// # Panics
    ///
    /// Panics if `size` is less than 2.
    pub fn identity(size: usize) -> Self {
        assert!(size >= 2, "LUT size must be at least 2, got {size}");
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([grid_value(r, size), grid_value(g, size), grid_value(b, size)]);
                }
            }
        }

        Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
            title: None,
        }
    }

    /// Creates a 3D LUT from entries in file order.
    pub fn from_data(data: Vec<ColorSample>, size: usize) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!("size must be at least 2, got {size}")));
        }
        let expected = size
            .checked_mul(size)
            .and_then(|v| v.checked_mul(size))
            .ok_or_else(|| LutError::InvalidSize(format!("size {size} overflows")))?;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
            title: None,
        })
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Flat index of grid position `(r, g, b)`.
    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b * self.size * self.size + g * self.size + r
    }

    /// Entry at grid position `(r, g, b)`.
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> ColorSample {
        self.data[self.index(r, g, b)]
    }

    /// Fails with [`LutError::NonFinite`] on the first `NaN`/infinite entry.
    pub fn validate(&self) -> LutResult<()> {
        match self.data.iter().position(|rgb| !is_finite_sample(*rgb)) {
            Some(index) => Err(LutError::NonFinite { index, value: self.data[index] }),
            None => Ok(()),
        }
    }

    /// Largest per-channel difference against another LUT of the same size.
    pub fn max_abs_diff(&self, other: &Self) -> LutResult<f64> {
        if self.size != other.size {
            return Err(LutError::InvalidSize(format!(
                "cannot compare size {} with size {}",
                self.size, other.size
            )));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .flat_map(|(a, b)| (0..3).map(move |c| (a[c] - b[c]).abs()))
            .fold(0.0, f64::max))
    }

    /// Looks up an RGB value with trilinear interpolation.
    pub fn apply(&self, rgb: ColorSample) -> ColorSample {
        let [r, g, b] = self.normalize(rgb);
        let n = (self.size - 1) as f64;

        // Grid coordinates, clamped so the upper corner stays in range
        let ri = ((r * n).floor() as usize).min(self.size - 2);
        let gi = ((g * n).floor() as usize).min(self.size - 2);
        let bi = ((b * n).floor() as usize).min(self.size - 2);

        let rf = r * n - ri as f64;
        let gf = g * n - gi as f64;
        let bf = b * n - bi as f64;

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            result[i] = c0 * (1.0 - bf) + c1 * bf;
        }
        result
    }

    /// Maps input RGB into `[0, 1]` according to the domain.
    fn normalize(&self, rgb: ColorSample) -> [f64; 3] {
        let mut out = [0.0; 3];
        for c in 0..3 {
            let span = self.domain_max[c] - self.domain_min[c];
            out[c] = ((rgb[c] - self.domain_min[c]) / span).clamp(0.0, 1.0);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_grid_values() {
        let lut = Lut3D::identity(64);
        assert_eq!(lut.entry_count(), 262_144);
        assert_eq!(lut.data.len(), 262_144);
        assert_eq!(lut.get(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.get(63, 63, 63), [1.0, 1.0, 1.0]);
        assert_eq!(lut.get(32, 32, 32), [32.0 / 63.0; 3]);
        // R varies fastest
        assert_eq!(lut.data[1], [1.0 / 63.0, 0.0, 0.0]);
        assert_eq!(lut.data[64], [0.0, 1.0 / 63.0, 0.0]);
        assert_eq!(lut.data[64 * 64], [0.0, 0.0, 1.0 / 63.0]);
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn identity_rejects_single_point() {
        let _ = Lut3D::identity(1);
    }

    #[test]
    fn identity_interpolates_exactly() {
        let lut = Lut3D::identity(17);
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert_abs_diff_eq!(out[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(out[1], 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(out[2], 0.8, epsilon = 1e-9);
    }

    #[test]
    fn apply_clamps_outside_domain() {
        let lut = Lut3D::identity(5);
        assert_eq!(lut.apply([-1.0, 2.0, 1.0]), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn from_data_checks_length() {
        let data = vec![[0.5, 0.5, 0.5]; 8];
        let lut = Lut3D::from_data(data, 2).unwrap();
        assert_eq!(lut.apply([0.5, 0.5, 0.5]), [0.5, 0.5, 0.5]);
        assert!(matches!(Lut3D::from_data(vec![[0.0; 3]; 7], 2), Err(LutError::InvalidSize(_))));
        assert!(matches!(Lut3D::from_data(vec![[0.0; 3]], 1), Err(LutError::InvalidSize(_))));
    }

    #[test]
    fn validate_finds_non_finite() {
        let mut lut = Lut3D::identity(3);
        assert!(lut.validate().is_ok());
        lut.data[5][1] = f64::NAN;
        match lut.validate() {
            Err(LutError::NonFinite { index, .. }) => assert_eq!(index, 5),
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn diff_between_luts() {
        let a = Lut3D::identity(4);
        let mut b = a.clone();
        b.data[10][2] += 0.125;
        assert_eq!(a.max_abs_diff(&b).unwrap(), 0.125);
        assert!(a.max_abs_diff(&Lut3D::identity(5)).is_err());
    }
}
