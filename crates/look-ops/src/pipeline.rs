//! The ordered transform pipeline.
//!
//! Stages run in the fixed order of [`STAGE_ORDER`]. The math is not
//! commutative, so moving a stage changes every compiled LUT; the order is
//! kept as a single constant so that any reordering shows up in review.
//!
//! Intermediate values are never clamped. The only clamp is the final one in
//! [`Pipeline::apply`].
//!
//! # Example
//!
//! ```rust
//! use look_adjust::{AdjustmentSet, ScalarKey};
//! use look_ops::Pipeline;
//!
//! let set = AdjustmentSet::new().with_scalar(ScalarKey::Exposure, 100.0);
//! let pipeline = Pipeline::from_adjustments(&set);
//! assert_eq!(pipeline.apply([0.25, 0.25, 0.25]), [0.5, 0.5, 0.5]);
//! assert_eq!(pipeline.apply([0.75, 0.75, 0.75]), [1.0, 1.0, 1.0]);
//! ```

use std::fmt;

use look_adjust::{AdjustmentSet, ScalarKey};
use look_core::{clamp_sample, ColorSample};
use tracing::trace;

use crate::stages;

/// One independently gated step of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Multiplicative exposure in hundredths of a stop.
    Exposure,
    /// Contrast around 0.5.
    Contrast,
    /// Additive brightness.
    Brightness,
    /// Luma-relative saturation.
    Saturation,
    /// Warm/cool split tone.
    Temperature,
    /// Power curve.
    Gamma,
    /// Highlight offset.
    Highlights,
    /// Shadow offset.
    Shadows,
    /// Selective saturation.
    Vibrance,
    /// YIQ hue rotation.
    Hue,
}

/// Execution order of the pipeline stages.
pub const STAGE_ORDER: [Stage; 10] = [
    Stage::Exposure,
    Stage::Contrast,
    Stage::Brightness,
    Stage::Saturation,
    Stage::Temperature,
    Stage::Gamma,
    Stage::Highlights,
    Stage::Shadows,
    Stage::Vibrance,
    Stage::Hue,
];

impl Stage {
    /// Adjustment key that drives this stage.
    pub const fn key(self) -> ScalarKey {
        match self {
            Self::Exposure => ScalarKey::Exposure,
            Self::Contrast => ScalarKey::Contrast,
            Self::Brightness => ScalarKey::Brightness,
            Self::Saturation => ScalarKey::Saturation,
            Self::Temperature => ScalarKey::Temperature,
            Self::Gamma => ScalarKey::Gamma,
            Self::Highlights => ScalarKey::Highlights,
            Self::Shadows => ScalarKey::Shadows,
            Self::Vibrance => ScalarKey::Vibrance,
            Self::Hue => ScalarKey::Hue,
        }
    }

    /// Stage driven by a key, if the key participates in the transform.
    pub fn for_key(key: ScalarKey) -> Option<Self> {
        STAGE_ORDER.into_iter().find(|s| s.key() == key)
    }

    /// Value at which the stage is a no-op.
    pub const fn identity_value(self) -> f64 {
        match self {
            Self::Gamma => 1.0,
            _ => 0.0,
        }
    }

    /// Whether a magnitude switches this stage on.
    ///
    /// Non-finite magnitudes are treated as `0`. Gamma is off at its
    /// identity `1.0` and also at `0`, where `1 / gamma` is undefined.
    pub fn is_active(self, magnitude: f64) -> bool {
        magnitude.is_finite() && magnitude != 0.0 && magnitude != self.identity_value()
    }

    /// Applies this stage without any gating or clamping.
    #[inline]
    pub fn apply(self, rgb: ColorSample, magnitude: f64) -> ColorSample {
        match self {
            Self::Exposure => stages::exposure(rgb, magnitude),
            Self::Contrast => stages::contrast(rgb, magnitude),
            Self::Brightness => stages::brightness(rgb, magnitude),
            Self::Saturation => stages::saturation(rgb, magnitude),
            Self::Temperature => stages::temperature(rgb, magnitude),
            Self::Gamma => stages::gamma(rgb, magnitude),
            Self::Highlights => stages::highlights(rgb, magnitude),
            Self::Shadows => stages::shadows(rgb, magnitude),
            Self::Vibrance => stages::vibrance(rgb, magnitude),
            Self::Hue => stages::hue(rgb, magnitude),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().name())
    }
}

/// A stage bound to its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Stage to run.
    pub stage: Stage,
    /// Slider magnitude.
    pub magnitude: f64,
}

/// A resolved list of active stages.
///
/// Built once per adjustment set and then evaluated for every grid point, so
/// the per-sample path does no key lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Pipeline with no stages (only the final clamp).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Resolves the active stages of an adjustment set in [`STAGE_ORDER`].
    pub fn from_adjustments(set: &AdjustmentSet) -> Self {
        let pipeline = STAGE_ORDER
            .into_iter()
            .filter_map(|stage| set.scalar(stage.key()).map(|m| (stage, m)))
            .fold(Self::identity(), |p, (stage, m)| p.push(stage, m));
        trace!(stages = ?pipeline.stages().collect::<Vec<_>>(), "resolved pipeline");
        pipeline
    }

    /// Builds a pipeline from an explicit stage order.
    ///
    /// Used to evaluate alternative orderings; production code goes through
    /// [`from_adjustments`](Self::from_adjustments).
    pub fn from_steps(steps: impl IntoIterator<Item = (Stage, f64)>) -> Self {
        steps
            .into_iter()
            .fold(Self::identity(), |p, (stage, m)| p.push(stage, m))
    }

    /// Appends a stage. Inactive magnitudes are dropped.
    pub fn push(mut self, stage: Stage, magnitude: f64) -> Self {
        if stage.is_active(magnitude) {
            self.steps.push(Step { stage, magnitude });
        }
        self
    }

    /// Active steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Active stages in execution order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.steps.iter().map(|s| s.stage)
    }

    /// Number of active stages.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no stage is active.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every active stage without the final clamp.
    #[inline]
    pub fn apply_unclamped(&self, rgb: ColorSample) -> ColorSample {
        self.steps
            .iter()
            .fold(rgb, |acc, step| step.stage.apply(acc, step.magnitude))
    }

    /// Runs every active stage, then clamps each channel to `[0, 1]`.
    #[inline]
    pub fn apply(&self, rgb: ColorSample) -> ColorSample {
        clamp_sample(self.apply_unclamped(rgb))
    }

    /// Unclamped sample after each active stage, for inspection.
    pub fn trace(&self, rgb: ColorSample) -> Vec<(Stage, ColorSample)> {
        let mut acc = rgb;
        self.steps
            .iter()
            .map(|step| {
                acc = step.stage.apply(acc, step.magnitude);
                (step.stage, acc)
            })
            .collect()
    }
}

/// One-shot transform of a single sample.
///
/// Prefer building a [`Pipeline`] once when transforming many samples.
pub fn transform(rgb: ColorSample, set: &AdjustmentSet) -> ColorSample {
    Pipeline::from_adjustments(set).apply(rgb)
}
