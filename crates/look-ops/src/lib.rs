//! # look-ops
//!
//! The color-adjustment transform: ten slider stages run in a fixed order,
//! followed by one final clamp to `[0, 1]`.
//!
//! # Modules
//!
//! - [`stages`] - the per-stage math (exposure, contrast, ..., hue)
//! - [`pipeline`] - [`Stage`], [`STAGE_ORDER`] and the resolved [`Pipeline`]
//!
//! # Example
//!
//! ```rust
//! use look_adjust::{AdjustmentSet, ScalarKey};
//! use look_ops::{transform, Pipeline};
//!
//! let set = AdjustmentSet::new()
//!     .with_scalar(ScalarKey::Saturation, 100.0)
//!     .with_scalar(ScalarKey::Brightness, 5.0);
//!
//! // One sample
//! let out = transform([0.4, 0.4, 0.4], &set);
//! assert!((out[0] - 0.45).abs() < 1e-12);
//!
//! // Many samples: resolve once
//! let pipeline = Pipeline::from_adjustments(&set);
//! let grid: Vec<_> = (0..4).map(|i| pipeline.apply([i as f64 / 3.0; 3])).collect();
//! assert_eq!(grid.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pipeline;
pub mod stages;

pub use pipeline::{transform, Pipeline, Stage, Step, STAGE_ORDER};
