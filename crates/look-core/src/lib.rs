//! # look-core
//!
//! Core types shared by every crate in the look workspace.
//!
//! - [`ColorSample`] - an `[r, g, b]` triple flowing through the pipeline
//! - [`REC601_LUMA`] - luma weights used by saturation, vibrance and hue
//! - [`clamp01`] - the final-stage clamp
//!
//! ## Crate Structure
//!
//! ```text
//! look-core (this crate)
//!    ^
//!    |
//!    +-- look-adjust (adjustment model, importer)
//!    +-- look-ops (transform pipeline)
//!    +-- look-lut (LUT compiler, .cube I/O)
//!    +-- look-cli
//! ```
//!
//! Samples are carried in `f64` so six-decimal LUT text rounds the same on
//! every platform.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod sample;

pub use sample::{
    clamp01, clamp_sample, is_finite_sample, luma_rec601, max_channel, min_channel,
    ColorSample, REC601_LUMA, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R,
};
