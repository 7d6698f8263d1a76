//! # look-adjust
//!
//! The color-adjustment model and the importer that normalizes external
//! documents into it.
//!
//! # Model
//!
//! An [`AdjustmentSet`] maps recognized names to values. Names fall into
//! three categories, each with a fixed shape:
//!
//! - [`ScalarKey`] - one magnitude, externally `[m]`
//! - [`ChannelKey`] - a [`ChannelTriple`] (`red`/`green`/`blue`)
//! - [`WheelKey`] - a [`ColorWheel`] (`h`/`s`/`l`)
//!
//! The category is resolved once, at import time; downstream code never
//! re-checks shapes.
//!
//! # Import
//!
//! ```rust
//! use look_adjust::{import_json, ScalarKey};
//!
//! let report = import_json(r#"{"exposure": "25", "contrast": [10], "glow": 3}"#).unwrap();
//! assert_eq!(report.adjustments.scalar(ScalarKey::Exposure), Some(25.0));
//! assert_eq!(report.adjustments.scalar(ScalarKey::Contrast), Some(10.0));
//! assert_eq!(report.unsupported_fields, ["glow"]);
//! ```
//!
//! # Dependencies
//!
//! - [`serde`] / [`serde_json`] / [`serde_yaml`] - document formats
//! - [`thiserror`] - error handling
//! - [`tracing`] - import diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod import;
pub mod key;
mod set;
mod value;

pub use error::{AdjustError, AdjustResult};
pub use import::{import_adjustments, import_json, import_value, import_yaml, ImportReport};
pub use key::{AdjustmentKey, AdjustmentKind, ChannelKey, ScalarKey, UnknownKey, WheelKey};
pub use set::AdjustmentSet;
pub use value::{AdjustmentValue, ChannelTriple, ColorWheel};
