//! # look-lut
//!
//! 3D lookup tables for looks: compilation of an
//! [`AdjustmentSet`](look_adjust::AdjustmentSet) into a 64³ grid, and the
//! `.cube` text format.
//!
//! # Usage
//!
//! ```rust
//! use look_adjust::{AdjustmentSet, ScalarKey};
//! use look_lut::{compile_lut, CompileOptions, CUBE_SIZE};
//!
//! let set = AdjustmentSet::new().with_scalar(ScalarKey::Exposure, 50.0);
//! let lut = compile_lut(&set, &CompileOptions::default()).unwrap();
//! assert_eq!(lut.size, CUBE_SIZE);
//!
//! // Interpolated lookup between grid points
//! let rgb = lut.apply([0.2, 0.3, 0.4]);
//! assert!(rgb[0] > 0.2);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - evaluate grid slices with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compile;
pub mod cube;
mod error;
mod lut3d;

pub use compile::{
    compile_cube_file, compile_cube_string, compile_cube_to, compile_lut, CompileOptions,
    CUBE_SIZE, DEFAULT_TITLE,
};
pub use cube::{read_3d as read_cube, write_3d as write_cube_file};
pub use error::{LutError, LutResult};
pub use lut3d::{grid_value, Lut3D};
