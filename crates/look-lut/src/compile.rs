//! Adjustment set to 64³ `.cube` LUT compilation.
//!
//! The grid is sampled at `i / 63` on every axis and each sample is pushed
//! through the resolved [`Pipeline`] (all active stages, then the final
//! clamp). Parallel and sequential evaluation produce identical bytes.
//!
//! # Example
//!
//! ```rust
//! use look_adjust::{AdjustmentSet, ScalarKey};
//! use look_lut::{compile_cube_string, CompileOptions};
//!
//! let set = AdjustmentSet::new()
//!     .with_scalar(ScalarKey::Saturation, 100.0)
//!     .with_scalar(ScalarKey::Brightness, 5.0);
//! let text = compile_cube_string(&set, &CompileOptions::titled("Look")).unwrap();
//! assert!(text.starts_with("TITLE \"Look\"\nLUT_3D_SIZE 64\n"));
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use look_adjust::AdjustmentSet;
use look_core::{is_finite_sample, ColorSample};
use look_ops::Pipeline;
use tracing::{debug, debug_span};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cube::{write_entries, write_header};
use crate::lut3d::grid_value;
use crate::{Lut3D, LutError, LutResult};

/// Points per axis of every compiled LUT.
pub const CUBE_SIZE: usize = 64;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Look";

/// Compilation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Text of the `TITLE` line.
    pub title: String,
    /// Evaluate grid slices on the rayon pool.
    ///
    /// Ignored when built without the `parallel` feature.
    pub parallel: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            parallel: true,
        }
    }
}

impl CompileOptions {
    /// Default options with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Compiles an adjustment set into an in-memory 64³ LUT.
pub fn compile_lut(set: &AdjustmentSet, options: &CompileOptions) -> LutResult<Lut3D> {
    let pipeline = Pipeline::from_adjustments(set);
    let _span = debug_span!("compile_lut", size = CUBE_SIZE, stages = pipeline.len()).entered();
    let start = Instant::now();

    let data = evaluate_grid(&pipeline, CUBE_SIZE, options.parallel);
    let lut = Lut3D::from_data(data, CUBE_SIZE)?.with_title(options.title.clone());
    lut.validate()?;

    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "grid evaluated");
    Ok(lut)
}

/// Compiles an adjustment set into `.cube` text.
pub fn compile_cube_string(set: &AdjustmentSet, options: &CompileOptions) -> LutResult<String> {
    let lut = compile_lut(set, options)?;
    crate::cube::to_string(&lut)
}

/// Compiles an adjustment set straight into `writer`, one blue slice at a time.
///
/// Only a single `64 x 64` slice is held in memory. Each slice is checked for
/// non-finite values before it is written.
pub fn compile_cube_to<W: Write>(
    writer: &mut W,
    set: &AdjustmentSet,
    options: &CompileOptions,
) -> LutResult<()> {
    let pipeline = Pipeline::from_adjustments(set);
    let _span = debug_span!("compile_cube", size = CUBE_SIZE, stages = pipeline.len()).entered();

    write_header(
        writer,
        Some(&options.title),
        CUBE_SIZE,
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
    )?;

    let plane = CUBE_SIZE * CUBE_SIZE;
    let mut slice = vec![[0.0; 3]; plane];
    for b in 0..CUBE_SIZE {
        fill_slice(&pipeline, CUBE_SIZE, b, &mut slice, options.parallel);
        if let Some(i) = slice.iter().position(|rgb| !is_finite_sample(*rgb)) {
            return Err(LutError::NonFinite {
                index: b * plane + i,
                value: slice[i],
            });
        }
        write_entries(writer, &slice)?;
    }
    Ok(())
}

/// Compiles an adjustment set into a `.cube` file.
pub fn compile_cube_file<P: AsRef<Path>>(
    path: P,
    set: &AdjustmentSet,
    options: &CompileOptions,
) -> LutResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    compile_cube_to(&mut writer, set, options)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote cube");
    Ok(())
}

/// Samples `pipeline` on a `size³` grid in file order.
fn evaluate_grid(pipeline: &Pipeline, size: usize, parallel: bool) -> Vec<ColorSample> {
    let plane = size * size;
    let mut data = vec![[0.0; 3]; plane * size];

    #[cfg(feature = "parallel")]
    {
        if parallel {
            data.par_chunks_mut(plane)
                .enumerate()
                .for_each(|(b, slice)| fill_plane(pipeline, size, b, slice));
            return data;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for (b, slice) in data.chunks_mut(plane).enumerate() {
        fill_plane(pipeline, size, b, slice);
    }
    data
}

/// Fills one blue slice, rows in parallel when enabled.
fn fill_slice(pipeline: &Pipeline, size: usize, b: usize, slice: &mut [ColorSample], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            let blue = grid_value(b, size);
            slice
                .par_chunks_mut(size)
                .enumerate()
                .for_each(|(g, row)| fill_row(pipeline, size, g, blue, row));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    fill_plane(pipeline, size, b, slice);
}

fn fill_plane(pipeline: &Pipeline, size: usize, b: usize, slice: &mut [ColorSample]) {
    let blue = grid_value(b, size);
    for (g, row) in slice.chunks_mut(size).enumerate() {
        fill_row(pipeline, size, g, blue, row);
    }
}

#[inline]
fn fill_row(pipeline: &Pipeline, size: usize, g: usize, blue: f64, row: &mut [ColorSample]) {
    let green = grid_value(g, size);
    for (r, out) in row.iter_mut().enumerate() {
        *out = pipeline.apply([grid_value(r, size), green, blue]);
    }
}
