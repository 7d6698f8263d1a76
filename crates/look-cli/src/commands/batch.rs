//! Batch compile command

use crate::BatchArgs;
use anyhow::{bail, Context, Result};
use look_lut::{compile_cube_file, CompileOptions};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, "batch::run");

    // Find matching files
    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch compile");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create: {}", args.output_dir.display()))?;

    // Each document gets its own grid; slices inside stay sequential
    let results: Vec<(PathBuf, Result<PathBuf>)> = files
        .par_iter()
        .map(|input| {
            let result = process_file(input, &args.output_dir, args.allow_unsupported);
            (input.clone(), result)
        })
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for (input, result) in results {
        match result {
            Ok(output) => {
                success += 1;
                if verbose > 0 {
                    println!("{} -> {}", input.display(), output.display());
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success = success, failed = failed, "Batch compile complete");
    println!("Compiled: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(input: &Path, output_dir: &Path, allow_unsupported: bool) -> Result<PathBuf> {
    let set = super::load_adjustments(input, allow_unsupported)?;
    let output = super::cube_path(input, Some(output_dir));
    let options = CompileOptions::titled(super::default_title(input)).with_parallel(false);

    debug!(input = %input.display(), output = %output.display(), "compiling");
    compile_cube_file(&output, &set, &options)
        .with_context(|| format!("Failed to write: {}", output.display()))?;
    Ok(output)
}
