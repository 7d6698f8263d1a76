//! Single-color inspection command

use crate::SampleArgs;
use anyhow::{bail, Result};
use look_core::ColorSample;
use look_lut::{compile_lut, CompileOptions};
use look_ops::Pipeline;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: SampleArgs, verbose: u8) -> Result<()> {
    let rgb: ColorSample = match args.rgb.as_slice() {
        &[r, g, b] => [r, g, b],
        other => bail!("Expected 3 color values, got {}", other.len()),
    };

    let set = super::load_adjustments(&args.input, true)?;
    let pipeline = Pipeline::from_adjustments(&set);

    if verbose > 0 || args.trace {
        let stages: Vec<String> = pipeline.stages().map(|s| s.to_string()).collect();
        println!("active stages: {}", if stages.is_empty() { "none".into() } else { stages.join(" -> ") });
    }

    println!("input   {}", format_rgb(rgb));
    if args.trace {
        for (stage, value) in pipeline.trace(rgb) {
            println!("  {:<11} {}", stage.to_string(), format_rgb(value));
        }
    }

    let direct = pipeline.apply(rgb);
    let lut = compile_lut(&set, &CompileOptions::default())?;
    let sampled = lut.apply(rgb);
    let error = (0..3).map(|c| (direct[c] - sampled[c]).abs()).fold(0.0, f64::max);

    println!("direct  {}", format_rgb(direct));
    println!("lut     {}", format_rgb(sampled));
    println!("max err {:.6}", error);
    Ok(())
}

fn format_rgb(rgb: ColorSample) -> String {
    format!("{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_color_through_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("look.json");
        std::fs::write(&input, r#"{"vibrance": [30], "sparkle": 1}"#).unwrap();

        let args = SampleArgs { input, rgb: vec![0.5, 0.4, 0.3], trace: true };
        run(args, 0).unwrap();
    }

    #[test]
    fn needs_three_values() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("look.json");
        std::fs::write(&input, r#"{"vibrance": [30]}"#).unwrap();

        let args = SampleArgs { input, rgb: vec![0.5, 0.4], trace: false };
        let err = run(args, 0).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }
}
