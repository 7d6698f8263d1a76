//! Single-document compile command

use crate::CompileArgs;
use anyhow::{Context, Result};
use look_adjust::AdjustmentSet;
use look_lut::{compile_cube_file, compile_cube_to, CompileOptions};
use std::io::Write;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: CompileArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "compile::run");

    let set = super::load_adjustments(&args.input, args.allow_unsupported)?;
    let title = args.title.unwrap_or_else(|| super::default_title(&args.input));
    let options = CompileOptions::titled(title).with_parallel(!args.sequential);

    debug!(adjustments = set.len(), title = %options.title, "compiling");

    let output = args.output.unwrap_or_else(|| super::cube_path(&args.input, None));
    if output == Path::new("-") {
        let stdout = std::io::stdout();
        return stream(&mut stdout.lock(), &set, &options);
    }

    compile_cube_file(&output, &set, &options)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    info!(output = %output.display(), "compiled");
    if verbose > 0 {
        println!("{} -> {}", args.input.display(), output.display());
    }
    Ok(())
}

/// Streams the cube text to `writer` (stdout for `-o -`).
fn stream<W: Write>(writer: &mut W, set: &AdjustmentSet, options: &CompileOptions) -> Result<()> {
    compile_cube_to(writer, set, options).context("Failed to stream LUT")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(input: PathBuf) -> CompileArgs {
        CompileArgs {
            input,
            output: None,
            title: None,
            allow_unsupported: false,
            sequential: false,
        }
    }

    #[test]
    fn writes_cube_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("warm.json");
        std::fs::write(&input, r#"{"temperature": [40], "saturation": "10"}"#).unwrap();

        run(args(input), 0).unwrap();

        let text = std::fs::read_to_string(dir.path().join("warm.cube")).unwrap();
        assert_eq!(text.lines().count(), 262_149);
        assert!(text.starts_with("TITLE \"warm\"\nLUT_3D_SIZE 64\n"));
    }

    #[test]
    fn explicit_output_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("look.yaml");
        std::fs::write(&input, "contrast: [20]\n").unwrap();
        let output = dir.path().join("out").with_extension("cube");

        let mut a = args(input);
        a.output = Some(output.clone());
        a.title = Some("Punchy".into());
        a.sequential = true;
        run(a, 0).unwrap();

        let lut = look_lut::read_cube(&output).unwrap();
        assert_eq!(lut.title.as_deref(), Some("Punchy"));
        assert_eq!(lut.size, 64);
    }

    #[test]
    fn unsupported_fields_block_compile() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("noisy.json");
        std::fs::write(&input, r#"{"exposure": [10], "sparkle": 1}"#).unwrap();

        assert!(run(args(input.clone()), 0).is_err());
        assert!(!dir.path().join("noisy.cube").exists());

        let mut a = args(input);
        a.allow_unsupported = true;
        run(a, 0).unwrap();
        assert!(dir.path().join("noisy.cube").exists());
    }

    #[test]
    fn stream_matches_file_output() {
        let set = AdjustmentSet::new().with_scalar(look_adjust::ScalarKey::Hue, 30.0);
        let options = CompileOptions::titled("Stream");

        let mut buf = Vec::new();
        stream(&mut buf, &set, &options).unwrap();
        let streamed = String::from_utf8(buf).unwrap();

        assert_eq!(streamed.lines().count(), 262_149);
        assert_eq!(streamed, look_lut::compile_cube_string(&set, &options).unwrap());
    }
}
