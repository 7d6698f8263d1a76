//! Golden hash tests for compiled `.cube` text.
//!
//! The reference text is rendered here independently of `look-lut`, straight
//! from the file layout (header, blank line, red-fastest data lines), and
//! compared by SHA-256 against the compiler output.

use look_adjust::{AdjustmentSet, ScalarKey};
use look_lut::{compile_cube_string, compile_cube_to, CompileOptions};
use sha2::{Digest, Sha256};
use std::fmt::Write;

const SIZE: usize = 64;

/// Hex SHA-256 of a byte slice.
fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(64);
    for byte in digest.iter() {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Renders an identity cube by hand.
fn reference_identity(title: &str) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "TITLE \"{}\"", title);
    let _ = writeln!(text, "LUT_3D_SIZE {}", SIZE);
    text.push_str("DOMAIN_MIN 0.0 0.0 0.0\n");
    text.push_str("DOMAIN_MAX 1.0 1.0 1.0\n");
    text.push('\n');

    let n = (SIZE - 1) as f64;
    for b in 0..SIZE {
        for g in 0..SIZE {
            for r in 0..SIZE {
                let _ = writeln!(text, "{:.6} {:.6} {:.6}", r as f64 / n, g as f64 / n, b as f64 / n);
            }
        }
    }
    text
}

fn busy_set() -> AdjustmentSet {
    AdjustmentSet::new()
        .with_scalar(ScalarKey::Exposure, -15.0)
        .with_scalar(ScalarKey::Contrast, 40.0)
        .with_scalar(ScalarKey::Brightness, 3.0)
        .with_scalar(ScalarKey::Saturation, 20.0)
        .with_scalar(ScalarKey::Temperature, 25.0)
        .with_scalar(ScalarKey::Gamma, 1.2)
        .with_scalar(ScalarKey::Highlights, -30.0)
        .with_scalar(ScalarKey::Shadows, 20.0)
        .with_scalar(ScalarKey::Vibrance, 35.0)
        .with_scalar(ScalarKey::Hue, -10.0)
}

#[test]
fn golden_identity_cube() {
    let compiled = compile_cube_string(&AdjustmentSet::new(), &CompileOptions::titled("Identity")).unwrap();
    let reference = reference_identity("Identity");

    let hash = sha256_hex(compiled.as_bytes());
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, sha256_hex(reference.as_bytes()));
}

#[test]
fn golden_identity_spot_lines() {
    let reference = reference_identity("Identity");
    let lines: Vec<&str> = reference.lines().collect();
    assert_eq!(lines[5], "0.000000 0.000000 0.000000");
    assert_eq!(lines[6], "0.015873 0.000000 0.000000");
    assert_eq!(lines[5 + 64], "0.000000 0.015873 0.000000");
    assert_eq!(lines.last(), Some(&"1.000000 1.000000 1.000000"));
}

#[test]
fn golden_hash_independent_of_threading() {
    let set = busy_set();
    let opts = CompileOptions::titled("Busy");

    let parallel = compile_cube_string(&set, &opts).unwrap();
    let sequential = compile_cube_string(&set, &opts.clone().with_parallel(false)).unwrap();

    let mut streamed = Vec::new();
    compile_cube_to(&mut streamed, &set, &opts).unwrap();

    let expected = sha256_hex(parallel.as_bytes());
    assert_eq!(sha256_hex(sequential.as_bytes()), expected);
    assert_eq!(sha256_hex(&streamed), expected);
}

#[test]
fn golden_hash_sees_single_stage_change() {
    let opts = CompileOptions::titled("Busy");
    let base = compile_cube_string(&busy_set(), &opts).unwrap();
    let nudged = compile_cube_string(&busy_set().with_scalar(ScalarKey::Hue, -11.0), &opts).unwrap();
    assert_ne!(sha256_hex(base.as_bytes()), sha256_hex(nudged.as_bytes()));
}
