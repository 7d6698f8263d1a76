//! Adobe/Resolve .cube 3D LUT text format.
//!
//! # Format
//!
//! ```text
//! TITLE "Look"
//! LUT_3D_SIZE 64
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//!
//! 0.000000 0.000000 0.000000
//! 0.015873 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Data lines run with red varying fastest, then green, then blue. Every
//! line, the last one included, ends with `\n`.
//!
//! # Example
//!
//! ```rust
//! use look_lut::{cube, Lut3D};
//!
//! let lut = Lut3D::identity(2).with_title("Identity");
//! let text = cube::to_string(&lut).unwrap();
//! assert!(text.starts_with("TITLE \"Identity\"\nLUT_3D_SIZE 2\n"));
//!
//! let back = cube::parse_3d(text.as_bytes()).unwrap();
//! assert_eq!(back.title.as_deref(), Some("Identity"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use look_core::ColorSample;

use crate::{Lut3D, LutError, LutResult};

/// Reads a 3D LUT from a .cube file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut domain_min = [0.0; 3];
    let mut domain_max = [1.0; 3];
    let mut data: Vec<ColorSample> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            domain_min = parse_domain(line)?;
        } else if line.starts_with("DOMAIN_MAX") {
            domain_max = parse_domain(line)?;
        } else {
            data.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    let expected = size
        .checked_mul(size)
        .and_then(|v| v.checked_mul(size))
        .ok_or_else(|| LutError::ParseError(format!("LUT_3D_SIZE {} is too large", size)))?;
    if data.len() != expected {
        return Err(LutError::ParseError(format!(
            "expected {} values, found {}",
            expected,
            data.len()
        )));
    }

    // File order and memory order are both red-fastest
    let mut lut = Lut3D::from_data(data, size)?.with_domain(domain_min, domain_max);
    lut.title = title;
    Ok(lut)
}

/// Writes a 3D LUT to a .cube file.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_cube(&mut writer, lut)?;
    writer.flush()?;
    Ok(())
}

/// Serializes a 3D LUT into a `String`.
pub fn to_string(lut: &Lut3D) -> LutResult<String> {
    let mut buf = Vec::with_capacity(lut.entry_count() * 27 + 128);
    write_cube(&mut buf, lut)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the header and all data lines of `lut` to `writer`.
///
/// The LUT is checked for non-finite entries before anything is written.
pub fn write_cube<W: Write>(writer: &mut W, lut: &Lut3D) -> LutResult<()> {
    lut.validate()?;
    write_header(
        writer,
        lut.title.as_deref(),
        lut.size,
        lut.domain_min,
        lut.domain_max,
    )?;
    write_entries(writer, &lut.data)
}

/// Writes the `TITLE`, `LUT_3D_SIZE` and `DOMAIN_*` lines plus the blank
/// separator line.
pub fn write_header<W: Write>(
    writer: &mut W,
    title: Option<&str>,
    size: usize,
    domain_min: [f64; 3],
    domain_max: [f64; 3],
) -> LutResult<()> {
    if let Some(title) = title {
        writeln!(writer, "TITLE \"{}\"", sanitize_title(title))?;
    }
    writeln!(writer, "LUT_3D_SIZE {}", size)?;
    let [r0, g0, b0] = domain_min;
    let [r1, g1, b1] = domain_max;
    writeln!(writer, "DOMAIN_MIN {:?} {:?} {:?}", r0, g0, b0)?;
    writeln!(writer, "DOMAIN_MAX {:?} {:?} {:?}", r1, g1, b1)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one `R G B` line per entry, six decimals each.
pub fn write_entries<W: Write>(writer: &mut W, entries: &[ColorSample]) -> LutResult<()> {
    for rgb in entries {
        writeln!(writer, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])?;
    }
    Ok(())
}

/// Makes a title safe for the quoted `TITLE` line.
///
/// Double quotes become single quotes; line breaks and other control
/// characters become spaces.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '"' => '\'',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}

fn parse_size(line: &str) -> LutResult<usize> {
    line.split_whitespace()
        .nth(1)
        .ok_or_else(|| LutError::ParseError("missing size value".into()))?
        .parse()
        .map_err(|_| LutError::ParseError(format!("invalid size in '{}'", line)))
}

fn parse_domain(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().skip(1).collect();
    if parts.len() < 3 {
        return Err(LutError::ParseError("domain needs 3 values".into()));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid domain value '{}'", part)))?;
    }
    Ok(out)
}

fn parse_rgb(line: &str) -> LutResult<ColorSample> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(LutError::ParseError(format!("invalid data line: {}", line)));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid value '{}'", part)))?;
    }
    Ok(out)
}
