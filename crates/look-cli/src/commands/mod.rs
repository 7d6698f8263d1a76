//! CLI command implementations

pub mod batch;
pub mod compile;
pub mod sample;
pub mod stages;
pub mod validate;

use anyhow::{bail, Context, Result};
use look_adjust::{import_json, import_yaml, AdjustmentSet, ImportReport};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Document formats accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => bail!("Unsupported document format: .{} ({})", ext, path.display()),
        }
    }
}

/// Reads and imports an adjustment document.
pub fn load_report(path: &Path) -> Result<ImportReport> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    let report = match format {
        DocumentFormat::Json => import_json(&text),
        DocumentFormat::Yaml => import_yaml(&text),
    };
    report.with_context(|| format!("Failed to import: {}", path.display()))
}

/// Reads a document and turns it into an adjustment set.
///
/// Unsupported fields fail the load unless `allow_unsupported` is set, in
/// which case they are logged and ignored. Skipped fields are always logged.
pub fn load_adjustments(path: &Path, allow_unsupported: bool) -> Result<AdjustmentSet> {
    let report = load_report(path)?;

    for field in &report.skipped_fields {
        warn!(path = %path.display(), field = %field, "ignoring adjustment with unusable value");
    }

    if !report.is_valid() {
        if !allow_unsupported {
            bail!(
                "{} has unsupported fields: {}",
                path.display(),
                report.unsupported_fields.join(", ")
            );
        }
        for field in &report.unsupported_fields {
            warn!(path = %path.display(), field = %field, "ignoring unsupported field");
        }
    }

    Ok(report.adjustments)
}

/// Default LUT title: the input file stem.
pub fn default_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| look_lut::DEFAULT_TITLE.to_string())
}

/// `<dir>/<stem>.cube` for an input document.
pub fn cube_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let name = Path::new(input.file_name().unwrap_or(input.as_os_str())).with_extension("cube");
    match dir {
        Some(dir) => dir.join(name),
        None => input.with_extension("cube"),
    }
}
