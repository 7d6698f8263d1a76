//! Adjustment document validation command

use crate::ValidateArgs;
use anyhow::{bail, Result};
use look_adjust::ImportReport;
use serde_json::{json, Value};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ValidateArgs, verbose: u8) -> Result<()> {
    let mut invalid = 0;
    let mut entries = Vec::new();

    for path in &args.input {
        trace!(path = %path.display(), "validate");
        let report = match super::load_report(path) {
            Ok(report) => report,
            Err(e) => {
                invalid += 1;
                if args.json {
                    entries.push(json!({
                        "path": path.display().to_string(),
                        "error": format!("{:#}", e),
                    }));
                } else {
                    println!("{}: error: {:#}", path.display(), e);
                }
                continue;
            }
        };

        if !report.is_valid() {
            invalid += 1;
        }

        if args.json {
            entries.push(report_entry(path, &report));
            continue;
        }

        if report.is_valid() {
            println!("{}: ok ({} adjustments)", path.display(), report.adjustments.len());
        } else {
            println!(
                "{}: unsupported fields: {}",
                path.display(),
                report.unsupported_fields.join(", ")
            );
        }
        if !report.skipped_fields.is_empty() {
            println!("  skipped: {}", report.skipped_fields.join(", "));
        }
        if verbose > 0 {
            for (key, value) in report.adjustments.iter() {
                println!("  {} = {}", key, serde_json::to_string(&value)?);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    if invalid > 0 {
        bail!("{} of {} documents invalid", invalid, args.input.len());
    }
    Ok(())
}

/// JSON summary of one imported document.
fn report_entry(path: &Path, report: &ImportReport) -> Value {
    json!({
        "path": path.display().to_string(),
        "valid": report.is_valid(),
        "unsupported_fields": report.unsupported_fields,
        "skipped_fields": report.skipped_fields,
        "adjustments": report.adjustments,
    })
}
