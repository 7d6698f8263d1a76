//! Lenient import of external adjustment documents.
//!
//! Imported style files come from older app versions, other tools and the
//! prompt-driven suggester, so the importer never fails a whole document
//! over one bad field. The policy is skip-and-report:
//!
//! - unrecognized keys are dropped and listed in
//!   [`ImportReport::unsupported_fields`] (this is what makes a document
//!   "invalid")
//! - recognized keys whose value cannot be coerced are dropped and listed in
//!   [`ImportReport::skipped_fields`]
//!
//! Coercion rules per category:
//!
//! | Category | Accepted | Field fallback |
//! |---|---|---|
//! | scalar | `42`, `"42"`, `[42]` | - |
//! | channel triple | object with `red`/`green`/`blue` | `0` |
//! | color wheel | object with `h`/`s`/`l` | `0` |

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AdjustError, AdjustResult};
use crate::key::AdjustmentKey;
use crate::set::AdjustmentSet;
use crate::value::{ChannelTriple, ColorWheel};

/// Outcome of importing an external adjustment document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Successfully coerced adjustments.
    pub adjustments: AdjustmentSet,
    /// Unrecognized keys, verbatim, in document order.
    pub unsupported_fields: Vec<String>,
    /// Recognized keys whose value had an uncoercible shape.
    pub skipped_fields: Vec<String>,
}

impl ImportReport {
    /// True if every key in the document was recognized.
    pub fn is_valid(&self) -> bool {
        self.unsupported_fields.is_empty()
    }
}

/// Imports a key/value record.
///
/// Pure and deterministic: the same record always yields the same report.
///
/// # Example
///
/// ```rust
/// use look_adjust::{import_adjustments, ScalarKey};
/// use serde_json::json;
///
/// let doc = json!({"exposure": 42, "sparkle": 1});
/// let report = import_adjustments(doc.as_object().unwrap());
/// assert_eq!(report.adjustments.scalar(ScalarKey::Exposure), Some(42.0));
/// assert_eq!(report.unsupported_fields, ["sparkle"]);
/// assert!(!report.is_valid());
/// ```
pub fn import_adjustments(record: &Map<String, Value>) -> ImportReport {
    let mut report = ImportReport::default();

    for (name, value) in record {
        let Some(key) = AdjustmentKey::from_name(name) else {
            debug!(field = %name, "unsupported adjustment field");
            report.unsupported_fields.push(name.clone());
            continue;
        };

        let accepted = match key {
            AdjustmentKey::Scalar(k) => coerce_scalar(value).map(|m| {
                report.adjustments.set_scalar(k, m);
            }),
            AdjustmentKey::Channels(k) => coerce_channels(value).map(|c| {
                report.adjustments.set_channels(k, c);
            }),
            AdjustmentKey::Wheel(k) => coerce_wheel(value).map(|w| {
                report.adjustments.set_wheel(k, w);
            }),
        };

        if accepted.is_none() {
            debug!(field = %name, kind = %key.kind(), "skipping uncoercible adjustment value");
            report.skipped_fields.push(name.clone());
        }
    }

    report
}

/// Imports any JSON value, rejecting documents whose root is not an object.
pub fn import_value(value: &Value) -> AdjustResult<ImportReport> {
    match value {
        Value::Object(map) => Ok(import_adjustments(map)),
        other => Err(AdjustError::NotAnObject(json_type_name(other))),
    }
}

/// Parses and imports a JSON document.
pub fn import_json(text: &str) -> AdjustResult<ImportReport> {
    let value: Value = serde_json::from_str(text)?;
    import_value(&value)
}

/// Parses and imports a YAML document.
pub fn import_yaml(text: &str) -> AdjustResult<ImportReport> {
    let value: Value = serde_yaml::from_str(text)?;
    import_value(&value)
}

/// Number or numeric string. Non-finite results are rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// One-element numeric sequence.
fn single_element(value: &Value) -> Option<f64> {
    match value.as_array()?.as_slice() {
        [Value::Number(n)] => n.as_f64().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn coerce_scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Array(_) => single_element(value),
        _ => coerce_number(value),
    }
}

fn channel_field(record: &Map<String, Value>, field: &str) -> f64 {
    record
        .get(field)
        .and_then(|v| single_element(v).or_else(|| coerce_number(v)))
        .unwrap_or(0.0)
}

fn coerce_channels(value: &Value) -> Option<ChannelTriple> {
    let record = value.as_object()?;
    Some(ChannelTriple {
        red: channel_field(record, "red"),
        green: channel_field(record, "green"),
        blue: channel_field(record, "blue"),
    })
}

fn wheel_field(record: &Map<String, Value>, field: &str) -> f64 {
    record.get(field).and_then(coerce_number).unwrap_or(0.0)
}

fn coerce_wheel(value: &Value) -> Option<ColorWheel> {
    let record = value.as_object()?;
    Some(ColorWheel {
        h: wheel_field(record, "h"),
        s: wheel_field(record, "s"),
        l: wheel_field(record, "l"),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{ChannelKey, ScalarKey, WheelKey};
    use serde_json::json;

    fn import(doc: Value) -> ImportReport {
        import_value(&doc).expect("object document")
    }

    #[test]
    fn every_scalar_key_accepts_number_and_sequence() {
        for key in ScalarKey::ALL {
            let bare = import(json!({ key.name(): 42 }));
            let seq = import(json!({ key.name(): [42] }));
            assert!(bare.is_valid() && seq.is_valid());
            assert_eq!(bare.adjustments.scalar(*key), Some(42.0), "{key}");
            assert_eq!(bare.adjustments, seq.adjustments, "{key}");
        }
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let report = import(json!({"contrast": "-12.5", "gamma": " 1.2 "}));
        assert_eq!(report.adjustments.scalar(ScalarKey::Contrast), Some(-12.5));
        assert_eq!(report.adjustments.scalar(ScalarKey::Gamma), Some(1.2));
    }

    #[test]
    fn unknown_key_is_reported_and_dropped() {
        let report = import(json!({"unknownKey": 1}));
        assert_eq!(report.unsupported_fields, ["unknownKey"]);
        assert!(report.adjustments.is_empty());
        assert!(!report.is_valid());
    }

    #[test]
    fn unsupported_fields_keep_document_order() {
        let report = import(json!({"zeta": 1, "exposure": 3, "alpha": 2}));
        assert_eq!(report.unsupported_fields, ["zeta", "alpha"]);
        assert_eq!(report.adjustments.len(), 1);
    }

    #[test]
    fn uncoercible_scalars_are_skipped_silently() {
        let report = import(json!({
            "exposure": "bright",
            "contrast": [1, 2],
            "brightness": ["5"],
            "saturation": {"value": 3},
            "hue": null,
            "gamma": true,
            "vibrance": "",
            "shadows": "NaN",
        }));
        assert!(report.is_valid());
        assert!(report.adjustments.is_empty());
        assert_eq!(
            report.skipped_fields,
            ["exposure", "contrast", "brightness", "saturation", "hue", "gamma", "vibrance", "shadows"]
        );
    }

    #[test]
    fn channel_triples_coerce_each_field() {
        let report = import(json!({
            "hueChannels": {"red": [10], "green": "5", "blue": "oops"},
            "luminanceChannels": {"red": 3},
        }));
        assert_eq!(
            report.adjustments.channels(ChannelKey::HueChannels),
            Some(ChannelTriple::new(10.0, 5.0, 0.0))
        );
        assert_eq!(
            report.adjustments.channels(ChannelKey::LuminanceChannels),
            Some(ChannelTriple::new(3.0, 0.0, 0.0))
        );
    }

    #[test]
    fn color_wheels_coerce_each_field() {
        let report = import(json!({
            "midtonesWheel": {"h": 120, "s": "0.4"},
            "highlightsWheel": {"h": [1], "s": null, "l": -0.2},
        }));
        assert_eq!(
            report.adjustments.wheel(WheelKey::MidtonesWheel),
            Some(ColorWheel::new(120.0, 0.4, 0.0))
        );
        assert_eq!(
            report.adjustments.wheel(WheelKey::HighlightsWheel),
            Some(ColorWheel::new(0.0, 0.0, -0.2))
        );
    }

    #[test]
    fn structured_keys_require_objects() {
        let report = import(json!({"saturationChannels": [1], "shadowsWheel": 4}));
        assert!(report.adjustments.is_empty());
        assert_eq!(report.skipped_fields, ["saturationChannels", "shadowsWheel"]);
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(matches!(import_value(&json!([1, 2])), Err(AdjustError::NotAnObject("an array"))));
        assert!(matches!(import_json("null"), Err(AdjustError::NotAnObject("null"))));
        assert!(matches!(import_json("{not json"), Err(AdjustError::Json(_))));
    }

    #[test]
    fn yaml_documents() {
        let report = import_yaml("exposure: 25\ntint: [4]\nshadowsWheel:\n  h: 30\n").unwrap();
        assert!(report.is_valid());
        assert_eq!(report.adjustments.scalar(ScalarKey::Exposure), Some(25.0));
        assert_eq!(report.adjustments.scalar(ScalarKey::Tint), Some(4.0));
        assert_eq!(
            report.adjustments.wheel(WheelKey::ShadowsWheel),
            Some(ColorWheel::new(30.0, 0.0, 0.0))
        );
    }

    #[test]
    fn import_is_deterministic() {
        let doc = json!({"exposure": 10, "foo": 1, "hueChannels": {"red": 2}});
        assert_eq!(import(doc.clone()), import(doc));
    }
}
