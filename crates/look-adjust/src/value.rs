//! Adjustment value shapes.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::key::AdjustmentKind;

/// Per-channel values for `hueChannels`, `saturationChannels` and
/// `luminanceChannels`.
///
/// Serializes to the external shape `{ "red": [v], "green": [v], "blue": [v] }`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelTriple {
    /// Red channel value.
    pub red: f64,
    /// Green channel value.
    pub green: f64,
    /// Blue channel value.
    pub blue: f64,
}

impl ChannelTriple {
    /// Creates a triple from explicit channel values.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

impl Serialize for ChannelTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ChannelTriple", 3)?;
        s.serialize_field("red", &[self.red])?;
        s.serialize_field("green", &[self.green])?;
        s.serialize_field("blue", &[self.blue])?;
        s.end()
    }
}

/// Hue/saturation/lightness offsets for the shadow, midtone and highlight
/// wheels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ColorWheel {
    /// Hue offset.
    pub h: f64,
    /// Saturation offset.
    pub s: f64,
    /// Lightness offset.
    pub l: f64,
}

impl ColorWheel {
    /// Creates a wheel from explicit offsets.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// A single adjustment value, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustmentValue {
    /// One magnitude (external shape `[m]`).
    Scalar(f64),
    /// Channel triple.
    Channels(ChannelTriple),
    /// Color wheel.
    Wheel(ColorWheel),
}

impl AdjustmentValue {
    /// Shape of this value.
    pub const fn kind(&self) -> AdjustmentKind {
        match self {
            Self::Scalar(_) => AdjustmentKind::Scalar,
            Self::Channels(_) => AdjustmentKind::ChannelTriple,
            Self::Wheel(_) => AdjustmentKind::ColorWheel,
        }
    }
}

impl Serialize for AdjustmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(m) => [*m].serialize(serializer),
            Self::Channels(c) => c.serialize(serializer),
            Self::Wheel(w) => w.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn external_shapes() {
        let scalar = serde_json::to_value(AdjustmentValue::Scalar(42.0)).unwrap();
        assert_eq!(scalar, json!([42.0]));

        let channels =
            serde_json::to_value(AdjustmentValue::Channels(ChannelTriple::new(1.0, 2.0, 3.0)))
                .unwrap();
        assert_eq!(channels, json!({"red": [1.0], "green": [2.0], "blue": [3.0]}));

        let wheel = serde_json::to_value(AdjustmentValue::Wheel(ColorWheel::new(10.0, 0.5, -0.25)))
            .unwrap();
        assert_eq!(wheel, json!({"h": 10.0, "s": 0.5, "l": -0.25}));
    }
}
