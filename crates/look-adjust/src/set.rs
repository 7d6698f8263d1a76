//! The normalized adjustment set.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AdjustError, AdjustResult};
use crate::import::import_value;
use crate::key::{AdjustmentKey, ChannelKey, ScalarKey, WheelKey};
use crate::value::{AdjustmentValue, ChannelTriple, ColorWheel};

/// A normalized collection of named adjustments describing one grade.
///
/// Each category lives in its own map, so a key can never hold a value of
/// the wrong shape. Iteration and serialization follow canonical key order.
///
/// # Example
///
/// ```rust
/// use look_adjust::{AdjustmentSet, ScalarKey};
///
/// let set = AdjustmentSet::new()
///     .with_scalar(ScalarKey::Exposure, 50.0)
///     .with_scalar(ScalarKey::Contrast, 20.0);
/// assert_eq!(set.scalar(ScalarKey::Exposure), Some(50.0));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentSet {
    scalars: BTreeMap<ScalarKey, f64>,
    channels: BTreeMap<ChannelKey, ChannelTriple>,
    wheels: BTreeMap<WheelKey, ColorWheel>,
}

impl AdjustmentSet {
    /// Creates an empty set (identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored adjustments.
    pub fn len(&self) -> usize {
        self.scalars.len() + self.channels.len() + self.wheels.len()
    }

    /// True if no adjustment is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Magnitude stored under a scalar key.
    pub fn scalar(&self, key: ScalarKey) -> Option<f64> {
        self.scalars.get(&key).copied()
    }

    /// Stores a scalar magnitude, returning the previous one.
    pub fn set_scalar(&mut self, key: ScalarKey, magnitude: f64) -> Option<f64> {
        self.scalars.insert(key, magnitude)
    }

    /// Builder form of [`set_scalar`](Self::set_scalar).
    pub fn with_scalar(mut self, key: ScalarKey, magnitude: f64) -> Self {
        self.set_scalar(key, magnitude);
        self
    }

    /// Channel triple stored under a channel key.
    pub fn channels(&self, key: ChannelKey) -> Option<ChannelTriple> {
        self.channels.get(&key).copied()
    }

    /// Stores a channel triple, returning the previous one.
    pub fn set_channels(&mut self, key: ChannelKey, value: ChannelTriple) -> Option<ChannelTriple> {
        self.channels.insert(key, value)
    }

    /// Builder form of [`set_channels`](Self::set_channels).
    pub fn with_channels(mut self, key: ChannelKey, value: ChannelTriple) -> Self {
        self.set_channels(key, value);
        self
    }

    /// Color wheel stored under a wheel key.
    pub fn wheel(&self, key: WheelKey) -> Option<ColorWheel> {
        self.wheels.get(&key).copied()
    }

    /// Stores a color wheel, returning the previous one.
    pub fn set_wheel(&mut self, key: WheelKey, value: ColorWheel) -> Option<ColorWheel> {
        self.wheels.insert(key, value)
    }

    /// Builder form of [`set_wheel`](Self::set_wheel).
    pub fn with_wheel(mut self, key: WheelKey, value: ColorWheel) -> Self {
        self.set_wheel(key, value);
        self
    }

    /// Value stored under any key.
    pub fn get(&self, key: AdjustmentKey) -> Option<AdjustmentValue> {
        match key {
            AdjustmentKey::Scalar(k) => self.scalar(k).map(AdjustmentValue::Scalar),
            AdjustmentKey::Channels(k) => self.channels(k).map(AdjustmentValue::Channels),
            AdjustmentKey::Wheel(k) => self.wheel(k).map(AdjustmentValue::Wheel),
        }
    }

    /// Stores a tagged value under a key of the matching category.
    ///
    /// Fails with [`AdjustError::ShapeMismatch`] if the value's shape does
    /// not match the key's category.
    pub fn insert(
        &mut self,
        key: AdjustmentKey,
        value: AdjustmentValue,
    ) -> AdjustResult<Option<AdjustmentValue>> {
        let previous = match (key, value) {
            (AdjustmentKey::Scalar(k), AdjustmentValue::Scalar(m)) => {
                self.set_scalar(k, m).map(AdjustmentValue::Scalar)
            }
            (AdjustmentKey::Channels(k), AdjustmentValue::Channels(c)) => {
                self.set_channels(k, c).map(AdjustmentValue::Channels)
            }
            (AdjustmentKey::Wheel(k), AdjustmentValue::Wheel(w)) => {
                self.set_wheel(k, w).map(AdjustmentValue::Wheel)
            }
            (key, value) => {
                return Err(AdjustError::ShapeMismatch {
                    key: key.name(),
                    expected: key.kind(),
                    found: value.kind(),
                });
            }
        };
        Ok(previous)
    }

    /// Removes the value stored under a key.
    pub fn remove(&mut self, key: AdjustmentKey) -> Option<AdjustmentValue> {
        match key {
            AdjustmentKey::Scalar(k) => self.scalars.remove(&k).map(AdjustmentValue::Scalar),
            AdjustmentKey::Channels(k) => self.channels.remove(&k).map(AdjustmentValue::Channels),
            AdjustmentKey::Wheel(k) => self.wheels.remove(&k).map(AdjustmentValue::Wheel),
        }
    }

    /// Iterates over stored values in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AdjustmentKey, AdjustmentValue)> + '_ {
        let scalars = self
            .scalars
            .iter()
            .map(|(k, m)| (AdjustmentKey::Scalar(*k), AdjustmentValue::Scalar(*m)));
        let channels = self
            .channels
            .iter()
            .map(|(k, c)| (AdjustmentKey::Channels(*k), AdjustmentValue::Channels(*c)));
        let wheels = self
            .wheels
            .iter()
            .map(|(k, w)| (AdjustmentKey::Wheel(*k), AdjustmentValue::Wheel(*w)));
        scalars.chain(channels).chain(wheels)
    }

    /// Builds a set from an external document, failing on anything the
    /// lenient importer would drop.
    pub fn from_value_strict(value: &serde_json::Value) -> AdjustResult<Self> {
        let report = import_value(value)?;
        if !report.unsupported_fields.is_empty() || !report.skipped_fields.is_empty() {
            return Err(AdjustError::Rejected {
                unsupported: report.unsupported_fields,
                skipped: report.skipped_fields,
            });
        }
        Ok(report.adjustments)
    }

    /// Canonical external representation.
    pub fn to_value(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(k, v)| (k.name().to_string(), value_to_json(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}

fn value_to_json(value: AdjustmentValue) -> serde_json::Value {
    use serde_json::json;
    match value {
        AdjustmentValue::Scalar(m) => json!([m]),
        AdjustmentValue::Channels(c) => {
            json!({ "red": [c.red], "green": [c.green], "blue": [c.blue] })
        }
        AdjustmentValue::Wheel(w) => json!({ "h": w.h, "s": w.s, "l": w.l }),
    }
}

impl Serialize for AdjustmentSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AdjustmentSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value_strict(&value).map_err(serde::de::Error::custom)
    }
}
