//! Recognized adjustment names.
//!
//! Every name an adjustment document may carry belongs to exactly one
//! category, and the category fixes the value shape:
//!
//! | Category | Keys | External shape |
//! |---|---|---|
//! | [`ScalarKey`] | `exposure`, `contrast`, ... | `[magnitude]` |
//! | [`ChannelKey`] | `hueChannels`, ... | `{ red: [v], green: [v], blue: [v] }` |
//! | [`WheelKey`] | `shadowsWheel`, ... | `{ h, s, l }` |

use std::fmt;
use std::str::FromStr;

/// Value shape required by a key category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentKind {
    /// One magnitude.
    Scalar,
    /// Per-channel red/green/blue record.
    ChannelTriple,
    /// Hue/saturation/lightness wheel offsets.
    ColorWheel,
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::ChannelTriple => "channel triple",
            Self::ColorWheel => "color wheel",
        })
    }
}

macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every key of this category, in canonical order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// External (camelCase) name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            /// Looks up a key by its exact external name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| UnknownKey(s.to_string()))
            }
        }
    };
}

key_enum! {
    /// Keys carrying a single magnitude.
    ///
    /// The first ten participate in the color transform; the rest are
    /// stored for effects rendered elsewhere.
    ScalarKey {
        /// Exposure in hundredths of a stop.
        Exposure => "exposure",
        /// Contrast around mid-gray.
        Contrast => "contrast",
        /// Additive brightness.
        Brightness => "brightness",
        /// Luma-relative saturation.
        Saturation => "saturation",
        /// Warm/cool split tone.
        Temperature => "temperature",
        /// Power curve; `1.0` is identity.
        Gamma => "gamma",
        /// Highlight lift/pull.
        Highlights => "highlights",
        /// Shadow lift/pull.
        Shadows => "shadows",
        /// Selective saturation.
        Vibrance => "vibrance",
        /// YIQ hue rotation.
        Hue => "hue",
        /// Green/magenta tint.
        Tint => "tint",
        /// Lift.
        Lift => "lift",
        /// Gain.
        Gain => "gain",
        /// Offset.
        Offset => "offset",
        /// Local contrast.
        Clarity => "clarity",
        /// Film grain.
        FilmGrain => "filmGrain",
        /// Vignette.
        Vignette => "vignette",
        /// Bloom.
        Bloom => "bloom",
        /// Halation.
        Halation => "halation",
        /// Chromatic aberration.
        ChromaticAberration => "chromaticAberration",
        /// Shadow luminance.
        ShadowsLum => "shadowsLum",
        /// Midtone luminance.
        MidtonesLum => "midtonesLum",
        /// Highlight luminance.
        HighlightsLum => "highlightsLum",
    }
}

key_enum! {
    /// Keys carrying a red/green/blue record.
    ChannelKey {
        /// Per-channel hue shifts.
        HueChannels => "hueChannels",
        /// Per-channel saturation.
        SaturationChannels => "saturationChannels",
        /// Per-channel luminance.
        LuminanceChannels => "luminanceChannels",
    }
}

key_enum! {
    /// Keys carrying an h/s/l wheel.
    WheelKey {
        /// Shadow color wheel.
        ShadowsWheel => "shadowsWheel",
        /// Midtone color wheel.
        MidtonesWheel => "midtonesWheel",
        /// Highlight color wheel.
        HighlightsWheel => "highlightsWheel",
    }
}

/// Error returned when parsing a name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown adjustment key: {0}")]
pub struct UnknownKey(pub String);

/// Any recognized adjustment name, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdjustmentKey {
    /// Scalar key.
    Scalar(ScalarKey),
    /// Channel-triple key.
    Channels(ChannelKey),
    /// Color-wheel key.
    Wheel(WheelKey),
}

impl AdjustmentKey {
    /// Resolves an external name to its category. `None` for unsupported names.
    pub fn from_name(name: &str) -> Option<Self> {
        ScalarKey::from_name(name)
            .map(Self::Scalar)
            .or_else(|| ChannelKey::from_name(name).map(Self::Channels))
            .or_else(|| WheelKey::from_name(name).map(Self::Wheel))
    }

    /// External name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar(k) => k.name(),
            Self::Channels(k) => k.name(),
            Self::Wheel(k) => k.name(),
        }
    }

    /// Value shape this key requires.
    pub const fn kind(self) -> AdjustmentKind {
        match self {
            Self::Scalar(_) => AdjustmentKind::Scalar,
            Self::Channels(_) => AdjustmentKind::ChannelTriple,
            Self::Wheel(_) => AdjustmentKind::ColorWheel,
        }
    }

    /// Every recognized key: scalars, then channel triples, then wheels.
    pub fn all() -> impl Iterator<Item = Self> {
        ScalarKey::ALL
            .iter()
            .copied()
            .map(Self::Scalar)
            .chain(ChannelKey::ALL.iter().copied().map(Self::Channels))
            .chain(WheelKey::ALL.iter().copied().map(Self::Wheel))
    }
}

impl fmt::Display for AdjustmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdjustmentKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl From<ScalarKey> for AdjustmentKey {
    fn from(k: ScalarKey) -> Self {
        Self::Scalar(k)
    }
}

impl From<ChannelKey> for AdjustmentKey {
    fn from(k: ChannelKey) -> Self {
        Self::Channels(k)
    }
}

impl From<WheelKey> for AdjustmentKey {
    fn from(k: WheelKey) -> Self {
        Self::Wheel(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sizes() {
        assert_eq!(ScalarKey::ALL.len(), 23);
        assert_eq!(ChannelKey::ALL.len(), 3);
        assert_eq!(WheelKey::ALL.len(), 3);
        assert_eq!(AdjustmentKey::all().count(), 29);
    }

    #[test]
    fn names_roundtrip() {
        for key in AdjustmentKey::all() {
            assert_eq!(AdjustmentKey::from_name(key.name()), Some(key));
            assert_eq!(key.to_string().parse::<AdjustmentKey>().ok(), Some(key));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(AdjustmentKey::from_name("filmGrain"), Some(ScalarKey::FilmGrain.into()));
        assert_eq!(AdjustmentKey::from_name("filmgrain"), None);
        assert_eq!(AdjustmentKey::from_name("Exposure"), None);
        assert!("sharpness".parse::<AdjustmentKey>().is_err());
    }

    #[test]
    fn kinds() {
        assert_eq!(AdjustmentKey::from(ScalarKey::Hue).kind(), AdjustmentKind::Scalar);
        assert_eq!(
            AdjustmentKey::from(ChannelKey::LuminanceChannels).kind(),
            AdjustmentKind::ChannelTriple
        );
        assert_eq!(AdjustmentKey::from(WheelKey::MidtonesWheel).kind(), AdjustmentKind::ColorWheel);
    }
}
