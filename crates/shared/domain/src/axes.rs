//! Enumerated configuration axes.
//!
//! Every enum here stores the platform's raw value verbatim. Raw values outside the
//! documented domain are kept in an `Unknown(raw)` variant, so a setter never rejects
//! input and a getter always returns exactly what was stored. Equality and hashing go
//! through the raw value.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! axis_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $expecting:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub enum $name {
            /// Wildcard: compatible with every value.
            #[default]
            Any,
            $( $(#[$vmeta])* $variant, )+
            /// A raw value outside the documented domain, kept verbatim.
            Unknown(u8),
        }

        impl $name {
            /// Every concrete, documented value (excludes `Any` and `Unknown`).
            pub const KNOWN: &'static [Self] = &[ $(Self::$variant),+ ];

            /// Maps a raw platform value to its variant.
            #[must_use]
            pub const fn from_raw(raw: u8) -> Self {
                match raw {
                    0 => Self::Any,
                    $( $raw => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }

            /// The raw platform value.
            #[must_use]
            pub const fn raw(self) -> u8 {
                match self {
                    Self::Any => 0,
                    $( Self::$variant => $raw, )+
                    Self::Unknown(raw) => raw,
                }
            }

            #[must_use]
            pub const fn is_any(self) -> bool {
                self.raw() == 0
            }

            /// `true` when the raw value is inside the documented domain.
            #[must_use]
            pub const fn is_known(self) -> bool {
                !matches!(Self::from_raw(self.raw()), Self::Unknown(_))
            }

            /// Qualifier label of a concrete value (`None` for `Any` and unknown values).
            #[must_use]
            pub const fn label(self) -> Option<&'static str> {
                match Self::from_raw(self.raw()) {
                    $( Self::$variant => Some($label), )+
                    Self::Any | Self::Unknown(_) => None,
                }
            }

            /// Parses a qualifier label; `"any"` yields the wildcard.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    "any" => Some(Self::Any),
                    $( $label => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.raw() == other.raw()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.raw().hash(state);
            }
        }

        impl From<u8> for $name {
            fn from(raw: u8) -> Self {
                Self::from_raw(raw)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.raw()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match (self.label(), self.raw()) {
                    (Some(label), _) => f.write_str(label),
                    (None, 0) => f.write_str("any"),
                    (None, raw) => write!(f, "{}#{raw}", stringify!($name)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match (self.label(), self.raw()) {
                    (Some(label), _) => serializer.serialize_str(label),
                    (None, 0) => serializer.serialize_str("any"),
                    (None, raw) => serializer.serialize_u8(raw),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let visitor =
                    RawVisitor::with_labels($expecting, |label| Self::from_label(label).map(Self::raw));
                deserializer.deserialize_any(visitor).map(Self::from_raw)
            }
        }
    };
}

/// Accepts either a qualifier label or a raw number and yields the raw value.
struct RawVisitor {
    expecting: &'static str,
    labels: fn(&str) -> Option<u8>,
}

impl RawVisitor {
    const fn with_labels(expecting: &'static str, labels: fn(&str) -> Option<u8>) -> Self {
        Self { expecting, labels }
    }
}

impl<'de> Visitor<'de> for RawVisitor {
    type Value = u8;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u8, E> {
        u8::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u8, E> {
        u8::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u8, E> {
        if let Some(raw) = (self.labels)(v) {
            return Ok(raw);
        }
        // Environment overrides arrive as strings even for numeric values.
        v.parse::<u8>().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

axis_enum! {
    /// Screen orientation.
    Orientation, "an orientation label (port, land, square) or raw value" {
        Portrait = 1 => "port",
        Landscape = 2 => "land",
        /// Deprecated by the platform; still matched verbatim.
        Square = 3 => "square",
    }
}

axis_enum! {
    /// Kind of touchscreen.
    Touchscreen, "a touchscreen label (notouch, stylus, finger) or raw value" {
        NoTouch = 1 => "notouch",
        Stylus = 2 => "stylus",
        Finger = 3 => "finger",
    }
}

axis_enum! {
    /// Kind of hardware keyboard.
    Keyboard, "a keyboard label (nokeys, qwerty, 12key) or raw value" {
        NoKeys = 1 => "nokeys",
        Qwerty = 2 => "qwerty",
        TwelveKey = 3 => "12key",
    }
}

axis_enum! {
    /// Keyboard availability.
    KeysHidden, "a keyboard availability label (keysexposed, keyshidden, keyssoft) or raw value" {
        /// Hardware keys exposed.
        No = 1 => "keysexposed",
        /// Hardware keys hidden.
        Yes = 2 => "keyshidden",
        /// Hardware keys hidden, software keyboard shown.
        Soft = 3 => "keyssoft",
    }
}

axis_enum! {
    /// Kind of non-touch navigation.
    Navigation, "a navigation label (nonav, dpad, trackball, wheel) or raw value" {
        NoNav = 1 => "nonav",
        Dpad = 2 => "dpad",
        Trackball = 3 => "trackball",
        Wheel = 4 => "wheel",
    }
}

axis_enum! {
    /// Navigation key availability.
    NavHidden, "a navigation availability label (navexposed, navhidden) or raw value" {
        No = 1 => "navexposed",
        Yes = 2 => "navhidden",
    }
}

axis_enum! {
    /// Screen-size bucket. Buckets are ordered: a smaller bucket serves a larger screen.
    ScreenSize, "a screen size label (small, normal, large, xlarge) or raw value" {
        Small = 1 => "small",
        Normal = 2 => "normal",
        Large = 3 => "large",
        XLarge = 4 => "xlarge",
    }
}

axis_enum! {
    /// Whether the screen is significantly taller/wider than the baseline aspect.
    ScreenLong, "a screen aspect label (notlong, long) or raw value" {
        No = 1 => "notlong",
        Yes = 2 => "long",
    }
}

axis_enum! {
    /// Type of UI mode (dock, car, television and so on).
    UiModeType, "a UI mode type label (normal, desk, car, television, appliance, watch) or raw value" {
        Normal = 1 => "normal",
        Desk = 2 => "desk",
        Car = 3 => "car",
        Television = 4 => "television",
        /// Application with no display.
        Appliance = 5 => "appliance",
        Watch = 6 => "watch",
    }
}

axis_enum! {
    /// Day/night UI mode.
    UiModeNight, "a night mode label (notnight, night) or raw value" {
        No = 1 => "notnight",
        Yes = 2 => "night",
    }
}

axis_enum! {
    /// Layout direction.
    LayoutDirection, "a layout direction label (ldltr, ldrtl) or raw value" {
        Ltr = 1 => "ldltr",
        Rtl = 2 => "ldrtl",
    }
}
