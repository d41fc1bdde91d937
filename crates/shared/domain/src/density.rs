use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Screen density in dots per inch, or one of the platform sentinels.
///
/// The raw value is stored verbatim: `0` is the unset/default sentinel, `0xfffe`
/// marks density-independent ("anydpi") resources and `0xffff` marks resources that
/// must never be scaled ("nodpi"). Every other value is a concrete dpi.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Density(u16);

const NAMED: &[(Density, &str)] = &[
    (Density::DEFAULT, "default"),
    (Density::LOW, "ldpi"),
    (Density::MEDIUM, "mdpi"),
    (Density::TV, "tvdpi"),
    (Density::HIGH, "hdpi"),
    (Density::XHIGH, "xhdpi"),
    (Density::XXHIGH, "xxhdpi"),
    (Density::XXXHIGH, "xxxhdpi"),
    (Density::ANY, "anydpi"),
    (Density::NONE, "nodpi"),
];

impl Density {
    /// Unset: no density qualifier.
    pub const DEFAULT: Self = Self(0);
    /// ~120dpi.
    pub const LOW: Self = Self(120);
    /// ~160dpi, the baseline density.
    pub const MEDIUM: Self = Self(160);
    /// ~213dpi.
    pub const TV: Self = Self(213);
    /// ~240dpi.
    pub const HIGH: Self = Self(240);
    /// ~320dpi.
    pub const XHIGH: Self = Self(320);
    /// ~480dpi.
    pub const XXHIGH: Self = Self(480);
    /// ~640dpi.
    pub const XXXHIGH: Self = Self(640);
    /// Density-independent resource, usable at any density without scaling.
    pub const ANY: Self = Self(0xfffe);
    /// Resource that is never scaled.
    pub const NONE: Self = Self(0xffff);

    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// `true` for the unset sentinel.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }

    /// Concrete dpi value, `None` for the three sentinels.
    #[must_use]
    pub const fn dpi(self) -> Option<u16> {
        match self {
            Self::DEFAULT | Self::ANY | Self::NONE => None,
            Self(dpi) => Some(dpi),
        }
    }

    /// Qualifier label of a named bucket or sentinel.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        NAMED.iter().find(|(density, _)| *density == self).map(|(_, label)| *label)
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        NAMED.iter().find(|(_, name)| *name == label).map(|(density, _)| *density)
    }
}

impl From<u16> for Density {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Density> for u16 {
    fn from(value: Density) -> Self {
        value.0
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "{}dpi", self.0),
        }
    }
}

impl Serialize for Density {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.label() {
            Some(label) => serializer.serialize_str(label),
            None => serializer.serialize_u16(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Density {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DensityVisitor;

        impl Visitor<'_> for DensityVisitor {
            type Value = Density;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a density label (mdpi, hdpi, anydpi, ...), `<n>dpi` or a raw dpi value")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Density, E> {
                u16::try_from(v)
                    .map(Density)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Density, E> {
                u16::try_from(v)
                    .map(Density)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Density, E> {
                if let Some(density) = Density::from_label(v) {
                    return Ok(density);
                }
                v.strip_suffix("dpi")
                    .unwrap_or(v)
                    .parse::<u16>()
                    .map(Density)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(DensityVisitor)
    }
}
