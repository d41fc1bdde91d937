use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Set of axis groups, as returned by a configuration diff.
    ///
    /// The bit values are the platform's and form a wire contract: never renumber them.
    /// Several axes share a bit (see [`crate::Axis::group`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AxisMask: u32 {
        const MCC = 0x0001;
        const MNC = 0x0002;
        /// Language and country.
        const LOCALE = 0x0004;
        const TOUCHSCREEN = 0x0008;
        const KEYBOARD = 0x0010;
        /// Keyboard and navigation-key availability.
        const KEYBOARD_HIDDEN = 0x0020;
        const NAVIGATION = 0x0040;
        const ORIENTATION = 0x0080;
        const DENSITY = 0x0100;
        /// Screen width and height in dp.
        const SCREEN_SIZE = 0x0200;
        const VERSION = 0x0400;
        /// Screen-size bucket and screen aspect.
        const SCREEN_LAYOUT = 0x0800;
        /// UI mode type and night mode.
        const UI_MODE = 0x1000;
        const SMALLEST_SCREEN_SIZE = 0x2000;
        const LAYOUTDIR = 0x4000;
    }
}

impl From<u32> for AxisMask {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<AxisMask> for u32 {
    fn from(mask: AxisMask) -> Self {
        mask.bits()
    }
}

impl fmt::Display for AxisMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        bitflags::parser::to_writer(self, f)
    }
}

impl Serialize for AxisMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for AxisMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
