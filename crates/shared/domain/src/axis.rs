use crate::mask::AxisMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One independent configuration dimension.
///
/// Variants are listed in qualifier order, the order used when a configuration is
/// rendered as a qualifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Mcc,
    Mnc,
    Language,
    Country,
    LayoutDirection,
    SmallestScreenWidthDp,
    ScreenWidthDp,
    ScreenHeightDp,
    ScreenSize,
    ScreenLong,
    Orientation,
    UiModeType,
    UiModeNight,
    Density,
    Touchscreen,
    KeysHidden,
    Keyboard,
    NavHidden,
    Navigation,
    SdkVersion,
}

impl Axis {
    pub const ALL: [Self; 20] = [
        Self::Mcc,
        Self::Mnc,
        Self::Language,
        Self::Country,
        Self::LayoutDirection,
        Self::SmallestScreenWidthDp,
        Self::ScreenWidthDp,
        Self::ScreenHeightDp,
        Self::ScreenSize,
        Self::ScreenLong,
        Self::Orientation,
        Self::UiModeType,
        Self::UiModeNight,
        Self::Density,
        Self::Touchscreen,
        Self::KeysHidden,
        Self::Keyboard,
        Self::NavHidden,
        Self::Navigation,
        Self::SdkVersion,
    ];

    /// The diff bit this axis reports under.
    #[must_use]
    pub const fn group(self) -> AxisMask {
        match self {
            Self::Mcc => AxisMask::MCC,
            Self::Mnc => AxisMask::MNC,
            Self::Language | Self::Country => AxisMask::LOCALE,
            Self::Touchscreen => AxisMask::TOUCHSCREEN,
            Self::Keyboard => AxisMask::KEYBOARD,
            Self::KeysHidden | Self::NavHidden => AxisMask::KEYBOARD_HIDDEN,
            Self::Navigation => AxisMask::NAVIGATION,
            Self::Orientation => AxisMask::ORIENTATION,
            Self::Density => AxisMask::DENSITY,
            Self::ScreenWidthDp | Self::ScreenHeightDp => AxisMask::SCREEN_SIZE,
            Self::SdkVersion => AxisMask::VERSION,
            Self::ScreenSize | Self::ScreenLong => AxisMask::SCREEN_LAYOUT,
            Self::UiModeType | Self::UiModeNight => AxisMask::UI_MODE,
            Self::SmallestScreenWidthDp => AxisMask::SMALLEST_SCREEN_SIZE,
            Self::LayoutDirection => AxisMask::LAYOUTDIR,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mcc => "mcc",
            Self::Mnc => "mnc",
            Self::Language => "language",
            Self::Country => "country",
            Self::LayoutDirection => "layout_direction",
            Self::SmallestScreenWidthDp => "smallest_screen_width_dp",
            Self::ScreenWidthDp => "screen_width_dp",
            Self::ScreenHeightDp => "screen_height_dp",
            Self::ScreenSize => "screen_size",
            Self::ScreenLong => "screen_long",
            Self::Orientation => "orientation",
            Self::UiModeType => "ui_mode_type",
            Self::UiModeNight => "ui_mode_night",
            Self::Density => "density",
            Self::Touchscreen => "touchscreen",
            Self::KeysHidden => "keys_hidden",
            Self::Keyboard => "keyboard",
            Self::NavHidden => "nav_hidden",
            Self::Navigation => "navigation",
            Self::SdkVersion => "sdk_version",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
