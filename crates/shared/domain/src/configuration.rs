use crate::axes::{
    Keyboard, KeysHidden, LayoutDirection, NavHidden, Navigation, Orientation, ScreenLong,
    ScreenSize, Touchscreen, UiModeNight, UiModeType,
};
use crate::axis::Axis;
use crate::density::Density;
use crate::locale::LocaleCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value the platform uses to request mobile network code `0`, since `0` itself means unset.
pub const MNC_ZERO: u16 = 0xffff;

/// A device/environment configuration descriptor.
///
/// One field per axis, each defaulting to its wildcard. The same type describes both
/// the live environment and the qualifiers of a resource variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    mcc: u16,
    mnc: u16,
    language: LocaleCode,
    country: LocaleCode,
    orientation: Orientation,
    touchscreen: Touchscreen,
    density: Density,
    keyboard: Keyboard,
    keys_hidden: KeysHidden,
    navigation: Navigation,
    nav_hidden: NavHidden,
    sdk_version: u16,
    screen_size: ScreenSize,
    screen_long: ScreenLong,
    ui_mode_type: UiModeType,
    ui_mode_night: UiModeNight,
    screen_width_dp: u16,
    screen_height_dp: u16,
    smallest_screen_width_dp: u16,
    layout_direction: LayoutDirection,
}

macro_rules! accessors {
    ($( $(#[$doc:meta])* $field:ident, $setter:ident, $with:ident: $ty:ty; )+) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub const fn $field(&self) -> $ty {
                self.$field
            }

            pub const fn $setter(&mut self, value: $ty) {
                self.$field = value;
            }

            #[must_use]
            pub const fn $with(mut self, value: $ty) -> Self {
                self.$field = value;
                self
            }
        )+
    };
}

impl Configuration {
    /// A configuration with every axis unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mcc: 0,
            mnc: 0,
            language: LocaleCode::UNSET,
            country: LocaleCode::UNSET,
            orientation: Orientation::Any,
            touchscreen: Touchscreen::Any,
            density: Density::DEFAULT,
            keyboard: Keyboard::Any,
            keys_hidden: KeysHidden::Any,
            navigation: Navigation::Any,
            nav_hidden: NavHidden::Any,
            sdk_version: 0,
            screen_size: ScreenSize::Any,
            screen_long: ScreenLong::Any,
            ui_mode_type: UiModeType::Any,
            ui_mode_night: UiModeNight::Any,
            screen_width_dp: 0,
            screen_height_dp: 0,
            smallest_screen_width_dp: 0,
            layout_direction: LayoutDirection::Any,
        }
    }

    /// Overwrites every axis with the values of `src`.
    pub const fn copy_from(&mut self, src: &Self) {
        *self = *src;
    }

    accessors! {
        /// Mobile country code, `0` when unset.
        mcc, set_mcc, with_mcc: u16;
        /// Mobile network code, `0` when unset and [`MNC_ZERO`] for an actual zero.
        mnc, set_mnc, with_mnc: u16;
        /// Language code; two zero bytes when unset.
        language, set_language_code, with_language_code: LocaleCode;
        /// Country/region code; two zero bytes when unset.
        country, set_country_code, with_country_code: LocaleCode;
        orientation, set_orientation, with_orientation: Orientation;
        touchscreen, set_touchscreen, with_touchscreen: Touchscreen;
        density, set_density, with_density: Density;
        keyboard, set_keyboard, with_keyboard: Keyboard;
        keys_hidden, set_keys_hidden, with_keys_hidden: KeysHidden;
        navigation, set_navigation, with_navigation: Navigation;
        nav_hidden, set_nav_hidden, with_nav_hidden: NavHidden;
        /// Minimum platform API level, `0` when unset.
        sdk_version, set_sdk_version, with_sdk_version: u16;
        screen_size, set_screen_size, with_screen_size: ScreenSize;
        screen_long, set_screen_long, with_screen_long: ScreenLong;
        ui_mode_type, set_ui_mode_type, with_ui_mode_type: UiModeType;
        ui_mode_night, set_ui_mode_night, with_ui_mode_night: UiModeNight;
        /// Available screen width in dp, `0` for any.
        screen_width_dp, set_screen_width_dp, with_screen_width_dp: u16;
        /// Available screen height in dp, `0` for any.
        screen_height_dp, set_screen_height_dp, with_screen_height_dp: u16;
        /// Smallest screen width in dp, `0` for any.
        smallest_screen_width_dp, set_smallest_screen_width_dp, with_smallest_screen_width_dp: u16;
        layout_direction, set_layout_direction, with_layout_direction: LayoutDirection;
    }

    /// Sets the language from the first two bytes of `code`.
    pub fn set_language(&mut self, code: &str) {
        self.language = LocaleCode::from_code(code);
    }

    #[must_use]
    pub fn with_language(mut self, code: &str) -> Self {
        self.set_language(code);
        self
    }

    /// Sets the country from the first two bytes of `code`.
    pub fn set_country(&mut self, code: &str) {
        self.country = LocaleCode::from_code(code);
    }

    #[must_use]
    pub fn with_country(mut self, code: &str) -> Self {
        self.set_country(code);
        self
    }

    /// Language as an explicit two-byte buffer.
    #[must_use]
    pub const fn language_bytes(&self) -> [u8; 2] {
        self.language.bytes()
    }

    pub const fn set_language_bytes(&mut self, bytes: [u8; 2]) {
        self.language = LocaleCode::from_bytes(bytes);
    }

    /// Country as an explicit two-byte buffer.
    #[must_use]
    pub const fn country_bytes(&self) -> [u8; 2] {
        self.country.bytes()
    }

    pub const fn set_country_bytes(&mut self, bytes: [u8; 2]) {
        self.country = LocaleCode::from_bytes(bytes);
    }

    /// Raw value of one axis widened to `u32`; `0` always means unset.
    ///
    /// Locale codes are packed big-endian. This view lets axis rules be written once
    /// over plain integers.
    #[must_use]
    pub const fn axis_value(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Mcc => self.mcc as u32,
            Axis::Mnc => self.mnc as u32,
            Axis::Language => self.language.packed() as u32,
            Axis::Country => self.country.packed() as u32,
            Axis::LayoutDirection => self.layout_direction.raw() as u32,
            Axis::SmallestScreenWidthDp => self.smallest_screen_width_dp as u32,
            Axis::ScreenWidthDp => self.screen_width_dp as u32,
            Axis::ScreenHeightDp => self.screen_height_dp as u32,
            Axis::ScreenSize => self.screen_size.raw() as u32,
            Axis::ScreenLong => self.screen_long.raw() as u32,
            Axis::Orientation => self.orientation.raw() as u32,
            Axis::UiModeType => self.ui_mode_type.raw() as u32,
            Axis::UiModeNight => self.ui_mode_night.raw() as u32,
            Axis::Density => self.density.raw() as u32,
            Axis::Touchscreen => self.touchscreen.raw() as u32,
            Axis::KeysHidden => self.keys_hidden.raw() as u32,
            Axis::Keyboard => self.keyboard.raw() as u32,
            Axis::NavHidden => self.nav_hidden.raw() as u32,
            Axis::Navigation => self.navigation.raw() as u32,
            Axis::SdkVersion => self.sdk_version as u32,
        }
    }

    /// `true` when `axis` holds its wildcard value.
    #[must_use]
    pub const fn is_unset(&self, axis: Axis) -> bool {
        self.axis_value(axis) == 0
    }

    /// Axes holding a concrete value, in qualifier order.
    pub fn concrete_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|axis| !self.is_unset(*axis))
    }

    /// Number of axes holding a concrete value.
    #[must_use]
    pub fn specificity(&self) -> usize {
        self.concrete_axes().count()
    }

    fn qualifier(&self, axis: Axis) -> String {
        match axis {
            Axis::Mcc => format!("mcc{}", self.mcc),
            Axis::Mnc if self.mnc == MNC_ZERO => "mnc0".to_owned(),
            Axis::Mnc => format!("mnc{}", self.mnc),
            Axis::Language => self.language.to_string(),
            Axis::Country => format!("r{}", self.country),
            Axis::LayoutDirection => self.layout_direction.to_string(),
            Axis::SmallestScreenWidthDp => format!("sw{}dp", self.smallest_screen_width_dp),
            Axis::ScreenWidthDp => format!("w{}dp", self.screen_width_dp),
            Axis::ScreenHeightDp => format!("h{}dp", self.screen_height_dp),
            Axis::ScreenSize => self.screen_size.to_string(),
            Axis::ScreenLong => self.screen_long.to_string(),
            Axis::Orientation => self.orientation.to_string(),
            Axis::UiModeType => self.ui_mode_type.to_string(),
            Axis::UiModeNight => self.ui_mode_night.to_string(),
            Axis::Density => self.density.to_string(),
            Axis::Touchscreen => self.touchscreen.to_string(),
            Axis::KeysHidden => self.keys_hidden.to_string(),
            Axis::Keyboard => self.keyboard.to_string(),
            Axis::NavHidden => self.nav_hidden.to_string(),
            Axis::Navigation => self.navigation.to_string(),
            Axis::SdkVersion => format!("v{}", self.sdk_version),
        }
    }
}

impl AsRef<Self> for Configuration {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Renders the qualifier string, e.g. `en-rUS-land-hdpi`; `default` when nothing is set.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for axis in self.concrete_axes() {
            if !first {
                f.write_str("-")?;
            }
            f.write_str(&self.qualifier(axis))?;
            first = false;
        }
        if first {
            f.write_str("default")?;
        }
        Ok(())
    }
}
