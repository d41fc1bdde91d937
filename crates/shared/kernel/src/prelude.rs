pub use crate::{
    EnvironmentSource, diff, is_better_than, matches, populate_from, rank, select_best,
};
pub use resconf_domain::{
    Axis, AxisMask, Configuration, Density, Keyboard, KeysHidden, LayoutDirection, LocaleCode,
    MNC_ZERO, NavHidden, Navigation, Orientation, ScreenLong, ScreenSize, Touchscreen,
    UiModeNight, UiModeType,
};
