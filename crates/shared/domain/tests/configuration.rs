use resconf_domain::{
    Axis, Configuration, Density, Keyboard, KeysHidden, LayoutDirection, LocaleCode, NavHidden,
    Navigation, Orientation, ScreenLong, ScreenSize, Touchscreen, UiModeNight, UiModeType,
    MNC_ZERO,
};
use serde_json::json;

fn full() -> Configuration {
    Configuration::new()
        .with_mcc(310)
        .with_mnc(4)
        .with_language("en")
        .with_country("US")
        .with_layout_direction(LayoutDirection::Rtl)
        .with_smallest_screen_width_dp(600)
        .with_screen_width_dp(720)
        .with_screen_height_dp(1024)
        .with_screen_size(ScreenSize::Large)
        .with_screen_long(ScreenLong::Yes)
        .with_orientation(Orientation::Landscape)
        .with_ui_mode_type(UiModeType::Car)
        .with_ui_mode_night(UiModeNight::Yes)
        .with_density(Density::HIGH)
        .with_touchscreen(Touchscreen::Finger)
        .with_keys_hidden(KeysHidden::No)
        .with_keyboard(Keyboard::Qwerty)
        .with_nav_hidden(NavHidden::Yes)
        .with_navigation(Navigation::Dpad)
        .with_sdk_version(21)
}

#[test]
fn new_configuration_is_all_unset() {
    let cfg = Configuration::new();
    assert_eq!(cfg, Configuration::default());
    for axis in Axis::ALL {
        assert!(cfg.is_unset(axis), "{axis} should start unset");
    }
    assert_eq!(cfg.language_bytes(), [0, 0]);
    assert_eq!(cfg.country_bytes(), [0, 0]);
    assert_eq!(cfg.density(), Density::DEFAULT);
}

#[test]
fn every_axis_is_settable() {
    let cfg = full();
    assert_eq!(cfg.specificity(), Axis::ALL.len());
    assert_eq!(cfg.mcc(), 310);
    assert_eq!(cfg.mnc(), 4);
    assert_eq!(cfg.sdk_version(), 21);
    assert_eq!(cfg.keyboard(), Keyboard::Qwerty);
}

#[test]
fn copy_overwrites_every_field() {
    let mut dest = Configuration::new().with_orientation(Orientation::Portrait).with_mcc(1);
    let src = Configuration::new().with_density(Density::LOW);
    dest.copy_from(&src);
    assert_eq!(dest, src);
    assert_eq!(dest.orientation(), Orientation::Any);
    assert_eq!(dest.mcc(), 0);
}

#[test]
fn locale_setters_take_two_bytes() {
    let mut cfg = Configuration::new();
    cfg.set_language("english");
    assert_eq!(cfg.language_bytes(), *b"en");

    cfg.set_country("U");
    assert_eq!(cfg.country_bytes(), [b'U', 0]);

    cfg.set_country("");
    assert!(cfg.is_unset(Axis::Country));

    cfg.set_language_bytes([0xff, 0xfe]);
    assert_eq!(cfg.language(), LocaleCode::from_bytes([0xff, 0xfe]));
}

#[test]
fn out_of_domain_values_are_kept_verbatim() {
    let mut cfg = Configuration::new();
    cfg.set_orientation(Orientation::from(9));
    cfg.set_navigation(Navigation::from_raw(200));
    cfg.set_density(Density::from_raw(999));

    assert_eq!(u8::from(cfg.orientation()), 9);
    assert!(!cfg.orientation().is_known());
    assert_ne!(cfg.orientation(), Orientation::Portrait);
    assert_eq!(cfg.navigation().raw(), 200);
    assert_eq!(cfg.density().dpi(), Some(999));
}

#[test]
fn mnc_zero_is_concrete() {
    let cfg = Configuration::new().with_mnc(MNC_ZERO);
    assert!(!cfg.is_unset(Axis::Mnc));
    assert_eq!(cfg.to_string(), "mnc0");
}

#[test]
fn density_sentinels() {
    assert_eq!(Density::DEFAULT.dpi(), None);
    assert_eq!(Density::ANY.dpi(), None);
    assert_eq!(Density::NONE.dpi(), None);
    assert_eq!(Density::TV.dpi(), Some(213));
    assert_eq!(Density::ANY.raw(), 0xfffe);
    assert_eq!(Density::NONE.raw(), 0xffff);
}

#[test]
fn display_renders_qualifiers_in_order() {
    assert_eq!(Configuration::new().to_string(), "default");
    assert_eq!(
        full().to_string(),
        "mcc310-mnc4-en-rUS-ldrtl-sw600dp-w720dp-h1024dp-large-long-land-car-night-hdpi-finger-keysexposed-qwerty-navhidden-dpad-v21"
    );
}

#[test]
fn serde_accepts_labels_and_raw_numbers() {
    let cfg: Configuration = serde_json::from_value(json!({
        "orientation": 2,
        "keyboard": "12key",
        "density": "480dpi",
        "touchscreen": "7",
        "ui_mode_type": "any",
    }))
    .expect("configuration deserialize");

    assert_eq!(cfg.orientation(), Orientation::Landscape);
    assert_eq!(cfg.keyboard(), Keyboard::TwelveKey);
    assert_eq!(cfg.density(), Density::XXHIGH);
    assert_eq!(cfg.touchscreen(), Touchscreen::Unknown(7));
    assert!(cfg.ui_mode_type().is_any());
}

#[test]
fn serde_round_trips_through_json() {
    let cfg = full().with_keyboard(Keyboard::from(42));
    let value = serde_json::to_value(cfg).expect("serialize");
    assert_eq!(value["orientation"], "land");
    assert_eq!(value["keyboard"], 42);
    assert_eq!(value["language"], "en");

    let back: Configuration = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, cfg);
}

#[test]
fn invalid_label_is_rejected() {
    let result = serde_json::from_value::<Configuration>(json!({ "orientation": "sideways" }));
    assert!(result.is_err());
}
