use resconf_kernel::prelude::*;
use resconf_kernel::requires_reload;

fn phone() -> Configuration {
    Configuration::new()
        .with_mcc(310)
        .with_language("en")
        .with_country("US")
        .with_orientation(Orientation::Portrait)
        .with_density(Density::XHIGH)
        .with_sdk_version(30)
}

#[test]
fn equal_configurations_have_empty_diff() {
    assert!(diff(&phone(), &phone()).is_empty());
    assert!(diff(&Configuration::new(), &Configuration::new()).is_empty());
}

#[test]
fn country_change_sets_only_locale_bit() {
    let a = phone();
    let b = phone().with_country("CA");

    let mask = diff(&a, &b);
    assert_eq!(mask, AxisMask::LOCALE);
    assert_eq!(mask.bits(), 0x0004);
}

#[test]
fn grouped_axes_share_a_bit() {
    let a = Configuration::new();

    let locale = a.with_language("fr").with_country("FR");
    assert_eq!(diff(&a, &locale), AxisMask::LOCALE);

    let hidden = a.with_keys_hidden(KeysHidden::Yes).with_nav_hidden(NavHidden::Yes);
    assert_eq!(diff(&a, &hidden), AxisMask::KEYBOARD_HIDDEN);

    assert_eq!(diff(&a, &a.with_screen_width_dp(360)), AxisMask::SCREEN_SIZE);
    assert_eq!(diff(&a, &a.with_screen_height_dp(640)), AxisMask::SCREEN_SIZE);
    assert_eq!(diff(&a, &a.with_screen_size(ScreenSize::Large)), AxisMask::SCREEN_LAYOUT);
    assert_eq!(diff(&a, &a.with_screen_long(ScreenLong::Yes)), AxisMask::SCREEN_LAYOUT);
    assert_eq!(diff(&a, &a.with_ui_mode_night(UiModeNight::Yes)), AxisMask::UI_MODE);
    assert_eq!(diff(&a, &a.with_smallest_screen_width_dp(600)), AxisMask::SMALLEST_SCREEN_SIZE);
}

#[test]
fn diff_collects_every_changed_group() {
    let a = phone();
    let b = phone()
        .with_orientation(Orientation::Landscape)
        .with_density(Density::HIGH)
        .with_layout_direction(LayoutDirection::Rtl);

    assert_eq!(diff(&a, &b), AxisMask::ORIENTATION | AxisMask::DENSITY | AxisMask::LAYOUTDIR);
    assert_eq!(diff(&a, &b), diff(&b, &a));
}

#[test]
fn unknown_values_are_compared_verbatim() {
    let a = Configuration::new().with_touchscreen(Touchscreen::from_raw(42));
    let b = Configuration::new().with_touchscreen(Touchscreen::from_raw(43));

    assert_eq!(diff(&a, &b), AxisMask::TOUCHSCREEN);
    assert!(diff(&a, &a).is_empty());
}

#[test]
fn copy_then_diff_is_empty() {
    let src = phone().with_mnc(MNC_ZERO);
    let mut dest = Configuration::new().with_keyboard(Keyboard::Qwerty);

    dest.copy_from(&src);

    assert!(diff(&dest, &src).is_empty());
    assert_eq!(dest, src);
}

#[test]
fn reload_needed_only_for_unhandled_groups() {
    let before = phone();
    let rotated = phone().with_orientation(Orientation::Landscape);
    let handled = AxisMask::ORIENTATION | AxisMask::SCREEN_SIZE;

    assert!(!requires_reload(&before, &rotated, handled));
    assert!(requires_reload(&before, &rotated, AxisMask::empty()));
    assert!(requires_reload(&before, &rotated.with_language("de"), handled));
    assert!(!requires_reload(&before, &before, AxisMask::empty()));
}
