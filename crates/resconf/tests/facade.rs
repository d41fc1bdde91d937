use resconf::prelude::*;

#[test]
fn prelude_covers_a_full_selection() {
    let requested = Configuration::new()
        .with_language("en")
        .with_ui_mode_type(UiModeType::Car)
        .with_density(Density::XXHIGH);
    let variants = [
        Variant::new("default", Configuration::new()),
        Variant::new("car", Configuration::new().with_ui_mode_type(UiModeType::Car)),
        Variant::new("desk", Configuration::new().with_ui_mode_type(UiModeType::Desk)),
    ];

    let best = select_best(&variants, &requested).map(|v| v.name.as_str());
    assert_eq!(best, Some("car"));
    assert_eq!(first_conflict(&variants[2].qualifiers, &requested), Some(Axis::UiModeType));
}

#[test]
fn logger_feature_is_on_by_default() {
    assert!(resconf::features::is_enabled("logger"));
    assert!(!resconf::features::is_enabled("server"));
}
