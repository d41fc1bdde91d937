use resconf_kernel::domain::config::Variant;
use resconf_kernel::prelude::*;

fn density_pool() -> Vec<Configuration> {
    vec![
        Configuration::new(),
        Configuration::new().with_density(Density::MEDIUM),
        Configuration::new().with_density(Density::HIGH),
        Configuration::new().with_density(Density::XXHIGH),
    ]
}

#[test]
fn empty_pool_selects_nothing() {
    let pool: Vec<Configuration> = Vec::new();
    assert!(select_best(&pool, &Configuration::new()).is_none());
    assert!(rank(&pool, &Configuration::new()).is_empty());
}

#[test]
fn illegal_candidates_are_never_selected() {
    let req = Configuration::new().with_orientation(Orientation::Portrait);
    let pool = [
        Configuration::new().with_orientation(Orientation::Landscape),
        Configuration::new().with_orientation(Orientation::Square),
    ];

    assert!(select_best(&pool, &req).is_none());
    assert!(rank(&pool, &req).is_empty());
}

#[test]
fn selects_nearest_density() {
    let req = Configuration::new().with_density(Density::XHIGH);
    let pool = density_pool();

    let best = select_best(&pool, &req).map(Configuration::density);
    assert_eq!(best, Some(Density::HIGH));
}

#[test]
fn rank_orders_every_legal_candidate() {
    let req = Configuration::new().with_density(Density::XHIGH);
    let pool = density_pool();

    let ranked: Vec<String> = rank(&pool, &req).iter().map(ToString::to_string).collect();
    assert_eq!(ranked, ["hdpi", "xxhdpi", "mdpi", "default"]);
}

#[test]
fn ties_keep_the_earlier_candidate() {
    let pool = [Configuration::new().with_language("en"), Configuration::new().with_language("en")];
    let req = Configuration::new().with_language("en");

    let best = select_best(&pool, &req).unwrap();
    assert!(std::ptr::eq(best, &pool[0]));
}

#[test]
fn selects_named_variants() {
    let req = Configuration::new()
        .with_language("de")
        .with_country("AT")
        .with_ui_mode_night(UiModeNight::Yes)
        .with_sdk_version(33);

    let variants = vec![
        Variant::new("base", Configuration::new()),
        Variant::new("night", Configuration::new().with_ui_mode_night(UiModeNight::Yes)),
        Variant::new("de", Configuration::new().with_language("de")),
        Variant::new("de-rDE", Configuration::new().with_language("de").with_country("DE")),
        Variant::new("v34", Configuration::new().with_sdk_version(34)),
    ];

    let best = select_best(&variants, &req).unwrap();
    assert_eq!(best.name, "de");

    let names: Vec<&str> = rank(&variants, &req).iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["de", "night", "base"]);
}
