use super::utils::{self, *};

use bcap::{
    build::{BuildDescriptor, Manifest},
    choose_build_for_user_agent,
};

#[test]
fn test_choose_polymer_starter_kit_build() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();
    for (user_agent, expected_build) in [
        (CHROME_64, "esm-bundled"),
        (CHROME_HEADLESS_64, "esm-bundled"),
        (OPERA_51, "esm-bundled"),
        (VIVALDI_1_94, "esm-bundled"),
        (SAFARI_11_1, "esm-bundled"),
        (MOBILE_SAFARI_IOS_11_3, "esm-bundled"),
        (SAFARI_11_0, "es6-bundled"),
        (FIREFOX_58, "es6-bundled"),
        (EDGE_16, "es6-bundled"),
        (CHROME_IOS_10_3, "es6-bundled"),
        (FIREFOX_40, "es5-bundled"),
        (IE_11, "es5-bundled"),
        (SAMSUNG_6_4, "es5-bundled"),
        (CURL, "es5-bundled"),
        ("", "es5-bundled"),
    ] {
        let selection = choose_build_for_user_agent(&manifest.builds, user_agent)
            .unwrap_or_else(|| panic!("no build for ua: '{user_agent}'"));
        assert_eq!(selection.name, expected_build, "ua: '{user_agent}'");
    }
}

#[test]
fn test_choose_location_path() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();

    let modern = choose_build_for_user_agent(&manifest.builds, CHROME_64).unwrap();
    assert_eq!(modern.location_path(), "/esm-bundled/");

    let legacy = choose_build_for_user_agent(&manifest.builds, IE_11).unwrap();
    assert_eq!(legacy.location_path(), "/es5-bundled");
}

#[test]
fn test_choose_redirect_uri() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();
    let current: http::Uri = "https://example.com:8443/app/index.html?utm=1#top"
        .parse()
        .unwrap();

    let redirect = choose_build_for_user_agent(&manifest.builds, FIREFOX_58)
        .unwrap()
        .redirect_uri(&current)
        .unwrap();
    assert_eq!(redirect.to_string(), "https://example.com:8443/es6-bundled");
}

#[test]
fn test_choose_no_match_without_fallback() {
    utils::init_tracing();

    let builds = [
        BuildDescriptor::new("esm-bundled").with_required_capabilities(["es2015", "modules"]),
        BuildDescriptor::new("es6-bundled").with_required_capabilities(["es2015"]),
    ];
    assert!(choose_build_for_user_agent(&builds, CURL).is_none());
    assert!(choose_build_for_user_agent(&builds, FIREFOX_40).is_none());
    assert_eq!(
        choose_build_for_user_agent(&builds, FIREFOX_58).map(|s| s.name),
        Some("es6-bundled".into())
    );
}

#[test]
fn test_choose_leaves_manifest_untouched() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();
    let before = manifest.clone();
    let selection = choose_build_for_user_agent(&manifest.builds, CHROME_64).unwrap();
    assert_eq!(selection.name, "esm-bundled");
    assert_eq!(manifest, before);
    assert_eq!(manifest.builds[0].name, "es5-bundled");
}

#[test]
fn test_choose_selection_json() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();
    let selection = choose_build_for_user_agent(&manifest.builds, CHROME_64).unwrap();
    assert_eq!(
        serde_json::to_value(&selection).unwrap(),
        serde_json::json!({ "name": "esm-bundled", "basePath": "/esm-bundled/" })
    );
}
