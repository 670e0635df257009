use super::utils::{self, *};

use bcap::{
    build::{Manifest, choose_build},
    capability::{Capability, CapabilityDetector, CapabilityMatrix},
};

const FIREFOX_MODULES_MATRIX: &str = r#"{
  "Firefox": {
    "es2015": { "since": "51" },
    "modules": { "since": "60" },
    "push": "never"
  }
}"#;

#[test]
fn test_matrix_override_changes_selection() {
    utils::init_tracing();

    let manifest = Manifest::from_json_str(POLYMER_JSON).unwrap();
    let detector =
        CapabilityDetector::new().with_matrix(CapabilityMatrix::from_json_str(FIREFOX_MODULES_MATRIX).unwrap());

    let firefox_60 = detector.browser_capabilities(FIREFOX_60);
    assert!(firefox_60.contains(&Capability::Modules));
    assert_eq!(
        choose_build(&manifest.builds, &firefox_60).unwrap().name,
        "esm-bundled"
    );

    let firefox_58 = detector.browser_capabilities(FIREFOX_58);
    assert_eq!(
        choose_build(&manifest.builds, &firefox_58).unwrap().name,
        "es6-bundled"
    );

    // families absent from the override know nothing
    let chrome = detector.browser_capabilities(CHROME_64);
    assert!(chrome.is_empty());
    assert_eq!(
        choose_build(&manifest.builds, &chrome).unwrap().name,
        "es5-bundled"
    );
}

#[test]
fn test_builtin_matrix_dump_is_loadable() {
    utils::init_tracing();

    let builtin = CapabilityMatrix::builtin();
    let json = builtin.to_json_string_pretty().unwrap();
    let loaded = CapabilityMatrix::from_json_str(&json).unwrap();

    let detector = CapabilityDetector::new().with_matrix(loaded);
    for user_agent in [CHROME_64, SAFARI_11_0, MOBILE_SAFARI_IOS_11_3, EDGE_16, FIREFOX_58] {
        assert_eq!(
            detector.browser_capabilities(user_agent),
            CapabilityDetector::new().browser_capabilities(user_agent),
            "ua: '{user_agent}'"
        );
    }
}
