use super::utils::{self, *};

use bcap::{
    capability::{Capability, CapabilityDetector, browser_capabilities},
    ua::family,
};

#[test]
fn test_detect_chrome_64() {
    utils::init_tracing();

    let capabilities = browser_capabilities(CHROME_64);
    assert_eq!(
        capabilities.to_sorted_vec(),
        Capability::KNOWN.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_detect_firefox_40() {
    utils::init_tracing();

    assert!(browser_capabilities(FIREFOX_40).is_empty());
}

#[test]
fn test_detect_chrome_on_ios_as_mobile_safari() {
    utils::init_tracing();

    let detector = CapabilityDetector::new();
    let signature = detector.signature(CHROME_IOS_10_3);
    assert_eq!(signature.browser_name(), Some(family::MOBILE_SAFARI));

    let capabilities = detector.browser_capabilities(CHROME_IOS_10_3);
    assert_eq!(
        capabilities,
        detector.signature_capabilities(&signature),
    );
    assert!(!capabilities.contains(&Capability::Modules));
    assert!(capabilities.contains(&Capability::ServiceWorker));
}

#[test]
fn test_detect_is_idempotent() {
    utils::init_tracing();

    let detector = CapabilityDetector::new();
    for user_agent in [
        CHROME_64,
        CHROME_IOS_10_3,
        EDGE_16,
        FIREFOX_58,
        SAFARI_11_0,
        MOBILE_SAFARI_IOS_11_3,
        CURL,
    ] {
        assert_eq!(
            detector.browser_capabilities(user_agent),
            detector.browser_capabilities(user_agent),
            "ua: '{user_agent}'"
        );
    }
}

#[test]
fn test_detect_concurrent_readers() {
    utils::init_tracing();

    let detector = CapabilityDetector::new();
    let expected = detector.browser_capabilities(SAFARI_11_1);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| detector.browser_capabilities(SAFARI_11_1)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
