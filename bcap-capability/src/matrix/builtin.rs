use super::{CapabilityMatrix, CapabilityPredicate, CapabilityProfile};
use crate::Capability;
use bcap_ua::family;

use super::CapabilityPredicate::Never;

fn since<const N: usize>(minimum: [i64; N]) -> CapabilityPredicate {
    CapabilityPredicate::since(minimum)
}

fn os_since<const N: usize>(minimum: [i64; N]) -> CapabilityPredicate {
    CapabilityPredicate::os_since(minimum)
}

fn profile(
    [es2015, es2016, es2017, es2018, push, serviceworker, modules]: [CapabilityPredicate; 7],
) -> CapabilityProfile {
    CapabilityProfile::new()
        .with(Capability::Es2015, es2015)
        .with(Capability::Es2016, es2016)
        .with(Capability::Es2017, es2017)
        .with(Capability::Es2018, es2018)
        .with(Capability::Push, push)
        .with(Capability::ServiceWorker, serviceworker)
        .with(Capability::Modules, modules)
}

/// Browser support as of early 2018.
///
/// Thresholds are data that previously generated manifests rely on:
/// change them only together with the builds they select.
pub(super) fn builtin_matrix() -> CapabilityMatrix {
    let chrome = profile([
        since([49]),
        since([58]),
        since([58]),
        since([64]),
        since([41]),
        since([45]),
        since([64]),
    ]);

    let mobile_safari = profile([
        since([10]),
        since([10, 3]),
        since([10, 3]),
        Never,
        // push and modules depend on the iOS version, not the (wrapper) browser version
        os_since([9, 2]),
        since([11, 3]),
        os_since([11, 3]),
    ]);

    let safari = profile([
        since([10]),
        since([10, 1]),
        since([10, 1]),
        Never,
        // HTTP/2 on desktop Safari requires macOS 10.11
        CapabilityPredicate::all([since([9]), os_since([10, 11])]),
        since([11, 1]),
        since([11, 1]),
    ]);

    let opera = profile([
        since([36]),
        since([45]),
        since([45]),
        since([51]),
        since([28]),
        since([32]),
        since([48]),
    ]);

    let vivaldi = profile([
        since([1]),
        since([1, 14]),
        since([1, 14]),
        since([1, 14]),
        since([1]),
        since([1]),
        since([1, 14]),
    ]);

    // Edge before 15.15063 has a JIT bug affecting ES6 constructors,
    // see https://github.com/Microsoft/ChakraCore/issues/1496
    let edge = profile([
        since([15, 15063]),
        since([15, 15063]),
        since([15, 15063]),
        Never,
        since([12]),
        Never,
        Never,
    ]);

    let firefox = profile([
        since([51]),
        since([52]),
        since([52]),
        since([58]),
        // https://bugzilla.mozilla.org/show_bug.cgi?id=1409570
        Never,
        since([44]),
        Never,
    ]);

    CapabilityMatrix::new()
        .with_profile(family::CHROME, chrome.clone())
        .with_profile(family::CHROMIUM, chrome.clone())
        .with_profile(family::CHROME_HEADLESS, chrome)
        .with_profile(family::OPERA, opera)
        .with_profile(family::VIVALDI, vivaldi)
        .with_profile(family::MOBILE_SAFARI, mobile_safari)
        .with_profile(family::SAFARI, safari)
        .with_profile(family::EDGE, edge)
        .with_profile(family::FIREFOX, firefox)
}
