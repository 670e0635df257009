use crate::ua::{BrowserSignature, DefaultUserAgentParser, UserAgentParser, family, os};

struct TestCase {
    ua: &'static str,
    browser: Option<&'static str>,
    browser_version: Option<&'static str>,
    os: Option<&'static str>,
    os_version: Option<&'static str>,
}

fn assert_test_cases(test_cases: &[TestCase]) {
    let parser = DefaultUserAgentParser::new();
    for test_case in test_cases {
        let sig = parser.parse(test_case.ua);
        assert_eq!(sig.browser_name(), test_case.browser, "ua: '{}'", test_case.ua);
        assert_eq!(
            sig.browser_version(),
            test_case.browser_version,
            "ua: '{}'",
            test_case.ua
        );
        assert_eq!(sig.os_name(), test_case.os, "ua: '{}'", test_case.ua);
        assert_eq!(sig.os_version(), test_case.os_version, "ua: '{}'", test_case.ua);
    }
}

#[test]
fn test_parse_chromium_family() {
    assert_test_cases(&[
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36",
            browser: Some(family::CHROME),
            browser_version: Some("64.0.3282.140"),
            os: Some(os::WINDOWS),
            os_version: Some("10"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
            browser: Some(family::CHROME),
            browser_version: Some("124.0.0.0"),
            os: Some(os::MAC_OS),
            os_version: Some("10.15.7"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Linux; Android 8.0.0; Pixel 2 Build/OPD3.170816.012) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.137 Mobile Safari/537.36",
            browser: Some(family::CHROME),
            browser_version: Some("64.0.3282.137"),
            os: Some(os::ANDROID),
            os_version: Some("8.0.0"),
        },
        TestCase {
            ua: "Mozilla/5.0 (X11; CrOS x86_64 10176.76.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.144 Safari/537.36",
            browser: Some(family::CHROME),
            browser_version: Some("64.0.3282.144"),
            os: Some(os::CHROMIUM_OS),
            os_version: Some("10176.76.0"),
        },
        TestCase {
            ua: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Ubuntu Chromium/64.0.3282.167 Chrome/64.0.3282.167 Safari/537.36",
            browser: Some(family::CHROMIUM),
            browser_version: Some("64.0.3282.167"),
            os: Some(os::LINUX),
            os_version: None,
        },
        TestCase {
            ua: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/64.0.3282.119 Safari/537.36",
            browser: Some(family::CHROME_HEADLESS),
            browser_version: Some("64.0.3282.119"),
            os: Some(os::LINUX),
            os_version: None,
        },
    ]);
}

#[test]
fn test_parse_chromium_derivatives() {
    assert_test_cases(&[
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.186 Safari/537.36 OPR/51.0.2830.40",
            browser: Some(family::OPERA),
            browser_version: Some("51.0.2830.40"),
            os: Some(os::WINDOWS),
            os_version: Some("10"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/63.0.3239.135 Safari/537.36 Vivaldi/1.94.1030.15",
            browser: Some(family::VIVALDI),
            browser_version: Some("1.94.1030.15"),
            os: Some(os::WINDOWS),
            os_version: Some("10"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.67",
            browser: Some(family::EDGE),
            browser_version: Some("124.0.2478.67"),
            os: Some(os::WINDOWS),
            os_version: Some("10"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Linux; Android 8.0.0; SAMSUNG SM-G950F Build/R16NW) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/6.4 Chrome/56.0.2924.87 Mobile Safari/537.36",
            browser: Some(family::SAMSUNG_BROWSER),
            browser_version: Some("6.4"),
            os: Some(os::ANDROID),
            os_version: Some("8.0.0"),
        },
    ]);
}

#[test]
fn test_parse_legacy_edge_and_ie() {
    assert_test_cases(&[
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 Edge/16.16299",
            browser: Some(family::EDGE),
            browser_version: Some("16.16299"),
            os: Some(os::WINDOWS),
            os_version: Some("10"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko",
            browser: Some(family::IE),
            browser_version: Some("11.0"),
            os: Some(os::WINDOWS),
            os_version: Some("7"),
        },
        TestCase {
            ua: "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)",
            browser: Some(family::IE),
            browser_version: Some("10.0"),
            os: Some(os::WINDOWS),
            os_version: Some("8"),
        },
    ]);
}

#[test]
fn test_parse_firefox() {
    assert_test_cases(&[
        TestCase {
            ua: "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.0",
            browser: Some(family::FIREFOX),
            browser_version: Some("40.0"),
            os: Some(os::WINDOWS),
            os_version: Some("7"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.13; rv:58.0) Gecko/20100101 Firefox/58.0",
            browser: Some(family::FIREFOX),
            browser_version: Some("58.0"),
            os: Some(os::MAC_OS),
            os_version: Some("10.13"),
        },
        TestCase {
            ua: "Mozilla/5.0 (iPhone; CPU iPhone OS 11_2_6 like Mac OS X) AppleWebKit/604.5.6 (KHTML, like Gecko) FxiOS/10.6b8836 Mobile/15D100 Safari/604.5.6",
            browser: Some(family::FIREFOX),
            browser_version: Some("10.6b8836"),
            os: Some(os::IOS),
            os_version: Some("11.2.6"),
        },
    ]);
}

#[test]
fn test_parse_safari() {
    assert_test_cases(&[
        TestCase {
            ua: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_3) AppleWebKit/604.5.6 (KHTML, like Gecko) Version/11.0.3 Safari/604.5.6",
            browser: Some(family::SAFARI),
            browser_version: Some("11.0.3"),
            os: Some(os::MAC_OS),
            os_version: Some("10.13.3"),
        },
        TestCase {
            ua: "Mozilla/5.0 (iPhone; CPU iPhone OS 11_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.0 Mobile/15E148 Safari/604.1",
            browser: Some(family::MOBILE_SAFARI),
            browser_version: Some("11.0"),
            os: Some(os::IOS),
            os_version: Some("11.3"),
        },
        TestCase {
            ua: "Mozilla/5.0 (iPad; CPU OS 10_3_3 like Mac OS X) AppleWebKit/603.3.8 (KHTML, like Gecko) Version/10.0 Mobile/14G60 Safari/602.1",
            browser: Some(family::MOBILE_SAFARI),
            browser_version: Some("10.0"),
            os: Some(os::IOS),
            os_version: Some("10.3.3"),
        },
        TestCase {
            ua: "Mozilla/5.0 (Linux; U; Android 4.0.3; ko-kr; LG-L160L Build/IML74K) AppleWebkit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
            browser: Some(family::MOBILE_SAFARI),
            browser_version: Some("4.0"),
            os: Some(os::ANDROID),
            os_version: Some("4.0.3"),
        },
    ]);
}

#[test]
fn test_parse_chrome_on_ios_keeps_chrome_family() {
    // remapping to the Safari engine is a capability concern, not a parser one
    assert_test_cases(&[TestCase {
        ua: "Mozilla/5.0 (iPhone; CPU iPhone OS 11_3 like Mac OS X) AppleWebKit/604.1.34 (KHTML, like Gecko) CriOS/64.0.3282.112 Mobile/15E148 Safari/604.1",
        browser: Some(family::CHROME),
        browser_version: Some("64.0.3282.112"),
        os: Some(os::IOS),
        os_version: Some("11.3"),
    }]);
}

#[test]
fn test_parse_presto_opera() {
    assert_test_cases(&[TestCase {
        ua: "Opera/9.80 (X11; Linux i686; Ubuntu/14.10) Presto/2.12.388 Version/12.16",
        browser: Some(family::OPERA),
        browser_version: Some("12.16"),
        os: Some(os::LINUX),
        os_version: None,
    }]);
}

#[test]
fn test_parse_unknown_ua() {
    for ua in ["", "curl/7.58.0", "bcap/0.1.0", "desktop"] {
        let sig = BrowserSignature::new(ua);
        assert_eq!(sig, BrowserSignature::unknown(), "ua: '{ua}'");
    }
}

#[test]
fn test_parse_platform_only_ua() {
    let sig = BrowserSignature::new("Mozilla/5.0 (X11; Linux x86_64)");
    assert_eq!(sig.browser_name(), None);
    assert_eq!(sig.browser_version(), None);
    assert_eq!(sig.os_name(), Some(os::LINUX));
}

#[test]
fn test_parse_too_long_ua() {
    let ua = " ".repeat(512) + "Chrome/64.0.3282.140";
    assert_eq!(BrowserSignature::new(&ua), BrowserSignature::unknown());
}

#[test]
fn test_parse_too_long_ua_inspects_prefix() {
    let prefix = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:58.0) Gecko/20100101 Firefox/58.0";
    let ua = format!("{prefix}{}", " ".repeat(600));
    let sig = BrowserSignature::new(&ua);
    assert_eq!(sig.browser_name(), Some(family::FIREFOX));
    assert_eq!(sig.browser_version(), Some("58.0"));
}

#[test]
fn test_parse_too_long_ua_not_on_char_boundary() {
    let prefix = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36";
    // the two byte `é` straddles the length limit
    let ua = format!("{prefix:<511}é Edge/16.16299");
    assert!(!ua.is_char_boundary(512));

    let sig = BrowserSignature::new(&ua);
    assert_eq!(sig.browser_name(), Some(family::CHROME));
    assert_eq!(sig.browser_version(), Some("64.0.3282.140"));
    assert_eq!(sig.os_name(), Some(os::WINDOWS));
    assert_eq!(sig.os_version(), Some("10"));
}

#[test]
fn test_closure_parser() {
    let parser = |_: &str| BrowserSignature::unknown().with_browser(family::SAFARI, Some("12"));
    let sig = UserAgentParser::parse(&parser, "anything");
    assert_eq!(sig.browser_name(), Some(family::SAFARI));
    assert_eq!(sig.browser_version(), Some("12"));
}
