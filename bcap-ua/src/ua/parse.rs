use bcap_utils::str::{
    any_submatch_ignore_ascii_case, contains_ignore_ascii_case, submatch_ignore_ascii_case,
};
use smol_str::SmolStr;

use super::{BrowserSignature, family, os};

/// Maximum length of a User Agent string that we take into consideration.
/// This is significantly longer then expected in the wild where at most we observed around 300 characters.
const MAX_UA_LENGTH: usize = 512;

/// parse the http user agent string and return a [`BrowserSignature`],
/// containing the parsed information or an (partially) empty signature
/// for whatever could not be recognised.
///
/// # Remarks
///
/// NOTE that this function does not aim to be:
///
/// - super accurate: it aims to be fast and good for the popular cases;
/// - complete: we only care about the families that have a capability profile,
///   and those that could be mistaken for one of them.
pub(super) fn parse_user_agent(header: &str) -> BrowserSignature {
    let ua = if header.len() > MAX_UA_LENGTH {
        // cut at the last char boundary within the limit
        let end = (0..=MAX_UA_LENGTH)
            .rev()
            .find(|&index| header.is_char_boundary(index))
            .unwrap_or_default();
        header.get(..end).unwrap_or_default()
    } else {
        header
    };

    let mut signature = BrowserSignature::unknown();
    if let Some((name, version)) = parse_browser(ua) {
        signature = signature.with_browser(name, version);
    }
    if let Some((name, version)) = parse_os(ua) {
        signature = signature.with_os(name, version);
    }
    signature
}

/// Order matters: most Chromium derivatives also advertise `Chrome/` and `Safari/`,
/// and every WebKit browser advertises `Safari/`.
fn parse_browser(ua: &str) -> Option<(&'static str, Option<SmolStr>)> {
    if let Some(rest) = after_any_marker(ua, &["Edge/", "Edg/", "EdgA/", "EdgiOS/"]) {
        return Some((family::EDGE, parse_browser_version(rest)));
    }

    if let Some(rest) = after_any_marker(ua, &["OPR/", "OPiOS/"]) {
        return Some((family::OPERA, parse_browser_version(rest)));
    }
    if submatch_ignore_ascii_case(ua, "Opera") {
        // presto generation: `Opera/9.80 (...) Presto/2.12.388 Version/12.16`
        let version = after_any_marker(ua, &["Version/", "Opera/", "Opera "])
            .and_then(parse_browser_version);
        return Some((family::OPERA, version));
    }

    for (marker, name) in [
        ("Vivaldi/", family::VIVALDI),
        ("SamsungBrowser/", family::SAMSUNG_BROWSER),
        ("YaBrowser/", family::YANDEX),
        ("UCBrowser/", family::UC_BROWSER),
        ("Electron/", family::ELECTRON),
        ("HeadlessChrome/", family::CHROME_HEADLESS),
        ("CriOS/", family::CHROME),
        ("FxiOS/", family::FIREFOX),
        ("Chromium/", family::CHROMIUM),
        ("Chrome/", family::CHROME),
        ("Firefox/", family::FIREFOX),
    ] {
        if let Some(rest) = after_any_marker(ua, &[marker]) {
            return Some((name, parse_browser_version(rest)));
        }
    }

    if let Some(rest) = after_any_marker(ua, &["MSIE "]) {
        return Some((family::IE, parse_browser_version(rest)));
    }
    if submatch_ignore_ascii_case(ua, "Trident/") {
        let version = after_any_marker(ua, &["rv:"]).and_then(parse_browser_version);
        return Some((family::IE, version));
    }

    if submatch_ignore_ascii_case(ua, "Safari") {
        let version = after_any_marker(ua, &["Version/"]).and_then(parse_browser_version);
        let name = if any_submatch_ignore_ascii_case(ua, ["Mobile/", "Mobile Safari"]) {
            family::MOBILE_SAFARI
        } else {
            family::SAFARI
        };
        return Some((name, version));
    }

    None
}

fn parse_os(ua: &str) -> Option<(&'static str, Option<SmolStr>)> {
    if any_submatch_ignore_ascii_case(ua, ["iPhone", "iPad", "iPod"]) {
        // `CPU iPhone OS 11_3 like Mac OS X` or `CPU OS 11_3 like Mac OS X`
        let version = after_any_marker(ua, &[" OS "]).and_then(parse_os_version);
        return Some((os::IOS, version));
    }

    if let Some(rest) = after_any_marker(ua, &["Windows NT "]) {
        let version = parse_os_version(rest).map(|nt| windows_version(&nt));
        return Some((os::WINDOWS, version));
    }
    if submatch_ignore_ascii_case(ua, "Windows") {
        return Some((os::WINDOWS, None));
    }

    if let Some(rest) = after_any_marker(ua, &["Android "]) {
        return Some((os::ANDROID, parse_os_version(rest)));
    }
    if submatch_ignore_ascii_case(ua, "Android") {
        return Some((os::ANDROID, None));
    }

    if let Some(rest) = after_any_marker(ua, &["CrOS "]) {
        // `CrOS x86_64 10176.76.0`: skip the architecture
        let version = rest
            .split_once(' ')
            .and_then(|(_, version)| parse_os_version(version));
        return Some((os::CHROMIUM_OS, version));
    }

    if let Some(rest) = after_any_marker(ua, &["Mac OS X "]) {
        return Some((os::MAC_OS, parse_os_version(rest)));
    }
    if any_submatch_ignore_ascii_case(ua, ["Macintosh", "Mac OS X"]) {
        return Some((os::MAC_OS, None));
    }

    if submatch_ignore_ascii_case(ua, "Linux") {
        return Some((os::LINUX, None));
    }

    None
}

/// Returns the part of `ua` directly following the first marker found,
/// markers being tried in the order given.
fn after_any_marker<'a>(ua: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers.iter().find_map(|marker| {
        contains_ignore_ascii_case(ua, marker).and_then(|loc| ua.get(loc + marker.len()..))
    })
}

/// Browser versions are a dotted sequence of alphanumerical parts,
/// e.g. `64.0.3282.140` or `125.0a1`.
fn parse_browser_version(s: &str) -> Option<SmolStr> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .unwrap_or(s.len());
    let version = &s[..end];
    version
        .starts_with(|c: char| c.is_ascii_digit())
        .then(|| SmolStr::new(version))
}

/// Operating system versions use either dots or (Apple) underscores,
/// e.g. `10_13_4`, which are normalised to dots.
fn parse_os_version(s: &str) -> Option<SmolStr> {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '_'))
        .unwrap_or(s.len());
    let version = s[..end].trim_end_matches(['.', '_']);
    if !version.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(if version.contains('_') {
        SmolStr::new(version.replace('_', "."))
    } else {
        SmolStr::new(version)
    })
}

fn windows_version(nt: &str) -> SmolStr {
    match nt {
        "10.0" => SmolStr::new_static("10"),
        "6.3" => SmolStr::new_static("8.1"),
        "6.2" => SmolStr::new_static("8"),
        "6.1" => SmolStr::new_static("7"),
        "6.0" => SmolStr::new_static("Vista"),
        "5.1" | "5.2" => SmolStr::new_static("XP"),
        "5.0" => SmolStr::new_static("2000"),
        other => SmolStr::new(other),
    }
}
