mod info;
pub use info::BrowserSignature;

mod parse;
use parse::parse_user_agent;

pub mod family {
    //! Browser family names as produced by the [`DefaultUserAgentParser`].
    //!
    //! [`DefaultUserAgentParser`]: super::DefaultUserAgentParser

    /// Google Chrome, also used for Chrome on iOS (`CriOS`).
    pub const CHROME: &str = "Chrome";
    /// Open-source Chromium builds.
    pub const CHROMIUM: &str = "Chromium";
    /// Chrome running headless (`HeadlessChrome`).
    pub const CHROME_HEADLESS: &str = "Chrome Headless";
    /// Opera, both the Presto and the Chromium (`OPR`) generations.
    pub const OPERA: &str = "Opera";
    /// Vivaldi.
    pub const VIVALDI: &str = "Vivaldi";
    /// Safari on iOS (and the Android stock browser).
    pub const MOBILE_SAFARI: &str = "Mobile Safari";
    /// Safari on macOS.
    pub const SAFARI: &str = "Safari";
    /// Microsoft Edge, EdgeHTML and Chromium generations alike.
    pub const EDGE: &str = "Edge";
    /// Mozilla Firefox, also used for Firefox on iOS (`FxiOS`).
    pub const FIREFOX: &str = "Firefox";
    /// Internet Explorer.
    pub const IE: &str = "IE";
    /// Samsung Internet.
    pub const SAMSUNG_BROWSER: &str = "Samsung Browser";
    /// Yandex Browser.
    pub const YANDEX: &str = "Yandex";
    /// UC Browser.
    pub const UC_BROWSER: &str = "UCBrowser";
    /// Electron shells.
    pub const ELECTRON: &str = "Electron";
}

pub mod os {
    //! Operating system names as produced by the [`DefaultUserAgentParser`].
    //!
    //! [`DefaultUserAgentParser`]: super::DefaultUserAgentParser

    /// Apple iOS (and iPadOS when it identifies as such).
    pub const IOS: &str = "iOS";
    /// Apple macOS.
    pub const MAC_OS: &str = "Mac OS";
    /// Microsoft Windows.
    pub const WINDOWS: &str = "Windows";
    /// Google Android.
    pub const ANDROID: &str = "Android";
    /// Chrome OS.
    pub const CHROMIUM_OS: &str = "Chromium OS";
    /// Any other Linux distribution.
    pub const LINUX: &str = "Linux";
}

/// Parses a `User-Agent` string into a [`BrowserSignature`].
///
/// This is the only interface the capability detector depends upon.
/// Implementations must never fail: input they do not understand
/// results in a (partially) empty signature.
pub trait UserAgentParser: Send + Sync + 'static {
    /// Parse the given `User-Agent` (header) value.
    fn parse(&self, user_agent: &str) -> BrowserSignature;
}

impl<F> UserAgentParser for F
where
    F: Fn(&str) -> BrowserSignature + Send + Sync + 'static,
{
    fn parse(&self, user_agent: &str) -> BrowserSignature {
        (self)(user_agent)
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
/// The builtin [`UserAgentParser`].
///
/// See [the crate level documentation](crate) for what it recognises.
pub struct DefaultUserAgentParser;

impl DefaultUserAgentParser {
    /// Create a new [`DefaultUserAgentParser`].
    ///
    /// This has no cost.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UserAgentParser for DefaultUserAgentParser {
    #[inline]
    fn parse(&self, user_agent: &str) -> BrowserSignature {
        parse_user_agent(user_agent)
    }
}

#[cfg(test)]
mod parse_tests;
