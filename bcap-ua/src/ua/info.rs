use super::parse_user_agent;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{convert::Infallible, fmt, str::FromStr};

/// Browser and operating system information derived from a `User-Agent` string.
///
/// A signature is immutable once created; the `with_*` methods
/// return a new signature instead of modifying the existing one.
///
/// See [the crate level documentation](crate) for more information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserSignature {
    #[serde(default, rename = "browser", skip_serializing_if = "Option::is_none")]
    browser_name: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    browser_version: Option<SmolStr>,
    #[serde(default, rename = "os", skip_serializing_if = "Option::is_none")]
    os_name: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    os_version: Option<SmolStr>,
}

impl BrowserSignature {
    /// Create a [`BrowserSignature`] by parsing a `User-Agent` (header) value
    /// using the [`DefaultUserAgentParser`].
    ///
    /// [`DefaultUserAgentParser`]: super::DefaultUserAgentParser
    #[must_use]
    pub fn new(user_agent: &str) -> Self {
        parse_user_agent(user_agent)
    }

    /// Create an empty [`BrowserSignature`], which is what an unknown client looks like.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            browser_name: None,
            browser_version: None,
            os_name: None,
            os_version: None,
        }
    }

    /// Set the browser family name and version of the [`BrowserSignature`].
    #[must_use]
    pub fn with_browser(
        mut self,
        name: impl Into<SmolStr>,
        version: Option<impl Into<SmolStr>>,
    ) -> Self {
        self.browser_name = Some(name.into());
        self.browser_version = version.map(Into::into);
        self
    }

    /// Replace only the browser family name, keeping the advertised version.
    #[must_use]
    pub fn with_browser_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.browser_name = Some(name.into());
        self
    }

    /// Set the operating system name and version of the [`BrowserSignature`].
    #[must_use]
    pub fn with_os(mut self, name: impl Into<SmolStr>, version: Option<impl Into<SmolStr>>) -> Self {
        self.os_name = Some(name.into());
        self.os_version = version.map(Into::into);
        self
    }

    /// returns the browser family name (e.g. `Mobile Safari`), if known.
    #[must_use]
    pub fn browser_name(&self) -> Option<&str> {
        self.browser_name.as_deref()
    }

    /// returns the dot-delimited browser version (e.g. `64.0.3282.140`), if known.
    #[must_use]
    pub fn browser_version(&self) -> Option<&str> {
        self.browser_version.as_deref()
    }

    /// returns the operating system name (e.g. `iOS`), if known.
    #[must_use]
    pub fn os_name(&self) -> Option<&str> {
        self.os_name.as_deref()
    }

    /// returns the dot-delimited operating system version (e.g. `11.3`), if known.
    #[must_use]
    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }
}

impl fmt::Display for BrowserSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.browser_name(), self.browser_version()) {
            (Some(name), Some(version)) => write!(f, "{name}/{version}")?,
            (Some(name), None) => write!(f, "{name}")?,
            (None, _) => write!(f, "unknown")?,
        }
        match (self.os_name(), self.os_version()) {
            (Some(name), Some(version)) => write!(f, " ({name} {version})"),
            (Some(name), None) => write!(f, " ({name})"),
            (None, _) => Ok(()),
        }
    }
}

impl FromStr for BrowserSignature {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
