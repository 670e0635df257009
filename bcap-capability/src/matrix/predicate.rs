use crate::version::{Version, parse_version, version_at_least};
use bcap_ua::BrowserSignature;
use serde::{Deserialize, Serialize};

/// A predicate over a [`BrowserSignature`], deciding whether
/// a single capability is supported.
///
/// Predicates are plain data, such that a capability matrix
/// can be loaded from (and dumped to) configuration. In JSON:
///
/// ```json
/// "always"
/// "never"
/// { "since": "10.3" }
/// { "os_since": "11.3" }
/// { "all": [{ "since": "9" }, { "os_since": "10.11" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityPredicate {
    /// Supported regardless of version.
    Always,
    /// Never supported, e.g. because of a known platform limitation.
    Never,
    /// Supported when the browser version is at least the given version.
    Since(Version),
    /// Supported when the operating system version is at least the given version.
    OsSince(Version),
    /// Supported when all inner predicates hold.
    All(Vec<CapabilityPredicate>),
}

impl CapabilityPredicate {
    /// Supported when the browser version is at least `minimum`.
    pub fn since(minimum: impl Into<Version>) -> Self {
        Self::Since(minimum.into())
    }

    /// Supported when the operating system version is at least `minimum`.
    pub fn os_since(minimum: impl Into<Version>) -> Self {
        Self::OsSince(minimum.into())
    }

    /// Supported when all given predicates hold.
    pub fn all(predicates: impl IntoIterator<Item = Self>) -> Self {
        Self::All(predicates.into_iter().collect())
    }

    /// Evaluate this predicate for the given signature.
    ///
    /// Absent versions compare as `0`, so only a `0` threshold accepts them.
    #[must_use]
    pub fn matches(&self, signature: &BrowserSignature) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Since(minimum) => {
                version_at_least(minimum, &parse_version(signature.browser_version()))
            }
            Self::OsSince(minimum) => {
                version_at_least(minimum, &parse_version(signature.os_version()))
            }
            Self::All(predicates) => predicates.iter().all(|p| p.matches(signature)),
        }
    }
}

/// Build a [`CapabilityPredicate::Since`] threshold from one to three components.
///
/// Absent trailing components are omitted rather than zero filled,
/// and a minor is only taken into account together with its patch
/// when the minor itself is present.
#[must_use]
pub fn since(major: i64, minor: Option<i64>, patch: Option<i64>) -> CapabilityPredicate {
    let mut minimum = vec![major];
    if let Some(minor) = minor {
        minimum.push(minor);
        if let Some(patch) = patch {
            minimum.push(patch);
        }
    }
    CapabilityPredicate::Since(Version::new(minimum))
}
