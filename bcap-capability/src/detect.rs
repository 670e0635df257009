use crate::{CapabilityMatrix, ClientCapabilitySet};
use bcap_ua::{BrowserSignature, DefaultUserAgentParser, UserAgentParser, family, os};
use std::sync::Arc;

/// Derives the [`ClientCapabilitySet`] of a client from its `User-Agent` string.
///
/// The detector is pure: the same input always yields the same set.
/// Clients of an unknown browser family get an empty set, which
/// is the most conservative outcome: only fallback builds match it.
#[derive(Debug, Clone)]
pub struct CapabilityDetector<P = DefaultUserAgentParser> {
    parser: P,
    matrix: Arc<CapabilityMatrix>,
}

impl CapabilityDetector {
    /// Create a [`CapabilityDetector`] using the [`DefaultUserAgentParser`]
    /// and the builtin [`CapabilityMatrix`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_parser(DefaultUserAgentParser::new())
    }
}

impl Default for CapabilityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: UserAgentParser> CapabilityDetector<P> {
    /// Create a [`CapabilityDetector`] with a custom [`UserAgentParser`]
    /// and the builtin [`CapabilityMatrix`].
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            matrix: CapabilityMatrix::builtin(),
        }
    }

    /// Replace the [`CapabilityMatrix`] used by this detector.
    #[must_use]
    pub fn with_matrix(mut self, matrix: impl Into<Arc<CapabilityMatrix>>) -> Self {
        self.matrix = matrix.into();
        self
    }

    /// The [`CapabilityMatrix`] used by this detector.
    pub fn matrix(&self) -> &CapabilityMatrix {
        &self.matrix
    }

    /// Parse the `User-Agent` into the [`BrowserSignature`] that is evaluated
    /// against the matrix.
    ///
    /// Chrome on iOS is a wrapper around the system WebKit and is therefore
    /// remapped to the `Mobile Safari` family. Its version is left untouched.
    pub fn signature(&self, user_agent: &str) -> BrowserSignature {
        let signature = self.parser.parse(user_agent);
        tracing::trace!(
            user_agent.original = %user_agent,
            "user agent parsed as {signature}",
        );

        if signature.browser_name() == Some(family::CHROME) && signature.os_name() == Some(os::IOS)
        {
            tracing::debug!(
                browser.version = ?signature.browser_version(),
                os.version = ?signature.os_version(),
                "chrome on iOS: evaluate capabilities as mobile safari",
            );
            return signature.with_browser_name(family::MOBILE_SAFARI);
        }

        signature
    }

    /// Derive the capabilities of the client identified by the given `User-Agent`.
    pub fn browser_capabilities(&self, user_agent: &str) -> ClientCapabilitySet {
        let signature = self.signature(user_agent);
        self.signature_capabilities(&signature)
    }

    /// Derive the capabilities for an already parsed (and remapped) signature.
    pub fn signature_capabilities(&self, signature: &BrowserSignature) -> ClientCapabilitySet {
        let family = signature.browser_name().unwrap_or_default();
        let Some(profile) = self.matrix.profile(family) else {
            tracing::debug!(
                browser.family = %family,
                "no capability profile for browser family: assume no capabilities",
            );
            return ClientCapabilitySet::new();
        };

        let capabilities = profile.evaluate(signature);
        tracing::trace!(
            browser.family = %family,
            "client capabilities: [{capabilities}]",
        );
        capabilities
    }
}

/// Derive the capabilities of the client identified by the given `User-Agent`,
/// using the [`DefaultUserAgentParser`] and the builtin [`CapabilityMatrix`].
#[must_use]
pub fn browser_capabilities(user_agent: &str) -> ClientCapabilitySet {
    CapabilityDetector::new().browser_capabilities(user_agent)
}
