//! The capability matrix: per browser family, which capability is supported from which version.

use crate::{Capability, ClientCapabilitySet};
use bcap_error::{ErrorContext, OpaqueError};
use bcap_ua::BrowserSignature;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{
    collections::BTreeMap,
    sync::{Arc, OnceLock},
};

mod builtin;

mod predicate;
pub use predicate::{CapabilityPredicate, since};

/// The capability predicates of a single browser family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityProfile(BTreeMap<Capability, CapabilityPredicate>);

impl CapabilityProfile {
    /// Create an empty [`CapabilityProfile`], supporting nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for the given capability.
    #[must_use]
    pub fn with(mut self, capability: Capability, predicate: CapabilityPredicate) -> Self {
        self.0.insert(capability, predicate);
        self
    }

    /// The predicate for the given capability, if any.
    #[must_use]
    pub fn get(&self, capability: &Capability) -> Option<&CapabilityPredicate> {
        self.0.get(capability)
    }

    /// Iterate over the capabilities and their predicates.
    pub fn iter(&self) -> impl Iterator<Item = (&Capability, &CapabilityPredicate)> {
        self.0.iter()
    }

    /// Evaluate every predicate of this profile against the signature,
    /// collecting the capabilities that hold.
    #[must_use]
    pub fn evaluate(&self, signature: &BrowserSignature) -> ClientCapabilitySet {
        self.0
            .iter()
            .filter(|(_, predicate)| predicate.matches(signature))
            .map(|(capability, _)| capability.clone())
            .collect()
    }
}

/// Mapping from browser family name to the [`CapabilityProfile`] of that family.
///
/// The builtin matrix ([`CapabilityMatrix::builtin`]) is built once and shared
/// read-only for the lifetime of the process. A matrix is configuration,
/// it can be replaced by one loaded from JSON with [`CapabilityMatrix::from_json_str`]
/// without touching detection or build selection:
///
/// ```
/// use bcap_capability::{Capability, CapabilityMatrix};
///
/// let matrix = CapabilityMatrix::from_json_str(r#"{
///     "Firefox": { "es2015": { "since": "51" }, "push": "never" }
/// }"#).unwrap();
///
/// let firefox = matrix.profile("Firefox").unwrap();
/// assert!(firefox.get(&Capability::Es2015).is_some());
/// assert!(matrix.profile("Chrome").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityMatrix(BTreeMap<SmolStr, CapabilityProfile>);

impl CapabilityMatrix {
    /// Create an empty [`CapabilityMatrix`], in which no family supports anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin [`CapabilityMatrix`].
    ///
    /// Families sharing an engine (`Chrome`, `Chromium`, `Chrome Headless`)
    /// share one profile.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<CapabilityMatrix>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(builtin::builtin_matrix()))
            .clone()
    }

    /// Load a [`CapabilityMatrix`] from its JSON representation.
    pub fn from_json_str(s: &str) -> Result<Self, OpaqueError> {
        serde_json::from_str(s).context("parse capability matrix from json")
    }

    /// Dump this [`CapabilityMatrix`] as pretty printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String, OpaqueError> {
        serde_json::to_string_pretty(self).context("serialize capability matrix as json")
    }

    /// Set the profile of a browser family, replacing any existing one.
    #[must_use]
    pub fn with_profile(mut self, family: impl Into<SmolStr>, profile: CapabilityProfile) -> Self {
        self.0.insert(family.into(), profile);
        self
    }

    /// The profile of the given browser family, if the family is known.
    #[must_use]
    pub fn profile(&self, family: &str) -> Option<&CapabilityProfile> {
        self.0.get(family)
    }

    /// Iterate over the known browser families.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(SmolStr::as_str)
    }
}
