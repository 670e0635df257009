use bcap_capability::Capability;
use bcap_error::{ErrorContext, OpaqueError};
use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;

/// The list of available builds, as found in a `polymer.json` style manifest.
///
/// ```json
/// {
///   "builds": [
///     { "name": "esm-bundled", "basePath": "/esm", "browserCapabilities": ["es2018", "modules"] },
///     { "name": "es5-bundled" }
///   ]
/// }
/// ```
///
/// Fields other than the ones used for build selection are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// The builds in declaration order, which is the tie-break order
    /// among equally scored builds.
    #[serde(default)]
    pub builds: Vec<BuildDescriptor>,
}

impl Manifest {
    /// Create a [`Manifest`] from its builds.
    #[must_use]
    pub fn new(builds: Vec<BuildDescriptor>) -> Self {
        Self { builds }
    }

    /// Parse a [`Manifest`] from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, OpaqueError> {
        serde_json::from_str(s).context("parse build manifest from json")
    }

    /// Parse a [`Manifest`] from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, OpaqueError> {
        serde_json::from_slice(bytes).context("parse build manifest from json")
    }
}

/// A single build of the application, tagged with the capabilities
/// a client needs in order to run it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    /// Name of the build, used as location when there is no base path.
    pub name: SmolStr,
    /// Path the build is served from, empty when not defined.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "SmolStr::is_empty"
    )]
    pub base_path: SmolStr,
    /// Capabilities required by this build. No requirements
    /// make this a fallback build that every client can run.
    #[serde(
        default,
        rename = "browserCapabilities",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required_capabilities: Vec<Capability>,
}

impl BuildDescriptor {
    /// Create a [`BuildDescriptor`] without base path and without requirements.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            base_path: SmolStr::default(),
            required_capabilities: Vec::new(),
        }
    }

    /// Set the path the build is served from.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<SmolStr>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the capabilities required by the build.
    #[must_use]
    pub fn with_required_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = impl Into<Capability>>,
    ) -> Self {
        self.required_capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
