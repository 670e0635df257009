use crate::BuildDescriptor;
use bcap_error::{ErrorContext, OpaqueError};
use http::Uri;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The build chosen for a client: its name and base path only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSelection {
    /// Name of the chosen build.
    pub name: SmolStr,
    /// Base path of the chosen build, empty when the manifest defines none.
    #[serde(default)]
    pub base_path: SmolStr,
}

impl BuildSelection {
    pub(crate) fn new(build: &BuildDescriptor) -> Self {
        Self {
            name: build.name.clone(),
            base_path: build.base_path.clone(),
        }
    }

    /// The absolute path the chosen build is served from.
    ///
    /// This is the base path, or `/` followed by the build name
    /// when there is no base path, always starting with a `/`.
    ///
    /// ```
    /// use bcap_build::BuildSelection;
    ///
    /// let selection = BuildSelection { name: "es5-bundled".into(), base_path: "".into() };
    /// assert_eq!(selection.location_path(), "/es5-bundled");
    ///
    /// let selection = BuildSelection { name: "es5-bundled".into(), base_path: "legacy/".into() };
    /// assert_eq!(selection.location_path(), "/legacy/");
    /// ```
    #[must_use]
    pub fn location_path(&self) -> String {
        let path = if self.base_path.is_empty() {
            self.name.as_str()
        } else {
            self.base_path.as_str()
        };
        if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        }
    }

    /// The location to redirect to, given the current location.
    ///
    /// Scheme, host and port are kept from the current location,
    /// while its path, query and fragment are replaced by the [`location_path`].
    ///
    /// Errors when the current location is not absolute, or when the
    /// location path is not a valid URI path.
    ///
    /// [`location_path`]: Self::location_path
    pub fn redirect_uri(&self, current: &Uri) -> Result<Uri, OpaqueError> {
        let scheme = current
            .scheme()
            .context("current location has no scheme")?
            .clone();
        let host = current.host().context("current location has no host")?;
        let authority = match current.port_u16() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };

        Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(self.location_path())
            .build()
            .context("build redirect location")
    }
}
