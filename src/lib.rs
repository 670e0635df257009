//! bcap: browser capabilities, for differential serving.
//!
//! Static hosting of differentially compiled builds of a web application
//! (e.g. a modern build using JavaScript modules next to a legacy ES5 build)
//! needs a deterministic way to pick the right build for a client, knowing
//! nothing more about that client than its `User-Agent` string.
//!
//! bcap does this in two steps:
//!
//! 1. the [`CapabilityDetector`] derives the capabilities of a client
//!    (e.g. `es2017`, `modules`, `serviceworker`) from its user agent,
//!    by evaluating the per browser family version thresholds of a
//!    [`CapabilityMatrix`];
//! 2. the build selector ([`choose_build`]) picks, from the builds of
//!    a [`Manifest`], the most demanding one whose required capabilities
//!    the client all supports.
//!
//! ```
//! use bcap::{build::BuildDescriptor, choose_build_for_user_agent};
//!
//! let builds = [
//!     BuildDescriptor::new("esm-bundled")
//!         .with_base_path("/esm/")
//!         .with_required_capabilities(["es2018", "modules"]),
//!     BuildDescriptor::new("es5-bundled"),
//! ];
//!
//! let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!     (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36";
//! let selection = choose_build_for_user_agent(&builds, chrome).unwrap();
//! assert_eq!(selection.location_path(), "/esm/");
//!
//! let ie = "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko";
//! let selection = choose_build_for_user_agent(&builds, ie).unwrap();
//! assert_eq!(selection.location_path(), "/es5-bundled");
//! ```
//!
//! Unknown clients are treated as the least capable ones. Nothing in
//! detection or selection fails: when no build qualifies, selection
//! says so explicitly and leaves the decision to the caller.
//!
//! The `bcap` binary (crate `bcap-cli`) exposes the same functionality
//! on the command line.
//!
//! [`CapabilityDetector`]: crate::capability::CapabilityDetector
//! [`CapabilityMatrix`]: crate::capability::CapabilityMatrix
//! [`choose_build`]: crate::build::choose_build
//! [`Manifest`]: crate::build::Manifest

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error {
    //! Error types and utilities, see [`bcap_error`].

    #[doc(inline)]
    pub use ::bcap_error::*;
}

pub mod utils {
    //! Utilities, see [`bcap_utils`].

    #[doc(inline)]
    pub use ::bcap_utils::*;
}

pub mod telemetry;

#[cfg(feature = "ua")]
#[cfg_attr(docsrs, doc(cfg(feature = "ua")))]
pub mod ua {
    //! User-agent parsing, see [`bcap_ua`].

    #[doc(inline)]
    pub use ::bcap_ua::*;
}

#[cfg(feature = "capability")]
#[cfg_attr(docsrs, doc(cfg(feature = "capability")))]
pub mod capability {
    //! Capability detection, see [`bcap_capability`].

    #[doc(inline)]
    pub use ::bcap_capability::*;
}

#[cfg(feature = "build")]
#[cfg_attr(docsrs, doc(cfg(feature = "build")))]
pub mod build {
    //! Build selection, see [`bcap_build`].

    #[doc(inline)]
    pub use ::bcap_build::*;
}

/// Choose the most capable build for the client identified by the given `User-Agent`,
/// using the builtin parser and capability matrix.
///
/// Returns `None` when the client can run none of the builds.
#[cfg(feature = "build")]
#[cfg_attr(docsrs, doc(cfg(feature = "build")))]
#[must_use]
pub fn choose_build_for_user_agent(
    builds: &[build::BuildDescriptor],
    user_agent: &str,
) -> Option<build::BuildSelection> {
    let client = capability::browser_capabilities(user_agent);
    build::choose_build(builds, &client)
}
