//! Differential build selection for bcap.
//!
//! Given the builds of a [`Manifest`], each tagged with the capabilities it
//! requires, and the [`ClientCapabilitySet`] of a client, [`choose_build`]
//! picks the most capable build that client can run.
//!
//! ```
//! use bcap_build::{BuildDescriptor, choose_build};
//! use bcap_capability::ClientCapabilitySet;
//!
//! let builds = [
//!     BuildDescriptor::new("es6-bundled").with_required_capabilities(["es2015", "modules"]),
//!     BuildDescriptor::new("legacy"),
//! ];
//! let client = ClientCapabilitySet::new().with("push");
//!
//! let selection = choose_build(&builds, &client).unwrap();
//! assert_eq!(selection.name, "legacy");
//! assert_eq!(selection.location_path(), "/legacy");
//! ```
//!
//! Builds are ranked by [`score`], the summed weight of their requirements,
//! from most to least demanding. Ties keep the order in which the builds are
//! declared. The first ranked build whose requirements the client meets is chosen.
//! A manifest should therefore always end with a fallback build without any
//! requirements; if it has none, and the client can run no build, selection
//! yields `None` rather than guessing a destination.
//!
//! [`ClientCapabilitySet`]: bcap_capability::ClientCapabilitySet

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod manifest;
pub use manifest::{BuildDescriptor, Manifest};

mod select;
pub use select::{RankedBuild, can_serve, choose_build, rank_builds, score};

mod redirect;
pub use redirect::BuildSelection;
