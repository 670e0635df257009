//! Browser capability detection for bcap.
//!
//! A client is identified only by its `User-Agent` string. The
//! [`CapabilityDetector`] parses it into a [`BrowserSignature`] and evaluates
//! the [`CapabilityProfile`] of the browser family, as found in a
//! [`CapabilityMatrix`], into the [`ClientCapabilitySet`] of that client.
//!
//! ```
//! use bcap_capability::{Capability, browser_capabilities};
//!
//! let capabilities = browser_capabilities(
//!     "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_3) AppleWebKit/604.5.6 \
//!      (KHTML, like Gecko) Version/11.0.3 Safari/604.5.6",
//! );
//! assert!(capabilities.contains(&Capability::Es2017));
//! assert!(!capabilities.contains(&Capability::Modules));
//! ```
//!
//! Detection is based on signatures and versions only. There is no
//! probing of runtime behaviour, and the capability vocabulary is fixed
//! (see [`Capability`]).
//!
//! [`BrowserSignature`]: bcap_ua::BrowserSignature

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod capability;
pub use capability::{Capability, ClientCapabilitySet};

pub mod version;
#[doc(inline)]
pub use version::{Version, parse_version, version_at_least};

pub mod matrix;
#[doc(inline)]
pub use matrix::{CapabilityMatrix, CapabilityPredicate, CapabilityProfile, since};

mod detect;
pub use detect::{CapabilityDetector, browser_capabilities};
