//! User Agent (UA) parser for bcap.
//!
//! This crate turns a raw `User-Agent` string into a [`BrowserSignature`]:
//! the browser family name and version plus the operating system name and version.
//! That signature is all the capability detector in `bcap-capability` needs
//! in order to decide which features a client supports.
//!
//! The parser is consumed through the narrow [`UserAgentParser`] interface,
//! such that any compliant implementation can be substituted for the builtin
//! [`DefaultUserAgentParser`], as long as the versions it produces remain
//! dot-delimited digit sequences.
//!
//! # Remarks
//!
//! We only recognise the browser families that matter for differential serving
//! (see [`family`]) and a handful of look-alikes that must not be mistaken for them
//! (e.g. _Samsung Browser_ also advertises `Chrome/`). Everything else yields a
//! signature without browser family, which downstream means "least capable".
//!
//! The recognised operating systems are listed in [`os`]. Apple OS versions are
//! advertised with underscores (`10_13_4`) and are normalised to dots (`10.13.4`);
//! Windows NT versions are mapped to their marketing version (`NT 6.1` is `7`).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;
