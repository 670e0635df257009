//! utilities crate for bcap
//!
//! `bcap-utils` contains utilities used by `bcap`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # bcap
//!
//! Crate used by the end-user `bcap` crate and `bcap` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod str;
