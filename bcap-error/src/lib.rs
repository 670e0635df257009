//! Error types and utilities for bcap.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait. It is used for the edges of bcap
//! (manifest and matrix loading, redirect construction, cli I/O) where it is usually not
//! that important what specific error type is returned, but rather that an error occurred.
//!
//! The decision core itself (capability detection and build selection) never fails:
//! unknown input degrades to the least capable outcome instead.
//!
//! # bcap
//!
//! Crate used by the end-user `bcap` crate and `bcap` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, ErrorExt, OpaqueError};
