//! string utilities

mod search;
#[doc(inline)]
pub use search::{
    any_contains_ignore_ascii_case, any_submatch_ignore_ascii_case, contains_ignore_ascii_case,
    submatch_ignore_ascii_case,
};
