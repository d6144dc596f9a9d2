//! # bc-core
//!
//! Error definitions shared across the bizcal crates.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! type is the single [`Error`] enum defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
