//! # polyglot_core
//!
//! Core domain logic for Polyglot.

pub mod generation;
pub mod prompt;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
