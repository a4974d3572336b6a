//! # bd-core
//!
//! Foundational pieces shared across the bizdays workspace: the error
//! hierarchy, the `ensure!` macro and the strict parsers used at the request
//! boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Text parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
