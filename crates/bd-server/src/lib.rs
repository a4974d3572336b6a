//! # bd-server
//!
//! HTTP front end for the settlement calculator. Query strings are parsed
//! into typed parameters here and handed to `bd-settlement`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Server configuration.
pub mod config;

/// REST API routes (Axum).
pub mod rest;

/// Logging initialisation.
pub mod telemetry;

pub use config::{Environment, ServerConfig};
pub use rest::create_router;
