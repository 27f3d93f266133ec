//! Infrastructure Services
//!
//! This module provides the infrastructure services for the login screen:
//!
//! - **client**: HTTP client for the remote authentication endpoint
//! - **config**: endpoint configuration supplied at construction
//!
//! The services are designed to be WASM-first, using browser-compatible
//! crates throughout.

pub mod client;
pub mod config;
