//! Shared utilities for pubcfg.
//!
//! This crate provides cross-cutting concerns used by the other pubcfg crates:
//! the error type, filesystem helpers, and Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
