//! Core data types for pubcfg.
//!
//! This crate defines the configuration model for publishing Maven and P2
//! repositories: the version policy, Maven projects and their artifacts, the
//! upload repository, P2 repositories, and the [`settings::PublishingSettings`]
//! root that ties them together. Settings are built through the fluent API or
//! loaded from a `Publishing.toml` build description.
//!
//! This crate is intentionally free of network I/O. File paths in the settings
//! are stored, never opened.

/// File name of the build description.
pub const SETTINGS_FILE_NAME: &str = "Publishing.toml";

/// File name of the optional secrets file next to the build description.
pub const ENV_FILE_NAME: &str = ".publishing.env";

pub mod artifact;
pub mod p2_repository;
pub mod paths;
pub mod project;
pub mod properties;
pub mod settings;
pub mod upload_repository;
pub mod validate;
pub mod version;
