//! Version string handling and base-version derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

use pubcfg_util::errors::PublishingError;

/// Suffix marking a pre-release (snapshot) version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// The version being published.
///
/// The version is optional until the configuration is validated; deriving
/// a base version from an unset or empty version is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionPolicy {
    version: Option<String>,
}

impl VersionPolicy {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_unset(&self) -> bool {
        self.version.is_none()
    }

    /// The version, or a `ConfigIncomplete` error when it is unset or empty.
    pub fn require(&self) -> miette::Result<&str> {
        match self.version.as_deref() {
            Some(v) if !v.is_empty() => Ok(v),
            Some(_) => Err(PublishingError::ConfigIncomplete {
                message: "version is empty".to_string(),
            }
            .into()),
            None => Err(PublishingError::ConfigIncomplete {
                message: "version is not set".to_string(),
            }
            .into()),
        }
    }

    /// Derive the base version of the configured version.
    pub fn base_version(&self) -> miette::Result<String> {
        Ok(base_version(self.require()?).to_string())
    }

    /// Whether the configured version is a snapshot.
    pub fn is_snapshot(&self) -> miette::Result<bool> {
        Ok(is_snapshot(self.require()?))
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version.as_deref().unwrap_or("<unset>"))
    }
}

/// Whether `version` ends with the snapshot marker.
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}

/// Derive the base version of `version`.
///
/// `2.3.1-SNAPSHOT` becomes `2.3.1`, a three-part version such as `1.2.3` is
/// returned as is, and anything else loses its last dot-separated component
/// (`1.2.3.4` becomes `1.2.3`). Components are not checked for being numeric.
/// A version without any dot is returned unchanged.
pub fn base_version(version: &str) -> &str {
    if let Some(base) = version.strip_suffix(SNAPSHOT_SUFFIX) {
        return base;
    }
    if component_count(version) == 3 {
        return version;
    }
    match version.rfind('.') {
        Some(idx) => &version[..idx],
        None => version,
    }
}

/// Number of dot-separated components, ignoring trailing empty ones.
fn component_count(version: &str) -> usize {
    let mut parts: Vec<&str> = version.split('.').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.len()
}
