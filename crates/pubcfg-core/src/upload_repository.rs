//! The Maven repository artifacts are uploaded to.

use serde::{Deserialize, Serialize};

/// Default upload repository name.
pub const DEFAULT_NAME: &str = "Maven";

/// Default staging repository URL (Sonatype OSSRH).
pub const DEFAULT_STAGING_URL: &str =
    "https://s01.oss.sonatype.org/service/local/staging/deploy/maven2/";

/// Default snapshot repository URL (Sonatype OSSRH).
pub const DEFAULT_SNAPSHOT_URL: &str = "https://oss.sonatype.org/content/repositories/snapshots/";

/// Upload target from `[maven-upload-repository]`.
///
/// Releases go to the staging URL, snapshots to the snapshot URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MavenUploadRepository {
    #[serde(default = "default_name")]
    name: String,

    #[serde(default = "default_staging_url", rename = "staging-url")]
    staging_url: String,

    #[serde(default = "default_snapshot_url", rename = "snapshot-url")]
    snapshot_url: String,
}

impl Default for MavenUploadRepository {
    fn default() -> Self {
        Self {
            name: default_name(),
            staging_url: default_staging_url(),
            snapshot_url: default_snapshot_url(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_staging_url() -> String {
    DEFAULT_STAGING_URL.to_string()
}

fn default_snapshot_url() -> String {
    DEFAULT_SNAPSHOT_URL.to_string()
}

impl MavenUploadRepository {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_staging_url(mut self, url: impl Into<String>) -> Self {
        self.staging_url = url.into();
        self
    }

    pub fn with_snapshot_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot_url = url.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn staging_url(&self) -> &str {
        &self.staging_url
    }

    pub fn snapshot_url(&self) -> &str {
        &self.snapshot_url
    }

    /// The repository URL for a release (`false`) or snapshot (`true`) upload.
    pub fn target_url(&self, snapshot: bool) -> &str {
        if snapshot {
            &self.snapshot_url
        } else {
            &self.staging_url
        }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `org.example:core:1.0.0` becomes `org/example/core/1.0.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// URL of the directory an artifact version is uploaded to.
    pub fn artifact_url(&self, snapshot: bool, group: &str, artifact: &str, version: &str) -> String {
        format!(
            "{}/{}/",
            self.target_url(snapshot).trim_end_matches('/'),
            Self::coordinate_path(group, artifact, version)
        )
    }
}
