//! The root publishing configuration and `Publishing.toml` loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pubcfg_util::errors::PublishingError;

use crate::p2_repository::P2Repository;
use crate::paths;
use crate::project::{ArtifactRef, MavenProject};
use crate::properties;
use crate::upload_repository::MavenUploadRepository;
use crate::version::VersionPolicy;

/// Default branch releases are cut from.
pub const DEFAULT_BRANCH: &str = "master";

/// Everything a publish run needs to know, parsed from `Publishing.toml` or
/// assembled through the builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishingSettings {
    #[serde(default, skip_serializing_if = "VersionPolicy::is_unset")]
    version: VersionPolicy,

    #[serde(default = "default_branch")]
    branch: String,

    #[serde(default = "default_true", rename = "create-signatures")]
    create_signatures: bool,

    #[serde(default, rename = "sign-jars")]
    sign_jars: bool,

    #[serde(default, rename = "pack-jars")]
    pack_jars: bool,

    #[serde(default, rename = "fail-on-inconsistent-jars")]
    fail_on_inconsistent_jars: bool,

    #[serde(
        default = "paths::default_user_settings",
        rename = "user-maven-settings"
    )]
    user_maven_settings: PathBuf,

    #[serde(
        default = "paths::default_global_settings",
        rename = "global-maven-settings",
        skip_serializing_if = "Option::is_none"
    )]
    global_maven_settings: Option<PathBuf>,

    #[serde(
        default = "paths::default_security_file",
        rename = "maven-security-file"
    )]
    maven_security_file: PathBuf,

    #[serde(default, rename = "maven-upload-repository")]
    maven_upload_repository: MavenUploadRepository,

    #[serde(default, rename = "project", skip_serializing_if = "Vec::is_empty")]
    projects: Vec<MavenProject>,

    #[serde(default, rename = "p2-repository", skip_serializing_if = "Vec::is_empty")]
    p2_repositories: Vec<P2Repository>,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PublishingSettings {
    fn default() -> Self {
        let maven_paths = paths::MavenSettingsPaths::from_env();
        Self {
            version: VersionPolicy::default(),
            branch: default_branch(),
            create_signatures: true,
            sign_jars: false,
            pack_jars: false,
            fail_on_inconsistent_jars: false,
            user_maven_settings: maven_paths.user_settings,
            global_maven_settings: maven_paths.global_settings,
            maven_security_file: maven_paths.security_file,
            maven_upload_repository: MavenUploadRepository::default(),
            projects: Vec::new(),
            p2_repositories: Vec::new(),
        }
    }
}

impl PublishingSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `Publishing.toml`, resolving `${env:VAR}` references first.
    ///
    /// References are looked up in `.publishing.env` next to the file, then
    /// in the process environment. The result is not validated; see
    /// [`PublishingSettings::load`].
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PublishingError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars = properties::load_env_file(&dir.join(crate::ENV_FILE_NAME))
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {e}", crate::ENV_FILE_NAME);
                Default::default()
            });
        let resolved = properties::interpolate(&content, &env_vars);

        let settings = Self::parse_toml(&resolved)?;
        tracing::debug!(
            "Loaded {} ({} projects, {} P2 repositories)",
            path.display(),
            settings.projects.len(),
            settings.p2_repositories.len()
        );
        Ok(settings)
    }

    /// Load and validate a `Publishing.toml`.
    pub fn load(path: &Path) -> miette::Result<Self> {
        let settings = Self::from_path(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a `Publishing.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            PublishingError::Config {
                message: format!("Failed to parse {}: {e}", crate::SETTINGS_FILE_NAME),
            }
            .into()
        })
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version.set_version(version);
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version.set_version(version);
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_create_signatures(mut self, enabled: bool) -> Self {
        self.create_signatures = enabled;
        self
    }

    pub fn with_sign_jars(mut self, enabled: bool) -> Self {
        self.sign_jars = enabled;
        self
    }

    pub fn with_pack_jars(mut self, enabled: bool) -> Self {
        self.pack_jars = enabled;
        self
    }

    pub fn with_fail_on_inconsistent_jars(mut self, enabled: bool) -> Self {
        self.fail_on_inconsistent_jars = enabled;
        self
    }

    pub fn with_user_maven_settings(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_maven_settings = path.into();
        self
    }

    pub fn with_global_maven_settings(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_maven_settings = Some(path.into());
        self
    }

    pub fn with_maven_security_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.maven_security_file = path.into();
        self
    }

    /// Replace the upload repository with a freshly configured one.
    pub fn maven_upload_repository(
        &mut self,
        configure: impl FnOnce(MavenUploadRepository) -> MavenUploadRepository,
    ) -> &mut MavenUploadRepository {
        self.maven_upload_repository = configure(MavenUploadRepository::default());
        &mut self.maven_upload_repository
    }

    /// Replace the upload repository with a default one under a new name.
    pub fn maven_upload_repository_named(
        &mut self,
        name: impl Into<String>,
    ) -> &mut MavenUploadRepository {
        self.maven_upload_repository(|repo| repo.with_name(name))
    }

    pub fn with_maven_upload_repository(
        mut self,
        configure: impl FnOnce(MavenUploadRepository) -> MavenUploadRepository,
    ) -> Self {
        self.maven_upload_repository(configure);
        self
    }

    /// Configure a fresh project and append it.
    pub fn project(
        &mut self,
        configure: impl FnOnce(MavenProject) -> MavenProject,
    ) -> &mut MavenProject {
        self.projects.push(configure(MavenProject::default()));
        let last = self.projects.len() - 1;
        &mut self.projects[last]
    }

    pub fn with_project(mut self, configure: impl FnOnce(MavenProject) -> MavenProject) -> Self {
        self.project(configure);
        self
    }

    /// Configure a fresh P2 repository and append it.
    pub fn p2_repository(
        &mut self,
        configure: impl FnOnce(P2Repository) -> P2Repository,
    ) -> &mut P2Repository {
        self.p2_repositories.push(configure(P2Repository::default()));
        let last = self.p2_repositories.len() - 1;
        &mut self.p2_repositories[last]
    }

    pub fn with_p2_repository(
        mut self,
        configure: impl FnOnce(P2Repository) -> P2Repository,
    ) -> Self {
        self.p2_repository(configure);
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.version()
    }

    pub fn version_policy(&self) -> &VersionPolicy {
        &self.version
    }

    /// Base version of the configured version; errors when it is unset.
    pub fn base_version(&self) -> miette::Result<String> {
        self.version.base_version()
    }

    pub fn is_snapshot(&self) -> miette::Result<bool> {
        self.version.is_snapshot()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn upload_repository(&self) -> &MavenUploadRepository {
        &self.maven_upload_repository
    }

    pub fn create_signatures(&self) -> bool {
        self.create_signatures
    }

    pub fn sign_jars(&self) -> bool {
        self.sign_jars
    }

    pub fn pack_jars(&self) -> bool {
        self.pack_jars
    }

    pub fn fail_on_inconsistent_jars(&self) -> bool {
        self.fail_on_inconsistent_jars
    }

    pub fn user_maven_settings(&self) -> &Path {
        &self.user_maven_settings
    }

    pub fn global_maven_settings(&self) -> Option<&Path> {
        self.global_maven_settings.as_deref()
    }

    pub fn maven_security_file(&self) -> &Path {
        &self.maven_security_file
    }

    /// Projects in declaration order.
    pub fn projects(&self) -> &[MavenProject] {
        &self.projects
    }

    /// P2 repositories in declaration order.
    pub fn p2_repositories(&self) -> &[P2Repository] {
        &self.p2_repositories
    }

    /// Every artifact of every project, in declaration order.
    pub fn artifacts(&self) -> impl Iterator<Item = ArtifactRef<'_>> {
        self.projects.iter().flat_map(|p| p.artifact_refs())
    }
}
