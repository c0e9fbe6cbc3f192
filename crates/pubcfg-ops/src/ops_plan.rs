//! Operation: project validated settings into a publication plan.
//!
//! The plan is the read-only view a publish task consumes: Maven
//! coordinates, upload URLs, P2 targets and the signing/packing toggles.

use std::fmt::Write as _;

use serde::Serialize;

use pubcfg_core::settings::PublishingSettings;
use pubcfg_util::errors::{PublishingError, PublishingResult};

#[derive(Debug, Clone, Serialize)]
pub struct PublicationPlan {
    pub version: String,
    pub base_version: String,
    pub snapshot: bool,
    pub branch: String,
    pub repository: PlannedRepository,
    pub options: PublishOptions,
    pub artifacts: Vec<PlannedArtifact>,
    pub p2_repositories: Vec<PlannedP2Repository>,
}

/// The upload repository chosen for this version.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRepository {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PublishOptions {
    pub create_signatures: bool,
    pub sign_jars: bool,
    pub pack_jars: bool,
    pub fail_on_inconsistent_jars: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedArtifact {
    pub project: String,
    pub group: String,
    pub name: String,
    pub coordinate: String,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_classifiers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedP2Repository {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_path: Option<String>,
    pub namespaces: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_feature: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accepted_differing_jars: Vec<String>,
}

/// Build the publication plan for `settings`. The settings are validated first.
pub fn build_plan(settings: &PublishingSettings) -> PublishingResult<PublicationPlan> {
    settings.validate()?;

    let version = settings.version_policy().require()?.to_string();
    let snapshot = settings.is_snapshot()?;
    let upload = settings.upload_repository();

    let artifacts = settings
        .artifacts()
        .map(|artifact| {
            let group = artifact.group().unwrap_or_default().to_string();
            let name = artifact.name().unwrap_or_default().to_string();
            PlannedArtifact {
                project: artifact.project().name().unwrap_or_default().to_string(),
                coordinate: format!("{group}:{name}:{version}"),
                url: upload.artifact_url(snapshot, &group, &name, &version),
                excluded_classifiers: artifact.excluded_classifiers().iter().cloned().collect(),
                excluded_extensions: artifact.excluded_extensions().iter().cloned().collect(),
                group,
                name,
            }
        })
        .collect::<Vec<_>>();

    let p2_repositories = settings
        .p2_repositories()
        .iter()
        .map(|repo| PlannedP2Repository {
            name: repo.name().unwrap_or_default().to_string(),
            url: repo.url().unwrap_or_default().to_string(),
            group: repo.group().map(str::to_string),
            deploy_path: repo.deploy_path().map(str::to_string),
            namespaces: repo.namespaces().to_vec(),
            reference_feature: repo.reference_feature().map(str::to_string),
            accepted_differing_jars: repo.accepted_differing_jars().to_vec(),
        })
        .collect();

    tracing::debug!(
        "Planned {} artifacts for {} ({})",
        artifacts.len(),
        version,
        if snapshot { "snapshot" } else { "release" }
    );

    Ok(PublicationPlan {
        base_version: settings.base_version()?,
        snapshot,
        branch: settings.branch().to_string(),
        repository: PlannedRepository {
            name: upload.name().to_string(),
            url: upload.target_url(snapshot).to_string(),
        },
        options: PublishOptions {
            create_signatures: settings.create_signatures(),
            sign_jars: settings.sign_jars(),
            pack_jars: settings.pack_jars(),
            fail_on_inconsistent_jars: settings.fail_on_inconsistent_jars(),
        },
        version,
        artifacts,
        p2_repositories,
    })
}

impl PublicationPlan {
    pub fn to_json(&self) -> PublishingResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PublishingError::Generic {
                message: format!("Failed to serialize plan: {e}"),
            }
            .into()
        })
    }

    /// Plain-text rendering for terminal output.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let kind = if self.snapshot { "snapshot" } else { "release" };
        let _ = writeln!(
            out,
            "Version {} ({kind}, base {}) from branch {}",
            self.version, self.base_version, self.branch
        );
        let _ = writeln!(
            out,
            "Upload to {} at {}",
            self.repository.name, self.repository.url
        );
        let _ = writeln!(
            out,
            "Options: create-signatures={} sign-jars={} pack-jars={} fail-on-inconsistent-jars={}",
            self.options.create_signatures,
            self.options.sign_jars,
            self.options.pack_jars,
            self.options.fail_on_inconsistent_jars
        );

        if !self.artifacts.is_empty() {
            let _ = writeln!(out, "\nArtifacts:");
            for artifact in &self.artifacts {
                let _ = write!(out, "  {}", artifact.coordinate);
                let excluded: Vec<String> = artifact
                    .excluded_classifiers
                    .iter()
                    .map(|c| format!("classifier {c}"))
                    .chain(
                        artifact
                            .excluded_extensions
                            .iter()
                            .map(|e| format!("extension {e}")),
                    )
                    .collect();
                if !excluded.is_empty() {
                    let _ = write!(out, " (excluding {})", excluded.join(", "));
                }
                let _ = writeln!(out);
            }
        }

        if !self.p2_repositories.is_empty() {
            let _ = writeln!(out, "\nP2 repositories:");
            for repo in &self.p2_repositories {
                let _ = write!(out, "  {} -> {}", repo.name, repo.url);
                if let Some(path) = &repo.deploy_path {
                    let _ = write!(out, " [{path}]");
                }
                let _ = writeln!(out);
                if !repo.namespaces.is_empty() {
                    let _ = writeln!(out, "    namespaces: {}", repo.namespaces.join(", "));
                }
            }
        }

        out
    }
}
