//! Operation: load and validate a `Publishing.toml`.
//!
//! Validation errors are fatal. Suspicious but legal configurations are
//! reported as warnings in the returned summary.

use std::collections::BTreeSet;
use std::path::Path;

use pubcfg_core::settings::PublishingSettings;
use pubcfg_util::errors::PublishingResult;

/// Outcome of a successful check.
#[derive(Debug, Clone)]
pub struct CheckSummary {
    pub version: String,
    pub base_version: String,
    pub branch: String,
    pub upload_repository: String,
    pub projects: usize,
    pub artifacts: usize,
    pub p2_repositories: usize,
    pub warnings: Vec<String>,
}

/// Load, validate and summarize the settings at `path`.
pub fn check(path: &Path) -> PublishingResult<CheckSummary> {
    let settings = PublishingSettings::load(path)?;
    summarize(&settings)
}

/// Summarize already loaded settings, validating them first.
pub fn summarize(settings: &PublishingSettings) -> PublishingResult<CheckSummary> {
    settings.validate()?;
    let version = settings.version_policy().require()?.to_string();
    let warnings = warnings(settings);
    for warning in &warnings {
        tracing::info!("{warning}");
    }

    Ok(CheckSummary {
        base_version: settings.base_version()?,
        version,
        branch: settings.branch().to_string(),
        upload_repository: settings.upload_repository().name().to_string(),
        projects: settings.projects().len(),
        artifacts: settings.artifacts().count(),
        p2_repositories: settings.p2_repositories().len(),
        warnings,
    })
}

fn warnings(settings: &PublishingSettings) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut seen = BTreeSet::new();
    for artifact in settings.artifacts() {
        let coordinate = format!(
            "{}:{}",
            artifact.group().unwrap_or_default(),
            artifact.name().unwrap_or_default()
        );
        if !seen.insert(coordinate.clone()) {
            warnings.push(format!("artifact {coordinate} is declared more than once"));
        }
    }

    for project in settings.projects() {
        if project.artifacts().is_empty() {
            warnings.push(format!(
                "project '{}' declares no artifacts",
                project.name().unwrap_or_default()
            ));
        }
    }

    for repo in settings.p2_repositories() {
        if repo.namespaces().is_empty() {
            warnings.push(format!(
                "p2-repository '{}' declares no namespaces",
                repo.name().unwrap_or_default()
            ));
        }
    }

    if settings.fail_on_inconsistent_jars() && settings.p2_repositories().is_empty() {
        warnings.push(
            "fail-on-inconsistent-jars is set but no p2-repository is declared".to_string(),
        );
    }

    warnings
}
