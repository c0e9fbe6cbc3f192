//! Completeness checks run before settings are handed to a publish task.

use pubcfg_util::errors::PublishingError;

use crate::settings::PublishingSettings;

impl PublishingSettings {
    /// Check that every field a publish run reads is set.
    ///
    /// All problems are reported together in one `ConfigIncomplete` error,
    /// one per line when there is more than one.
    pub fn validate(&self) -> miette::Result<()> {
        let problems = self.problems();
        for problem in &problems {
            tracing::debug!("Validation problem: {problem}");
        }
        let message = match problems.as_slice() {
            [] => return Ok(()),
            [single] => single.clone(),
            many => {
                let mut message = format!("{} problems", many.len());
                for problem in many {
                    message.push_str("\n  - ");
                    message.push_str(problem);
                }
                message
            }
        };
        Err(PublishingError::ConfigIncomplete { message }.into())
    }

    /// Human-readable descriptions of every missing required field.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.version() {
            None => problems.push("version is not set".to_string()),
            Some("") => problems.push("version is empty".to_string()),
            Some(_) => {}
        }

        let repo = self.upload_repository();
        if repo.name().is_empty() {
            problems.push("maven-upload-repository: name is empty".to_string());
        }
        if repo.staging_url().is_empty() {
            problems.push("maven-upload-repository: staging-url is empty".to_string());
        }
        if repo.snapshot_url().is_empty() {
            problems.push("maven-upload-repository: snapshot-url is empty".to_string());
        }

        for (i, project) in self.projects().iter().enumerate() {
            let project_label = match project.name() {
                Some(name) if !name.is_empty() => format!("project '{name}'"),
                _ => {
                    problems.push(format!("project #{}: name is not set", i + 1));
                    format!("project #{}", i + 1)
                }
            };
            for (j, artifact) in project.artifact_refs().enumerate() {
                let artifact_label = match artifact.name() {
                    Some(name) if !name.is_empty() => format!("artifact '{name}'"),
                    _ => {
                        problems.push(format!(
                            "{project_label}, artifact #{}: name is not set",
                            j + 1
                        ));
                        format!("artifact #{}", j + 1)
                    }
                };
                if artifact.group().map_or(true, str::is_empty) {
                    problems.push(format!(
                        "{project_label}, {artifact_label}: no group set on the artifact or its project"
                    ));
                }
            }
        }

        for (i, p2) in self.p2_repositories().iter().enumerate() {
            let label = match p2.name() {
                Some(name) if !name.is_empty() => format!("p2-repository '{name}'"),
                _ => {
                    problems.push(format!("p2-repository #{}: name is not set", i + 1));
                    format!("p2-repository #{}", i + 1)
                }
            };
            if p2.url().map_or(true, str::is_empty) {
                problems.push(format!("{label}: url is not set"));
            }
        }

        problems
    }
}
