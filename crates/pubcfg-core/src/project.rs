//! Maven projects: a group plus the ordered artifacts published under it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::artifact::{deserialize_artifacts, MavenArtifact};

/// A Maven project from a `[[project]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MavenProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_artifacts",
        skip_serializing_if = "Vec::is_empty"
    )]
    artifacts: Vec<MavenArtifact>,
}

impl MavenProject {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            group: Some(group.into()),
            artifacts: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Builder form of [`MavenProject::artifact`].
    pub fn with_artifact(mut self, configure: impl FnOnce(MavenArtifact) -> MavenArtifact) -> Self {
        self.artifact(configure);
        self
    }

    /// Builder form of [`MavenProject::artifact_named`].
    pub fn with_artifact_named(mut self, name: impl Into<String>) -> Self {
        self.artifact_named(name);
        self
    }

    /// Configure a fresh artifact and append it to this project.
    pub fn artifact(
        &mut self,
        configure: impl FnOnce(MavenArtifact) -> MavenArtifact,
    ) -> &mut MavenArtifact {
        self.push_artifact(configure(MavenArtifact::default()))
    }

    /// Append an artifact that only has a name.
    pub fn artifact_named(&mut self, name: impl Into<String>) -> &mut MavenArtifact {
        self.push_artifact(MavenArtifact::new(name))
    }

    /// Append an already configured artifact.
    pub fn push_artifact(&mut self, artifact: MavenArtifact) -> &mut MavenArtifact {
        self.artifacts.push(artifact);
        let last = self.artifacts.len() - 1;
        &mut self.artifacts[last]
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Artifacts in declaration order.
    pub fn artifacts(&self) -> &[MavenArtifact] {
        &self.artifacts
    }

    /// Effective group of `artifact` when published as part of this project.
    pub fn artifact_group<'a>(&'a self, artifact: &'a MavenArtifact) -> Option<&'a str> {
        artifact.effective_group(self)
    }

    /// Artifacts paired with this project, in declaration order.
    pub fn artifact_refs(&self) -> impl Iterator<Item = ArtifactRef<'_>> {
        self.artifacts.iter().map(move |artifact| ArtifactRef {
            project: self,
            artifact,
        })
    }
}

/// An artifact viewed together with the project that owns it.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactRef<'a> {
    project: &'a MavenProject,
    artifact: &'a MavenArtifact,
}

impl<'a> ArtifactRef<'a> {
    pub fn project(&self) -> &'a MavenProject {
        self.project
    }

    pub fn artifact(&self) -> &'a MavenArtifact {
        self.artifact
    }

    pub fn name(&self) -> Option<&'a str> {
        self.artifact.name()
    }

    pub fn group(&self) -> Option<&'a str> {
        self.artifact.effective_group(self.project)
    }

    pub fn excluded_classifiers(&self) -> &'a BTreeSet<String> {
        self.artifact.excluded_classifiers()
    }

    pub fn excluded_extensions(&self) -> &'a BTreeSet<String> {
        self.artifact.excluded_extensions()
    }
}
