//! Maven artifact descriptors.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::project::MavenProject;

/// A named artifact published as part of a [`MavenProject`].
///
/// Classifier and extension exclusions suppress publication of the matching
/// artifact variants (for example `javadoc` jars or `zip` distributions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MavenArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,

    #[serde(
        default,
        rename = "exclude-classifiers",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    excluded_classifiers: BTreeSet<String>,

    #[serde(
        default,
        rename = "exclude-extensions",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    excluded_extensions: BTreeSet<String>,
}

impl MavenArtifact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
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

    pub fn exclude_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.excluded_classifiers.insert(classifier.into());
        self
    }

    pub fn exclude_extension(mut self, extension: impl Into<String>) -> Self {
        self.excluded_extensions.insert(extension.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The group set on this artifact itself, without inheritance.
    pub fn own_group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// The artifact's own group if set, else the owning project's group.
    pub fn effective_group<'a>(&'a self, project: &'a MavenProject) -> Option<&'a str> {
        self.group.as_deref().or_else(|| project.group())
    }

    pub fn excluded_classifiers(&self) -> &BTreeSet<String> {
        &self.excluded_classifiers
    }

    pub fn excluded_extensions(&self) -> &BTreeSet<String> {
        &self.excluded_extensions
    }

    pub fn is_classifier_excluded(&self, classifier: &str) -> bool {
        self.excluded_classifiers.contains(classifier)
    }

    pub fn is_extension_excluded(&self, extension: &str) -> bool {
        self.excluded_extensions.contains(extension)
    }
}

/// An artifact entry in `Publishing.toml`: a bare name or a detailed table.
#[derive(Debug, Clone)]
pub enum ArtifactEntry {
    Name(String),
    Detailed(MavenArtifact),
}

impl<'de> Deserialize<'de> for ArtifactEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = ArtifactEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an artifact name or an artifact table")
            }

            fn visit_str<E: de::Error>(self, name: &str) -> Result<Self::Value, E> {
                Ok(ArtifactEntry::Name(name.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                MavenArtifact::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(ArtifactEntry::Detailed)
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

impl From<ArtifactEntry> for MavenArtifact {
    fn from(entry: ArtifactEntry) -> Self {
        match entry {
            ArtifactEntry::Name(name) => MavenArtifact::new(name),
            ArtifactEntry::Detailed(artifact) => artifact,
        }
    }
}

pub(crate) fn deserialize_artifacts<'de, D>(deserializer: D) -> Result<Vec<MavenArtifact>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Vec::<ArtifactEntry>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(MavenArtifact::from).collect())
}
