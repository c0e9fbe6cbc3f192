//! Eclipse P2 repository targets.

use serde::{Deserialize, Serialize};

/// A P2 repository from a `[[p2-repository]]` entry.
///
/// `namespaces` lists the bundle name prefixes that belong to this
/// repository. `accepted-differing-jars` names jars whose content may differ
/// from the reference build without failing the consistency check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct P2Repository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(default, rename = "deploy-path", skip_serializing_if = "Option::is_none")]
    deploy_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    namespaces: Vec<String>,

    #[serde(
        default,
        rename = "reference-feature",
        skip_serializing_if = "Option::is_none"
    )]
    reference_feature: Option<String>,

    #[serde(
        default,
        rename = "accepted-differing-jars",
        skip_serializing_if = "Vec::is_empty"
    )]
    accepted_differing_jars: Vec<String>,
}

impl P2Repository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
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

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_deploy_path(mut self, path: impl Into<String>) -> Self {
        self.deploy_path = Some(path.into());
        self
    }

    pub fn with_reference_feature(mut self, feature: impl Into<String>) -> Self {
        self.reference_feature = Some(feature.into());
        self
    }

    pub fn add_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    pub fn accept_differing_jar(mut self, jar: impl Into<String>) -> Self {
        self.accepted_differing_jars.push(jar.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn deploy_path(&self) -> Option<&str> {
        self.deploy_path.as_deref()
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn reference_feature(&self) -> Option<&str> {
        self.reference_feature.as_deref()
    }

    pub fn accepted_differing_jars(&self) -> &[String] {
        &self.accepted_differing_jars
    }

    /// Whether `bundle` falls under one of this repository's namespaces.
    pub fn covers(&self, bundle: &str) -> bool {
        self.namespaces.iter().any(|ns| bundle.starts_with(ns.as_str()))
    }

    pub fn accepts_differing(&self, jar: &str) -> bool {
        self.accepted_differing_jars.iter().any(|j| j == jar)
    }
}
