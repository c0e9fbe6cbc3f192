use pubcfg_core::artifact::MavenArtifact;
use pubcfg_core::project::MavenProject;

#[test]
fn test_artifacts_keep_declaration_order() {
    let mut project = MavenProject::new("core", "org.example");
    project.artifact(|a| a.with_name("zeta"));
    project.artifact(|a| a.with_name("alpha"));

    let names: Vec<_> = project.artifacts().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec![Some("zeta"), Some("alpha")]);
}

#[test]
fn test_artifact_returns_appended_child() {
    let mut project = MavenProject::new("core", "org.example");
    let added = project.artifact(|a| a.with_name("x").exclude_classifier("sources"));
    assert_eq!(added.name(), Some("x"));
    assert!(added.is_classifier_excluded("sources"));
    assert_eq!(project.artifacts().len(), 1);
}

#[test]
fn test_artifact_named() {
    let mut project = MavenProject::new("core", "org.example");
    project.artifact_named("one");
    project.push_artifact(MavenArtifact::new("two").with_group("org.two"));

    assert_eq!(project.artifacts().len(), 2);
    assert_eq!(project.artifacts()[0].name(), Some("one"));
    assert_eq!(project.artifacts()[1].own_group(), Some("org.two"));
}

#[test]
fn test_builder_chain() {
    let project = MavenProject::default()
        .with_name("core")
        .with_group("org.example")
        .with_artifact_named("a")
        .with_artifact(|a| a.with_name("b").with_group("org.b"));

    let groups: Vec<_> = project.artifact_refs().map(|r| r.group()).collect();
    assert_eq!(groups, vec![Some("org.example"), Some("org.b")]);
}

#[test]
fn test_artifact_group_lookup_through_project() {
    let project = MavenProject::new("core", "org.example").with_artifact_named("a");
    let artifact = &project.artifacts()[0];
    assert_eq!(project.artifact_group(artifact), Some("org.example"));
}

#[test]
fn test_artifact_ref_exposes_owner() {
    let project = MavenProject::new("core", "org.example")
        .with_artifact(|a| a.with_name("a").exclude_extension("zip"));
    let r = project.artifact_refs().next().unwrap();
    assert_eq!(r.project().name(), Some("core"));
    assert_eq!(r.name(), Some("a"));
    assert!(r.excluded_extensions().contains("zip"));
    assert!(r.excluded_classifiers().is_empty());
}
