use pubcfg_core::settings::{PublishingSettings, DEFAULT_BRANCH};
use pubcfg_core::upload_repository::{DEFAULT_SNAPSHOT_URL, DEFAULT_STAGING_URL};
use std::path::Path;

const FULL_TOML: &str = r#"
version = "2.3.1-SNAPSHOT"
branch = "main"
create-signatures = false
sign-jars = true
pack-jars = true
fail-on-inconsistent-jars = true
user-maven-settings = "/home/dev/.m2/settings.xml"
global-maven-settings = "/opt/maven/conf/settings.xml"
maven-security-file = "/home/dev/.m2/settings-security.xml"

[maven-upload-repository]
name = "Nexus"
staging-url = "https://nexus.example.org/staging"
snapshot-url = "https://nexus.example.org/snapshots"

[[project]]
name = "core"
group = "org.example"
artifacts = [
    "org.example.core",
    { name = "org.example.extras", group = "org.example.ext", exclude-classifiers = ["javadoc", "javadoc"], exclude-extensions = ["zip"] },
]

[[project]]
name = "tools"
group = "org.example.tools"
artifacts = ["org.example.tools.cli"]

[[p2-repository]]
name = "updates"
group = "org.example.p2"
url = "https://download.example.org/updates"
deploy-path = "releases/2.3"
namespaces = ["org.example", "org.example.tools"]
reference-feature = "org.example.feature"
accepted-differing-jars = ["org.example.legacy"]
"#;

#[test]
fn test_parse_empty_uses_defaults() {
    let settings = PublishingSettings::parse_toml("").unwrap();
    assert_eq!(settings.version(), None);
    assert_eq!(settings.branch(), DEFAULT_BRANCH);
    assert_eq!(settings.branch(), "master");
    assert!(settings.create_signatures());
    assert!(!settings.sign_jars());
    assert!(!settings.pack_jars());
    assert!(!settings.fail_on_inconsistent_jars());
    assert_eq!(settings.upload_repository().name(), "Maven");
    assert_eq!(settings.upload_repository().staging_url(), DEFAULT_STAGING_URL);
    assert_eq!(
        settings.upload_repository().snapshot_url(),
        DEFAULT_SNAPSHOT_URL
    );
    assert!(settings.projects().is_empty());
    assert!(settings.p2_repositories().is_empty());
    assert!(settings
        .user_maven_settings()
        .ends_with(".m2/settings.xml"));
    assert!(settings
        .maven_security_file()
        .ends_with(".m2/settings-security.xml"));
}

#[test]
fn test_parse_full() {
    let settings = PublishingSettings::parse_toml(FULL_TOML).unwrap();
    assert_eq!(settings.version(), Some("2.3.1-SNAPSHOT"));
    assert_eq!(settings.base_version().unwrap(), "2.3.1");
    assert!(settings.is_snapshot().unwrap());
    assert_eq!(settings.branch(), "main");
    assert!(!settings.create_signatures());
    assert!(settings.sign_jars());
    assert!(settings.pack_jars());
    assert!(settings.fail_on_inconsistent_jars());
    assert_eq!(
        settings.user_maven_settings(),
        Path::new("/home/dev/.m2/settings.xml")
    );
    assert_eq!(
        settings.global_maven_settings(),
        Some(Path::new("/opt/maven/conf/settings.xml"))
    );
    assert_eq!(
        settings.maven_security_file(),
        Path::new("/home/dev/.m2/settings-security.xml")
    );
    assert_eq!(settings.upload_repository().name(), "Nexus");
    assert_eq!(
        settings.upload_repository().staging_url(),
        "https://nexus.example.org/staging"
    );
}

#[test]
fn test_parse_projects_and_artifacts() {
    let settings = PublishingSettings::parse_toml(FULL_TOML).unwrap();
    assert_eq!(settings.projects().len(), 2);

    let core = &settings.projects()[0];
    assert_eq!(core.name(), Some("core"));
    assert_eq!(core.artifacts().len(), 2);

    let plain = &core.artifacts()[0];
    assert_eq!(plain.name(), Some("org.example.core"));
    assert_eq!(plain.effective_group(core), Some("org.example"));

    let extras = &core.artifacts()[1];
    assert_eq!(extras.effective_group(core), Some("org.example.ext"));
    assert_eq!(extras.excluded_classifiers().len(), 1);
    assert!(extras.is_extension_excluded("zip"));

    let all: Vec<_> = settings.artifacts().map(|a| (a.name(), a.group())).collect();
    assert_eq!(
        all,
        vec![
            (Some("org.example.core"), Some("org.example")),
            (Some("org.example.extras"), Some("org.example.ext")),
            (Some("org.example.tools.cli"), Some("org.example.tools")),
        ]
    );
}

#[test]
fn test_parse_p2_repository() {
    let settings = PublishingSettings::parse_toml(FULL_TOML).unwrap();
    let p2 = &settings.p2_repositories()[0];
    assert_eq!(p2.name(), Some("updates"));
    assert_eq!(p2.group(), Some("org.example.p2"));
    assert_eq!(p2.url(), Some("https://download.example.org/updates"));
    assert_eq!(p2.deploy_path(), Some("releases/2.3"));
    assert_eq!(p2.namespaces(), ["org.example", "org.example.tools"]);
    assert_eq!(p2.reference_feature(), Some("org.example.feature"));
    assert_eq!(p2.accepted_differing_jars(), ["org.example.legacy"]);
}

#[test]
fn test_partial_upload_repository_keeps_other_defaults() {
    let settings = PublishingSettings::parse_toml(
        r#"
[maven-upload-repository]
name = "Internal"
"#,
    )
    .unwrap();
    assert_eq!(settings.upload_repository().name(), "Internal");
    assert_eq!(settings.upload_repository().staging_url(), DEFAULT_STAGING_URL);
}

#[test]
fn test_string_boolean_is_rejected() {
    let err = PublishingSettings::parse_toml(r#"sign-jars = "true""#).unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = PublishingSettings::parse_toml("version = ").unwrap_err();
    assert!(
        err.to_string().contains("Failed to parse Publishing.toml"),
        "got: {err}"
    );
}

#[test]
fn test_unset_version_base_version_fails() {
    let settings = PublishingSettings::parse_toml("branch = \"main\"").unwrap();
    let err = settings.base_version().unwrap_err();
    assert!(
        err.to_string().contains("Configuration incomplete"),
        "got: {err}"
    );
}

#[test]
fn test_unknown_root_key_is_rejected() {
    let err = PublishingSettings::parse_toml("signJars = true").unwrap_err();
    assert!(err.to_string().contains("unknown field"), "got: {err}");
}

#[test]
fn test_misspelled_project_table_is_rejected() {
    let err = PublishingSettings::parse_toml("[[projects]]\nname = \"core\"").unwrap_err();
    assert!(err.to_string().contains("unknown field"), "got: {err}");
}

#[test]
fn test_unknown_artifact_key_is_rejected() {
    let err = PublishingSettings::parse_toml(
        r#"
[[project]]
name = "core"
artifacts = [{ name = "a", exclude-classifier = ["javadoc"] }]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("exclude-classifier"), "got: {err}");
}

#[test]
fn test_unknown_upload_repository_key_is_rejected() {
    let err = PublishingSettings::parse_toml("[maven-upload-repository]\nstagingUrl = \"x\"")
        .unwrap_err();
    assert!(err.to_string().contains("stagingUrl"), "got: {err}");
}

#[test]
fn test_unknown_p2_repository_key_is_rejected() {
    let err = PublishingSettings::parse_toml("[[p2-repository]]\nname = \"u\"\nnamespace = [\"a\"]")
        .unwrap_err();
    assert!(err.to_string().contains("unknown field"), "got: {err}");
}
