use pubcfg_core::paths::MavenSettingsPaths;
use std::path::{Path, PathBuf};

#[test]
fn test_resolve_under_home() {
    let paths = MavenSettingsPaths::resolve(Path::new("/home/dev"), None);
    assert_eq!(
        paths.user_settings,
        PathBuf::from("/home/dev/.m2/settings.xml")
    );
    assert_eq!(
        paths.security_file,
        PathBuf::from("/home/dev/.m2/settings-security.xml")
    );
    assert_eq!(paths.global_settings, None);
}

#[test]
fn test_resolve_with_maven_home() {
    let paths = MavenSettingsPaths::resolve(Path::new("/home/dev"), Some(Path::new("/opt/maven")));
    assert_eq!(
        paths.global_settings,
        Some(PathBuf::from("/opt/maven/conf/settings.xml"))
    );
}

#[test]
fn test_from_env_user_settings_end_with_m2() {
    let paths = MavenSettingsPaths::from_env();
    assert!(paths.user_settings.ends_with(".m2/settings.xml"));
    assert!(paths.security_file.ends_with(".m2/settings-security.xml"));
}
