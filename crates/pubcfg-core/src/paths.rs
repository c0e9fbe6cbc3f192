//! Default locations of the Maven settings and settings-security files.

use std::path::{Path, PathBuf};

/// Returns the invoking user's home directory (`$HOME`, then `$USERPROFILE`).
pub fn user_home() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

/// The Maven installation directory from `$M2_HOME`, if set.
pub fn maven_home() -> Option<PathBuf> {
    std::env::var_os("M2_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// File locations Maven reads credentials and mirrors from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenSettingsPaths {
    pub user_settings: PathBuf,
    pub global_settings: Option<PathBuf>,
    pub security_file: PathBuf,
}

impl MavenSettingsPaths {
    /// Defaults derived from the current process environment.
    pub fn from_env() -> Self {
        Self::resolve(&user_home(), maven_home().as_deref())
    }

    /// Defaults for an explicit home directory and optional Maven installation.
    pub fn resolve(home: &Path, maven_home: Option<&Path>) -> Self {
        let m2 = home.join(".m2");
        Self {
            user_settings: m2.join("settings.xml"),
            global_settings: maven_home.map(|m| m.join("conf").join("settings.xml")),
            security_file: m2.join("settings-security.xml"),
        }
    }
}

pub(crate) fn default_user_settings() -> PathBuf {
    MavenSettingsPaths::from_env().user_settings
}

pub(crate) fn default_global_settings() -> Option<PathBuf> {
    MavenSettingsPaths::from_env().global_settings
}

pub(crate) fn default_security_file() -> PathBuf {
    MavenSettingsPaths::from_env().security_file
}
