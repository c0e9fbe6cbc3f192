//! Operation: scaffold a `Publishing.toml`.

use std::path::{Path, PathBuf};

use pubcfg_core::properties::quote_basic;
use pubcfg_core::SETTINGS_FILE_NAME;
use pubcfg_util::errors::{PublishingError, PublishingResult};

/// Default version written into a new `Publishing.toml`.
pub const DEFAULT_INIT_VERSION: &str = "0.1.0-SNAPSHOT";

/// Default group written into a new `Publishing.toml`.
pub const DEFAULT_INIT_GROUP: &str = "org.example";

pub struct InitOptions {
    pub group: String,
    pub version: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            group: DEFAULT_INIT_GROUP.to_string(),
            version: DEFAULT_INIT_VERSION.to_string(),
        }
    }
}

/// Write a starter `Publishing.toml` into `dir` and return its path.
///
/// The project and its single artifact are named after the directory.
/// Fails if the file already exists.
pub fn init(dir: &Path, opts: &InitOptions) -> PublishingResult<PathBuf> {
    let path = dir.join(SETTINGS_FILE_NAME);
    if path.exists() {
        return Err(PublishingError::Generic {
            message: format!("{SETTINGS_FILE_NAME} already exists in {}", dir.display()),
        }
        .into());
    }

    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my-project");

    pubcfg_util::fs::write_new(&path, &render(name, opts)).map_err(PublishingError::Io)?;
    tracing::info!("Created {}", path.display());
    Ok(path)
}

fn render(name: &str, opts: &InitOptions) -> String {
    format!(
        r#"# Release publishing configuration.
# Values may reference environment variables, resolved from .publishing.env first.

version = {version}
branch = "master"
create-signatures = true
sign-jars = false
pack-jars = false
fail-on-inconsistent-jars = false

[maven-upload-repository]
name = "Maven"
staging-url = {staging}
snapshot-url = {snapshot}

[[project]]
name = {name}
group = {group}
artifacts = [{artifact}]
"#,
        version = quote_basic(&opts.version),
        group = quote_basic(&opts.group),
        name = quote_basic(name),
        artifact = quote_basic(&format!("{}.{}", opts.group, name.replace('-', "."))),
        staging = quote_basic(pubcfg_core::upload_repository::DEFAULT_STAGING_URL),
        snapshot = quote_basic(pubcfg_core::upload_repository::DEFAULT_SNAPSHOT_URL),
    )
}
