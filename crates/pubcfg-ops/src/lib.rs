pub mod ops_check;
pub mod ops_init;
pub mod ops_plan;

use std::path::{Path, PathBuf};

use pubcfg_core::SETTINGS_FILE_NAME;
use pubcfg_util::errors::{PublishingError, PublishingResult};
use pubcfg_util::fs::find_ancestor_with;

/// Resolve the `Publishing.toml` to operate on.
///
/// An explicit path wins; otherwise `start` and its ancestors are searched.
pub fn locate_settings(start: &Path, explicit: Option<&Path>) -> PublishingResult<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            start.join(path)
        };
        if !path.is_file() {
            return Err(PublishingError::Config {
                message: format!("{} does not exist", path.display()),
            }
            .into());
        }
        return Ok(path);
    }

    let root = find_ancestor_with(start, SETTINGS_FILE_NAME).ok_or_else(|| {
        PublishingError::Config {
            message: format!(
                "Could not find {SETTINGS_FILE_NAME} in this directory or any parent"
            ),
        }
    })?;
    let path = root.join(SETTINGS_FILE_NAME);
    tracing::debug!("Using {}", path.display());
    Ok(path)
}
