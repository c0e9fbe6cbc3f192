use std::path::Path;

use miette::Result;

use pubcfg_core::settings::PublishingSettings;
use pubcfg_core::version::VersionPolicy;

pub fn exec(file: Option<&Path>, version: Option<&str>) -> Result<()> {
    let base = match version {
        Some(v) => VersionPolicy::new(v).base_version()?,
        None => {
            let path = pubcfg_ops::locate_settings(&super::current_dir()?, file)?;
            PublishingSettings::from_path(&path)?.base_version()?
        }
    };
    println!("{base}");
    Ok(())
}
