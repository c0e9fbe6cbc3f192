use miette::Result;

use pubcfg_ops::ops_init::{self, InitOptions};
use pubcfg_util::progress::status;

pub fn exec(group: String, version: String) -> Result<()> {
    let cwd = super::current_dir()?;
    let path = ops_init::init(&cwd, &InitOptions { group, version })?;
    status("Created", &path.display().to_string());
    Ok(())
}
