use std::path::Path;

use miette::Result;

use pubcfg_util::progress::{status, status_warn};

pub fn exec(file: Option<&Path>) -> Result<()> {
    let path = pubcfg_ops::locate_settings(&super::current_dir()?, file)?;
    status("Checking", &path.display().to_string());

    let summary = pubcfg_ops::ops_check::check(&path)?;
    for warning in &summary.warnings {
        status_warn("Warning", warning);
    }

    println!("version:           {}", summary.version);
    println!("base version:      {}", summary.base_version);
    println!("branch:            {}", summary.branch);
    println!("upload repository: {}", summary.upload_repository);
    println!(
        "{} project(s), {} artifact(s), {} P2 repositories",
        summary.projects, summary.artifacts, summary.p2_repositories
    );
    status("Finished", "configuration is complete");

    Ok(())
}
