use std::path::Path;

use miette::Result;

use pubcfg_core::settings::PublishingSettings;
use pubcfg_util::progress::status_info;

use crate::cli::PlanFormat;

pub fn exec(file: Option<&Path>, format: PlanFormat) -> Result<()> {
    let path = pubcfg_ops::locate_settings(&super::current_dir()?, file)?;
    status_info("Planning", &path.display().to_string());
    let settings = PublishingSettings::from_path(&path)?;
    let plan = pubcfg_ops::ops_plan::build_plan(&settings)?;

    match format {
        PlanFormat::Text => print!("{}", plan.render_text()),
        PlanFormat::Json => println!("{}", plan.to_json()?),
    }

    Ok(())
}
