use std::path::Path;

use miette::Result;

use pubcfg_core::properties::load_env_file;
use pubcfg_core::ENV_FILE_NAME;

pub fn exec(file: Option<&Path>, reveal: bool) -> Result<()> {
    let settings_path = pubcfg_ops::locate_settings(&super::current_dir()?, file)?;
    let dir = settings_path.parent().unwrap_or(Path::new("."));
    let env_path = dir.join(ENV_FILE_NAME);

    let env_vars = load_env_file(&env_path)?;

    if env_vars.is_empty() {
        println!("No environment variables configured.");
        println!("  {ENV_FILE_NAME}: {}", env_path.display());
        return Ok(());
    }

    println!("{ENV_FILE_NAME} ({} entries):", env_vars.len());
    for (key, value) in &env_vars {
        let display_value = if reveal { value.as_str() } else { "********" };
        println!("  {} = {}", key, display_value);
    }

    Ok(())
}
