use std::fs;

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE, CliOverrides, Config, WORKSPACE_DIR};
use crate::error::Result;

const GITIGNORE: &str = "\
# Interrupted slot writes
*.json.tmp
";

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the workspace directory or its files cannot be written.
pub fn execute(args: &InitArgs, overrides: &CliOverrides) -> Result<()> {
    let root = std::env::current_dir()?;
    let workspace = root.join(WORKSPACE_DIR);
    fs::create_dir_all(&workspace)?;

    let config_path = workspace.join(CONFIG_FILE);
    if !config_path.exists() || args.force {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let gitignore_path = workspace.join(".gitignore");
    if !gitignore_path.exists() {
        fs::write(gitignore_path, GITIGNORE)?;
    }

    // The data directory may live outside the workspace.
    let config = Config::load(&root, overrides)?;
    fs::create_dir_all(&config.data_dir)?;

    tracing::info!(path = %dunce::simplified(&workspace).display(), "Initialized workspace");
    println!("Initialized issues workspace in {WORKSPACE_DIR}/");
    Ok(())
}
