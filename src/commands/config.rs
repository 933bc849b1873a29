//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use ansihtml::Config;

use super::{load_config, resolve_config_path};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the default config file lives.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Write a default config file.
///
/// Refuses to replace an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_config_path(config_path)?;
    Config::default()
        .save_to(&path, force)
        .with_context(|| format!("Could not initialise config at {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
