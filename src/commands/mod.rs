//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;

use ansihtml::Config;

/// Load the config from an explicit path, or the default location.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}
