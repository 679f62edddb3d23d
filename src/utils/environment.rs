use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable selecting the site root directory
pub const SITE_ROOT_VAR: &str = "SITE_ROOT";

/// Get the site root: `$SITE_ROOT` if set and non-empty, else the working directory
pub fn get_site_root() -> Result<PathBuf> {
    match env::var_os(SITE_ROOT_VAR) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => env::current_dir().context("Failed to resolve current directory"),
    }
}
