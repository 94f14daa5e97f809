//! Home directory resolution for the asciifarm client
//!
//! All lookups of per-user files (currently only the settings file) go
//! through [`get_home_dir`] so that tests and custom deployments can redirect
//! them with the `ASCIIFARM_HOME` environment variable.
//!
//! # Precedence
//!
//! 1. `ASCIIFARM_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the home directory used for per-user client files.
///
/// # Errors
///
/// Returns an error if `ASCIIFARM_HOME` is unset or blank and the platform
/// home directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("ASCIIFARM_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}

/// Directory holding the client's own configuration files.
pub fn config_dir() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(".config/asciifarm"))
}
