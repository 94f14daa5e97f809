//! Settings file and environment layer
//!
//! Optional per-user defaults for every invocation flag, read from
//! `{home}/.config/asciifarm/client.toml`:
//!
//! ```toml
//! socket = "inet"
//! address = "farm.example.org:9021"
//! name = "bob"
//! characters = "halfwidth"
//! colours = false
//! reset_style = true
//! ```
//!
//! `ASCIIFARM_*` environment variables override the file; command-line flags
//! override both (applied by the caller).

use super::types::{ColourPreference, ResolveRequest, SocketKind, StyleOptions};
use crate::home;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Settings file error
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Explicitly requested settings file does not exist
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Contents of `client.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub name: Option<String>,
    pub address: Option<String>,
    pub socket: Option<SocketKind>,
    pub keybindings: Option<String>,
    pub characters: Option<String>,
    pub colours: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub reset_style: bool,
    pub blink_bright_background: bool,
}

impl ClientSettings {
    /// Default location of the settings file.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(home::config_dir()?.join("client.toml"))
    }

    /// Request built from these settings alone, with built-in defaults for
    /// anything left unset.
    pub fn to_request(&self) -> ResolveRequest {
        let defaults = ResolveRequest::default();
        ResolveRequest {
            socket_kind: self.socket.unwrap_or(defaults.socket_kind),
            address: self.address.clone(),
            name: self.name.clone(),
            colours: self
                .colours
                .map(ColourPreference::from)
                .unwrap_or(defaults.colours),
            style: StyleOptions {
                reset_style_on_change: self.reset_style,
                blink_bright_background: self.blink_bright_background,
            },
            keybindings: self.keybindings.clone().unwrap_or(defaults.keybindings),
            charmap: self.characters.clone().unwrap_or(defaults.charmap),
            log_file: self.log_file.clone(),
        }
    }
}

/// Load settings from `explicit`, or from the default location.
///
/// An explicit path must exist and parse. The default file is optional: when
/// it is missing, unreadable, or malformed the built-in defaults are used and
/// a warning is logged.
pub fn load_settings(explicit: Option<&Path>) -> Result<ClientSettings, SettingsError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        return load_settings_file(path);
    }

    let path = match ClientSettings::default_path() {
        Ok(p) => p,
        Err(e) => {
            debug!("no home directory for settings: {e}");
            return Ok(ClientSettings::default());
        }
    };
    if !path.exists() {
        return Ok(ClientSettings::default());
    }

    match load_settings_file(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Ignoring settings at {}: {e}", path.display());
            Ok(ClientSettings::default())
        }
    }
}

fn load_settings_file(path: &Path) -> Result<ClientSettings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(settings)
}

/// Apply `ASCIIFARM_*` environment variable overrides to `settings`.
///
/// Empty values are treated as unset. An unrecognised `ASCIIFARM_SOCKET`
/// is ignored with a warning.
pub fn apply_env_overrides(settings: &mut ClientSettings) {
    if let Some(v) = non_empty_var("ASCIIFARM_NAME") {
        settings.name = Some(v);
    }
    if let Some(v) = non_empty_var("ASCIIFARM_ADDRESS") {
        settings.address = Some(v);
    }
    if let Some(v) = non_empty_var("ASCIIFARM_SOCKET") {
        match v.parse::<SocketKind>() {
            Ok(kind) => settings.socket = Some(kind),
            Err(e) => warn!("Ignoring ASCIIFARM_SOCKET: {e}"),
        }
    }
    if let Some(v) = non_empty_var("ASCIIFARM_KEYBINDINGS") {
        settings.keybindings = Some(v);
    }
    if let Some(v) = non_empty_var("ASCIIFARM_CHARACTERS") {
        settings.characters = Some(v);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
