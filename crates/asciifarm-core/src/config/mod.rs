//! Configuration resolution
//!
//! Raw invocation inputs are collected into a [`ResolveRequest`] from these
//! sources, highest priority first:
//! 1. Command-line flags
//! 2. Environment variables (`ASCIIFARM_*`)
//! 3. Settings file (`~/.config/asciifarm/client.toml`)
//! 4. Built-in defaults
//!
//! [`Resolver`] then derives the final [`ResolvedConfig`].

mod error;
mod resolve;
mod settings;
mod types;

pub use error::{ConfigResolutionError, ErrorKind};
pub use resolve::{Resolver, parse_address, resolve_config, resolve_name};
pub use settings::{ClientSettings, SettingsError, apply_env_overrides, load_settings};
pub use types::{
    Address, ColourPreference, ResolveRequest, ResolvedConfig, SocketKind, StyleOptions,
};
