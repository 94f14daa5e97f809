//! Loaders for the client's keybinding and character map sources
//!
//! Both sources are JSON documents. A source string is either one of a small
//! set of built-in names (compiled into the binary) or a path to a file on
//! disk. The resolver only sees the [`CharmapLoader`] and [`KeybindingLoader`]
//! traits, so tests can substitute fixed fixtures.

mod charmap;
mod keybindings;

pub use charmap::{BUILTIN_CHARMAPS, Charmap, CharmapLoader, StandardCharmapLoader};
pub use keybindings::{JsonKeybindingLoader, KeybindingLoader, Keybindings};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a mapping from a named or file source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a valid mapping
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_json(&content, &path.display().to_string())
}

fn parse_json<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}
