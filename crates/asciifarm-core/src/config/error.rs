//! Resolution errors

use crate::identity::IdentityError;
use crate::loaders::LoadError;
use thiserror::Error;

/// Why resolution stopped. Every variant is fatal; no partial config exists.
#[derive(Debug, Error)]
pub enum ConfigResolutionError {
    /// Character map source missing or unparsable
    #[error("could not load character map '{source_name}'")]
    CharmapNotFound {
        source_name: String,
        #[source]
        cause: LoadError,
    },

    /// Keybinding source missing or unparsable
    #[error("could not load keybindings '{source_name}'")]
    KeybindingsNotFound {
        source_name: String,
        #[source]
        cause: LoadError,
    },

    /// Malformed `host:port` string
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// No name given and no account name available to derive one
    #[error("no player name given and none could be derived")]
    IdentityUnavailable(#[from] IdentityError),
}

/// Fieldless discriminant of [`ConfigResolutionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CharmapNotFound,
    KeybindingsNotFound,
    InvalidAddress,
    IdentityUnavailable,
}

impl ConfigResolutionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigResolutionError::CharmapNotFound { .. } => ErrorKind::CharmapNotFound,
            ConfigResolutionError::KeybindingsNotFound { .. } => ErrorKind::KeybindingsNotFound,
            ConfigResolutionError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            ConfigResolutionError::IdentityUnavailable(_) => ErrorKind::IdentityUnavailable,
        }
    }
}
