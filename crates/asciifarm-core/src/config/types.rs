//! Configuration types

use crate::loaders::{Charmap, Keybindings};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Kind of socket used to reach the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketKind {
    /// Abstract unix domain socket (name in the abstract namespace)
    #[default]
    Abstract,
    /// Unix domain socket bound to a filesystem path
    Unix,
    /// TCP socket
    Inet,
}

impl SocketKind {
    pub const ALL: [SocketKind; 3] = [SocketKind::Abstract, SocketKind::Unix, SocketKind::Inet];

    /// Address used when none is given for this kind.
    pub fn default_address(self) -> &'static str {
        match self {
            SocketKind::Abstract => "rustifarm",
            SocketKind::Unix => "asciifarm.socket",
            SocketKind::Inet => "localhost:9021",
        }
    }

    /// Whether an auto-derived player name gets the `~` marker.
    pub fn uses_tilde_names(self) -> bool {
        matches!(self, SocketKind::Abstract | SocketKind::Unix)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SocketKind::Abstract => "abstract",
            SocketKind::Unix => "unix",
            SocketKind::Inet => "inet",
        }
    }
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocketKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocketKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown socket kind '{s}' (expected abstract, unix or inet)"))
    }
}

/// Server address, shaped by the socket kind it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// NUL byte followed by the socket name
    Abstract(Vec<u8>),
    /// Socket file path, as given
    Unix(PathBuf),
    /// Host name and TCP port
    Inet { host: String, port: u16 },
}

impl Address {
    pub fn socket_kind(&self) -> SocketKind {
        match self {
            Address::Abstract(_) => SocketKind::Abstract,
            Address::Unix(_) => SocketKind::Unix,
            Address::Inet { .. } => SocketKind::Inet,
        }
    }
}

impl fmt::Display for Address {
    /// Abstract names are shown with a leading `@`, as `ss` and `netstat` do.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Abstract(bytes) => {
                let name = bytes.strip_prefix(b"\0").unwrap_or(bytes.as_slice());
                write!(f, "@{}", String::from_utf8_lossy(name))
            }
            Address::Unix(path) => write!(f, "{}", path.display()),
            Address::Inet { host, port } => write!(f, "{host}:{port}"),
        }
    }
}

/// Colour preference from the mutually exclusive colour flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourPreference {
    /// Neither flag given
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl ColourPreference {
    /// Colours are on unless explicitly disabled.
    pub fn colours(self) -> bool {
        !matches!(self, ColourPreference::Disabled)
    }
}

impl From<bool> for ColourPreference {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColourPreference::Enabled
        } else {
            ColourPreference::Disabled
        }
    }
}

/// Terminal style workarounds, handed to the renderer unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Reset all attributes whenever the style changes
    pub reset_style_on_change: bool,
    /// Use the blink attribute to get bright backgrounds
    pub blink_bright_background: bool,
}

/// Raw, partially specified invocation inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub socket_kind: SocketKind,
    /// Name (abstract), path (unix) or `host:port` (inet)
    pub address: Option<String>,
    pub name: Option<String>,
    pub colours: ColourPreference,
    pub style: StyleOptions,
    /// Keybinding source: `default` or a JSON file path
    pub keybindings: String,
    /// Character map source: a built-in name or a JSON file path
    pub charmap: String,
    pub log_file: Option<PathBuf>,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self {
            socket_kind: SocketKind::default(),
            address: None,
            name: None,
            colours: ColourPreference::Unset,
            style: StyleOptions::default(),
            keybindings: "default".to_string(),
            charmap: "default".to_string(),
            log_file: None,
        }
    }
}

/// Fully specified client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Player name, explicit or derived from the account name
    pub name: String,
    pub socket_kind: SocketKind,
    /// Always matches `socket_kind`
    pub address: Address,
    pub keybindings: Keybindings,
    pub charmap: Charmap,
    pub colours: bool,
    /// File that receives all game messages
    pub log_file: Option<PathBuf>,
    pub style: StyleOptions,
}
