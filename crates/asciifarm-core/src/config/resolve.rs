//! Derivation of a [`ResolvedConfig`] from a [`ResolveRequest`].
//!
//! Steps run in a fixed order and the first failure aborts resolution:
//!
//! 1. Load the character map
//! 2. Load the keybindings
//! 3. Build the address (default per socket kind when absent)
//! 4. Decide colours
//! 5. Decide the player name (tilde name when derived on a local socket)

use super::error::ConfigResolutionError;
use super::types::{Address, ResolveRequest, ResolvedConfig, SocketKind};
use crate::identity::{IdentityProvider, SystemIdentity};
use crate::loaders::{CharmapLoader, JsonKeybindingLoader, KeybindingLoader, StandardCharmapLoader};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolves requests against injected loaders and identity source.
pub struct Resolver<'a> {
    charmaps: &'a dyn CharmapLoader,
    keybindings: &'a dyn KeybindingLoader,
    identity: &'a dyn IdentityProvider,
}

impl<'a> Resolver<'a> {
    pub fn new(
        charmaps: &'a dyn CharmapLoader,
        keybindings: &'a dyn KeybindingLoader,
        identity: &'a dyn IdentityProvider,
    ) -> Self {
        Self {
            charmaps,
            keybindings,
            identity,
        }
    }

    /// Resolve `request` into a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failure among: character map loading, keybinding
    /// loading, inet address parsing, account name lookup. Later steps are
    /// not attempted once one fails.
    pub fn resolve(
        &self,
        request: &ResolveRequest,
    ) -> Result<ResolvedConfig, ConfigResolutionError> {
        let charmap = self
            .charmaps
            .load_charmap(&request.charmap)
            .map_err(|cause| {
                warn!(source = %request.charmap, error = %cause, "character map unavailable");
                ConfigResolutionError::CharmapNotFound {
                    source_name: request.charmap.clone(),
                    cause,
                }
            })?;

        let keybindings = self
            .keybindings
            .load_keybindings(&request.keybindings)
            .map_err(|cause| {
                warn!(source = %request.keybindings, error = %cause, "keybindings unavailable");
                ConfigResolutionError::KeybindingsNotFound {
                    source_name: request.keybindings.clone(),
                    cause,
                }
            })?;

        let address = parse_address(request.socket_kind, request.address.as_deref())?;
        debug!(socket = %request.socket_kind, %address, "resolved address");

        let colours = request.colours.colours();

        let name = resolve_name(request.socket_kind, request.name.as_deref(), self.identity)?;
        debug!(%name, colours, "resolved player");

        Ok(ResolvedConfig {
            name,
            socket_kind: request.socket_kind,
            address,
            keybindings,
            charmap,
            colours,
            log_file: request.log_file.clone(),
            style: request.style,
        })
    }
}

/// Resolve with the built-in loaders and the system account name.
pub fn resolve_config(request: &ResolveRequest) -> Result<ResolvedConfig, ConfigResolutionError> {
    Resolver::new(&StandardCharmapLoader, &JsonKeybindingLoader, &SystemIdentity).resolve(request)
}

/// Build the address for `kind` from `input`, or from the kind's default.
///
/// # Errors
///
/// Only inet addresses can fail: a missing `:` or a port that is not a
/// base-10 number in `0..=65535` yields
/// [`ConfigResolutionError::InvalidAddress`].
pub fn parse_address(
    kind: SocketKind,
    input: Option<&str>,
) -> Result<Address, ConfigResolutionError> {
    let raw = input.unwrap_or_else(|| kind.default_address());

    match kind {
        SocketKind::Abstract => {
            let mut bytes = Vec::with_capacity(raw.len() + 1);
            bytes.push(0);
            bytes.extend_from_slice(raw.as_bytes());
            Ok(Address::Abstract(bytes))
        }
        SocketKind::Unix => Ok(Address::Unix(PathBuf::from(raw))),
        SocketKind::Inet => {
            let (host, port) = raw
                .split_once(':')
                .ok_or_else(|| ConfigResolutionError::InvalidAddress {
                    address: raw.to_string(),
                    reason: "expected host:port".to_string(),
                })?;
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigResolutionError::InvalidAddress {
                    address: raw.to_string(),
                    reason: format!("port '{port}' is not a valid port number"),
                })?;
            Ok(Address::Inet {
                host: host.to_string(),
                port,
            })
        }
    }
}

/// Pick the player name: the explicit one verbatim, otherwise the account
/// name, prefixed with `~` on local sockets.
pub fn resolve_name(
    kind: SocketKind,
    explicit: Option<&str>,
    identity: &dyn IdentityProvider,
) -> Result<String, ConfigResolutionError> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }

    let account = identity.account_name()?;
    if kind.uses_tilde_names() {
        Ok(format!("~{account}"))
    } else {
        Ok(account)
    }
}
