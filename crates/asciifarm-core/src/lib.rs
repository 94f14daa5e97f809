//! Core library for the asciifarm terminal client
//!
//! Turns the loosely specified invocation parameters of the client (socket
//! kind, optional address and player name, colour and style flags, keybinding
//! and character map sources) into one fully specified [`ResolvedConfig`]
//! that the connection and rendering layers can consume directly.
//!
//! The entry point is [`config::Resolver`], or [`config::resolve_config`] for
//! the standard collaborators.

pub mod config;
pub mod home;
pub mod identity;
pub mod loaders;
pub mod logging;

pub use config::{
    Address, ColourPreference, ConfigResolutionError, ResolveRequest, ResolvedConfig, Resolver,
    SocketKind, StyleOptions,
};
pub use loaders::{Charmap, Keybindings};
