//! Keybindings: key name to client action.

use super::{LoadError, parse_json, read_json_file};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const DEFAULT_KEYBINDINGS: &str = include_str!("../../assets/keybindings/default.json");

/// Parsed keybinding table, ordered by key for deterministic comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybindings(BTreeMap<String, Value>);

impl Keybindings {
    pub fn action(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Keybindings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub trait KeybindingLoader {
    fn load_keybindings(&self, source: &str) -> Result<Keybindings, LoadError>;
}

/// Loads the built-in `default` table or a JSON file from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonKeybindingLoader;

impl KeybindingLoader for JsonKeybindingLoader {
    fn load_keybindings(&self, source: &str) -> Result<Keybindings, LoadError> {
        if source == "default" {
            debug!("using built-in keybindings");
            return parse_json(DEFAULT_KEYBINDINGS, "built-in keybindings");
        }
        debug!(path = source, "loading keybindings file");
        read_json_file(Path::new(source))
    }
}
