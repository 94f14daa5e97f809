//! Character maps: entity name to on-screen glyph.

use super::{LoadError, parse_json, read_json_file};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const FULLWIDTH: &str = include_str!("../../assets/charmaps/fullwidth.json");
const HALFWIDTH: &str = include_str!("../../assets/charmaps/halfwidth.json");
const EMOJI: &str = include_str!("../../assets/charmaps/emoji.json");

/// Names that resolve to a compiled-in character map instead of a file.
pub const BUILTIN_CHARMAPS: [&str; 4] = ["default", "fullwidth", "halfwidth", "emoji"];

fn builtin_source(name: &str) -> Option<&'static str> {
    match name {
        "default" | "fullwidth" => Some(FULLWIDTH),
        "halfwidth" => Some(HALFWIDTH),
        "emoji" => Some(EMOJI),
        _ => None,
    }
}

/// A parsed character map.
///
/// Glyph values are kept as raw JSON: the renderer decides how to interpret
/// plain strings versus `[glyph, fg, bg]` triples. Top-level keys other than
/// `mapping` and `default` are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Charmap {
    /// Glyph per entity sprite name
    #[serde(default)]
    pub mapping: BTreeMap<String, Value>,
    /// Glyph for sprites missing from `mapping`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Renderer-specific settings (`charwidth`, `writable`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Charmap {
    /// Glyph for `sprite`, falling back to the map's default glyph.
    pub fn glyph(&self, sprite: &str) -> Option<&Value> {
        self.mapping.get(sprite).or(self.default.as_ref())
    }
}

pub trait CharmapLoader {
    fn load_charmap(&self, source: &str) -> Result<Charmap, LoadError>;
}

/// Loads built-in character maps by name and anything else from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCharmapLoader;

impl CharmapLoader for StandardCharmapLoader {
    fn load_charmap(&self, source: &str) -> Result<Charmap, LoadError> {
        if let Some(content) = builtin_source(source) {
            debug!(charmap = source, "using built-in character map");
            return parse_json(content, &format!("built-in charmap '{source}'"));
        }
        debug!(path = source, "loading character map file");
        read_json_file(Path::new(source))
    }
}
