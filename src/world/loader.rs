use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::model::RoomGraph;
use super::validator::{MapError, validate};

///////////////////
/// MAP STRUCTS ///
///////////////////

/// Map document as decoded, before any checks. Required keys are `Option`
/// so that their absence is reported by the validator, not the decoder.
#[derive(Debug, Default, Deserialize)]
pub struct MapSource {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub rooms: Option<Vec<RoomSource>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomSource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub exits: Option<BTreeMap<String, String>>, // direction -> room name
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MapFormat {
    Json,
    Toml,
}

impl MapFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => MapFormat::Toml,
            _ => MapFormat::Json,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read map file '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid JSON in map file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML in map file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Map(#[from] MapError),
}

////////////////////////////
/// MAP LOADER FUNCTIONS ///
////////////////////////////

/// Public API: load and validate a map file from disk. `None` infers the format from the extension.
pub fn load_map_from_file(path: &Path, format: Option<MapFormat>) -> Result<RoomGraph, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = format.unwrap_or_else(|| MapFormat::from_path(path));

    let graph = load_map_from_str(&contents, format).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "map rejected");
    })?;

    info!(path = %path.display(), rooms = graph.len(), "map loaded");
    Ok(graph)
}

/// Public API: decode and validate an in-memory map source.
pub fn load_map_from_str(contents: &str, format: MapFormat) -> Result<RoomGraph, LoadError> {
    let source: MapSource = match format {
        MapFormat::Json => serde_json::from_str(contents)?,
        MapFormat::Toml => toml::from_str(contents)?,
    };

    Ok(validate(source)?)
}

pub(super) fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                // Wrapped line: single newline in the source → space
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);

        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomName;

    const TOML_MAP: &str = r#"
start = "Porch"

[[rooms]]
name = "Porch"
desc = """
A creaking porch.
Paint flakes from the rails.
"""
exits = { in = "Parlor" }

[[rooms]]
name = "Parlor"
items = ["candle"]

[rooms.exits]
out = "Porch"
"#;

    #[test]
    fn format_follows_extension() {
        assert_eq!(MapFormat::from_path(Path::new("m.toml")), MapFormat::Toml);
        assert_eq!(MapFormat::from_path(Path::new("m.TOML")), MapFormat::Toml);
        assert_eq!(MapFormat::from_path(Path::new("m.json")), MapFormat::Json);
        assert_eq!(MapFormat::from_path(Path::new("map")), MapFormat::Json);
    }

    #[test]
    fn loads_toml_map() {
        let graph = load_map_from_str(TOML_MAP, MapFormat::Toml).unwrap();
        let porch = graph.room(graph.start()).unwrap();

        assert_eq!(porch.desc, "A creaking porch. Paint flakes from the rails.");
        assert_eq!(porch.exit("in").unwrap().target, "Parlor");
        let parlor = graph.room(&RoomName::normalize("Parlor")).unwrap();
        assert_eq!(parlor.items, vec!["candle"]);
        assert_eq!(parlor.desc, "");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = load_map_from_str("{ \"start\": ", MapFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn wrong_value_type_is_a_decode_error() {
        let err = load_map_from_str(r#"{ "start": 3, "rooms": [] }"#, MapFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn missing_keys_surface_as_map_errors() {
        let err = load_map_from_str(r#"{ "rooms": [] }"#, MapFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Map(MapError::MissingField { field: "start" })
        ));
        assert_eq!(err.to_string(), "map is missing required key 'start'");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_map_from_file(Path::new("no/such/map.json"), None).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.to_string().matches("no/such/map.json").count(), 1);
    }

    #[test]
    fn multiline_desc_keeps_paragraphs() {
        let raw = "  First line\n  wraps here.\n\n  New line.\n\n\n  New paragraph.  ";
        assert_eq!(
            normalize_multiline_desc(raw),
            "First line wraps here.\nNew line.\n\nNew paragraph."
        );
    }
}
