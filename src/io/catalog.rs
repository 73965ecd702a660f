//! Tile catalog file loading and parsing
//!
//! Catalogs are plain text, one tile per line:
//!
//! ```text
//! # name = north,east,south,west
//! closed  = none,none,none,none
//! hall_ew = none,door,none,door
//! ```
//!
//! Blank lines and `#` comments are ignored. Names must be unique; exits are
//! `none`, `door`, or `arch`. Entry order becomes catalog order.

use crate::io::error::{LayoutError, Result};
use crate::spatial::tiles::{ExitType, TileCatalog, TileDefinition};
use std::collections::HashSet;
use std::path::Path;

/// Load a tile catalog from a file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - Any line fails to parse (reported with its line number)
/// - The file defines no tiles
pub fn load_catalog(path: &Path, include_mirrors: bool) -> Result<TileCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| LayoutError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;

    parse_catalog(&text, path, include_mirrors)
}

/// Parse catalog text into a built catalog
///
/// `path` is used only for error reporting.
///
/// # Errors
///
/// Returns [`LayoutError::CatalogParse`] for malformed lines and
/// [`LayoutError::InvalidCatalog`] when no tiles are defined.
pub fn parse_catalog(text: &str, path: &Path, include_mirrors: bool) -> Result<TileCatalog> {
    let mut definitions = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        let (name_part, exits_part) = line.split_once('=').ok_or_else(|| {
            parse_error(path, number, "expected `name = north,east,south,west`")
        })?;

        let name = name_part.trim();
        if name.is_empty() {
            return Err(parse_error(path, number, "tile name is empty"));
        }
        if !seen_names.insert(name.to_string()) {
            return Err(parse_error(
                path,
                number,
                &format!("duplicate tile name '{name}'"),
            ));
        }

        let tokens: Vec<&str> = exits_part.split(',').map(str::trim).collect();
        let &[north, east, south, west] = tokens.as_slice() else {
            return Err(parse_error(
                path,
                number,
                &format!(
                    "expected four comma-separated exits, found {}",
                    tokens.len()
                ),
            ));
        };

        definitions.push(TileDefinition::new(
            name,
            parse_exit(north, path, number)?,
            parse_exit(east, path, number)?,
            parse_exit(south, path, number)?,
            parse_exit(west, path, number)?,
        ));
    }

    TileCatalog::build(definitions, include_mirrors)
}

fn parse_exit(token: &str, path: &Path, number: usize) -> Result<ExitType> {
    ExitType::from_token(token).ok_or_else(|| {
        parse_error(
            path,
            number,
            &format!("unknown exit '{token}' (expected none, door, or arch)"),
        )
    })
}

fn parse_error(path: &Path, line: usize, reason: &str) -> LayoutError {
    LayoutError::CatalogParse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
