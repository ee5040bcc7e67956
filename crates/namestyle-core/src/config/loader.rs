//! Reading an already-merged editorconfig-style file into a [`ConfigMap`]
//!
//! The engine consumes a single flat key/value view. Section discovery and
//! merging across directory hierarchies happen upstream; a section header
//! that still appears in the input is skipped as carrying no key/value
//! content of its own.

use super::map::ConfigMap;
use crate::error::NamestyleError;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// Parse merged editorconfig-style text into a flat map.
///
/// Recognizes `key = value` lines with surrounding whitespace trimmed.
/// Blank lines, `#`/`;` comment lines, and `[section]` headers are skipped;
/// any other line is ignored with a debug log rather than failing the load.
pub fn parse_config_text(text: &str) -> ConfigMap {
    let mut map = ConfigMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => map.insert(key.trim(), value.trim()),
            None => {
                tracing::debug!("Skipping unrecognized config line {}: {raw}", index + 1);
            }
        }
    }

    map
}

/// Load a merged configuration file from disk
pub fn load_config_file(path: &Path) -> Result<ConfigMap> {
    let text =
        fs::read_to_string(path).map_err(|source| NamestyleError::io_error(path, source))?;
    Ok(parse_config_text(&text))
}
