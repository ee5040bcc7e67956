//! Flat configuration input for the naming-style engine
//!
//! The engine does not read editorconfig trees itself: it consumes one
//! already-merged, case-insensitive key/value view. This module provides
//! that view ([`ConfigMap`]) plus a small loader for a single merged file.

mod loader;
mod map;

// Re-export main types
pub use loader::{load_config_file, parse_config_text};
pub use map::ConfigMap;
