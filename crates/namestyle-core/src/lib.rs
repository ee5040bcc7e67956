//! Namestyle Core
//!
//! Engine for turning flat editorconfig-style configuration entries into
//! naming rules: symbol-matching specifications, naming templates, and
//! severity annotations, deterministically ordered so the first matching
//! rule for a symbol wins regardless of configuration file position.

pub mod config;
pub mod error;
pub mod naming;
pub mod result;

// Re-export commonly used types
pub use config::{ConfigMap, load_config_file, parse_config_text};
pub use error::{ErrorKind, NamestyleError};
pub use naming::{
    Accessibility, Capitalization, Language, MethodKind, Modifier, NamingRule, NamingStyle,
    NamingStylePreferences, Severity, SpecId, StyleId, SymbolDescriptor, SymbolKind,
    SymbolMatchKind, SymbolSpecification, TypeKind, accessibility_list_to_editorconfig_string,
    kind_list_to_editorconfig_string, modifier_list_to_editorconfig_string,
    parse_accessibility_list, parse_kind_list, parse_modifier_list,
};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("namestyle_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
