//! Naming-style rule engine
//!
//! Turns `dotnet_naming_rule`, `dotnet_naming_symbols`, and
//! `dotnet_naming_style` entries from a flat configuration view into
//! symbol-matching specifications, naming templates, and severity-annotated
//! rules, deterministically ordered for first-match application.

mod kinds;
mod ordering;
mod preferences;
mod rule;
mod style;
mod symbol_spec;

// Re-export main types
pub use kinds::{
    ALL_ACCESSIBILITIES, ALL_MATCH_KINDS, ALL_MODIFIERS, Accessibility, Language, MethodKind,
    Modifier, SymbolKind, SymbolMatchKind, TypeKind, accessibility_list_to_editorconfig_string,
    kind_list_to_editorconfig_string, modifier_list_to_editorconfig_string,
    parse_accessibility_list, parse_kind_list, parse_modifier_list,
};
pub use preferences::NamingStylePreferences;
pub use rule::{NamingRule, Severity};
pub use style::{Capitalization, NamingStyle, StyleId};
pub use symbol_spec::{SpecId, SymbolDescriptor, SymbolSpecification};
