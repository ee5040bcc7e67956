//! Symbol-matching specifications parsed from `dotnet_naming_symbols` groups

use super::kinds::{
    Accessibility, Language, Modifier, SymbolMatchKind, accessibility_list_to_editorconfig_string,
    kind_list_to_editorconfig_string, modifier_list_to_editorconfig_string,
    parse_accessibility_list, parse_kind_list, parse_modifier_list,
};
use crate::config::ConfigMap;
use serde::{Deserialize, Serialize};

/// Arena handle referencing a [`SymbolSpecification`].
///
/// Handles are assigned per parse pass; re-parsing identical text yields
/// fresh handles, so they are only meaningful against the spec list produced
/// by the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecId(pub u32);

/// Which symbols a naming rule applies to: kind, accessibility, and
/// required-modifier axes.
///
/// An empty kind or accessibility axis matches no symbol; an empty
/// required-modifier axis requires nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSpecification {
    pub id: SpecId,
    /// The `dotnet_naming_symbols` group name this was parsed from
    pub name: String,
    pub applicable_kinds: Vec<SymbolMatchKind>,
    pub applicable_accessibilities: Vec<Accessibility>,
    pub required_modifiers: Vec<Modifier>,
}

/// A symbol's kind, accessibility, and declared modifiers, as supplied by a
/// host for matching against specifications
#[derive(Debug, Clone)]
pub struct SymbolDescriptor {
    pub kind: SymbolMatchKind,
    pub accessibility: Accessibility,
    pub modifiers: Vec<Modifier>,
}

impl SymbolDescriptor {
    pub fn new(
        kind: SymbolMatchKind,
        accessibility: Accessibility,
        modifiers: Vec<Modifier>,
    ) -> Self {
        Self {
            kind,
            accessibility,
            modifiers,
        }
    }
}

impl SymbolSpecification {
    /// Parse the `dotnet_naming_symbols.<group_name>.*` entries for a group.
    /// Absent entries leave the corresponding axis empty.
    pub fn from_config(id: SpecId, group_name: &str, config: &ConfigMap) -> Self {
        let kinds = config.get(&format!(
            "dotnet_naming_symbols.{group_name}.applicable_kinds"
        ));
        let accessibilities = config.get(&format!(
            "dotnet_naming_symbols.{group_name}.applicable_accessibilities"
        ));
        let modifiers = config.get(&format!(
            "dotnet_naming_symbols.{group_name}.required_modifiers"
        ));

        Self {
            id,
            name: group_name.to_string(),
            applicable_kinds: parse_kind_list(kinds),
            applicable_accessibilities: parse_accessibility_list(accessibilities),
            required_modifiers: parse_modifier_list(modifiers),
        }
    }

    /// Whether this specification fully matches a described symbol:
    /// kind, accessibility, and every required modifier (with `const`
    /// satisfying `static` and `readonly`)
    pub fn applies_to(&self, symbol: &SymbolDescriptor) -> bool {
        self.applicable_kinds.contains(&symbol.kind)
            && self
                .applicable_accessibilities
                .contains(&symbol.accessibility)
            && self
                .required_modifiers
                .iter()
                .all(|modifier| modifier.satisfied_by(&symbol.modifiers))
    }

    /// Serialize the kind axis back to its editorconfig value
    pub fn kinds_to_editorconfig_string(&self) -> String {
        kind_list_to_editorconfig_string(&self.applicable_kinds)
    }

    /// Serialize the accessibility axis back to its editorconfig value
    pub fn accessibilities_to_editorconfig_string(&self, language: Language) -> String {
        accessibility_list_to_editorconfig_string(&self.applicable_accessibilities, language)
    }

    /// Serialize the required-modifier axis back to its editorconfig value
    pub fn modifiers_to_editorconfig_string(&self, language: Language) -> String {
        modifier_list_to_editorconfig_string(&self.required_modifiers, language)
    }
}
