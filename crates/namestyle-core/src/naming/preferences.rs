//! Assembling ordered naming-style preferences from a configuration map

use super::ordering;
use super::rule::{NamingRule, Severity};
use super::style::{NamingStyle, StyleId};
use super::symbol_spec::{SpecId, SymbolDescriptor, SymbolSpecification};
use crate::config::ConfigMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering as CmpOrdering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Parsed naming-style preferences: parallel specification and style lists
/// plus rules in final applied order. The first rule matching a symbol wins.
///
/// Rule handles resolve by construction against the parallel lists; the
/// lists may also hold specifications and styles whose every referencing
/// rule was excluded or lost deduplication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingStylePreferences {
    pub symbol_specifications: Vec<SymbolSpecification>,
    pub naming_styles: Vec<NamingStyle>,
    pub rules: Vec<NamingRule>,
}

impl NamingStylePreferences {
    /// Parse, deduplicate, and order every complete naming rule in the
    /// configuration. Incomplete titles (missing `.symbols`, `.style`, or
    /// `.severity`, or an unusable referenced style) are excluded silently.
    pub fn from_config_map(config: &ConfigMap) -> Self {
        Assembler::new(config).assemble()
    }

    /// Resolve a specification handle.
    ///
    /// Panics on a handle from a different parse pass; that is a caller
    /// bug, not a recoverable condition.
    pub fn spec(&self, id: SpecId) -> &SymbolSpecification {
        &self.symbol_specifications[id.0 as usize]
    }

    /// Resolve a style handle. Same panic contract as [`Self::spec`].
    pub fn style(&self, id: StyleId) -> &NamingStyle {
        &self.naming_styles[id.0 as usize]
    }

    /// The first rule fully matching the described symbol, if any
    pub fn rule_for(&self, symbol: &SymbolDescriptor) -> Option<&NamingRule> {
        self.rules
            .iter()
            .find(|rule| self.spec(rule.symbol_spec).applies_to(symbol))
    }
}

struct Assembler<'a> {
    config: &'a ConfigMap,
    specs: Vec<SymbolSpecification>,
    styles: Vec<NamingStyle>,
    /// Interned specifications by lowercased group name
    spec_ids: HashMap<String, SpecId>,
    /// Interned styles by lowercased style name; a style whose
    /// capitalization failed to parse caches the failure
    style_ids: HashMap<String, Option<StyleId>>,
}

impl<'a> Assembler<'a> {
    fn new(config: &'a ConfigMap) -> Self {
        Self {
            config,
            specs: Vec::new(),
            styles: Vec::new(),
            spec_ids: HashMap::new(),
            style_ids: HashMap::new(),
        }
    }

    fn assemble(mut self) -> NamingStylePreferences {
        let mut winners: HashMap<(SpecId, StyleId, Severity), usize> = HashMap::new();
        let mut rules: Vec<NamingRule> = Vec::new();

        for title in self.rule_titles() {
            let Some(rule) = self.rule_for_title(&title) else {
                tracing::debug!("Excluding incomplete naming rule title '{title}'");
                continue;
            };
            match winners.entry(rule.identity()) {
                Entry::Occupied(slot) => {
                    // Duplicate triples collapse to one rule; the title that
                    // sorts first keeps it.
                    let index = *slot.get();
                    if ordering::compare_titles(&rule.title, &rules[index].title)
                        == CmpOrdering::Less
                    {
                        rules[index] = rule;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(rules.len());
                    rules.push(rule);
                }
            }
        }

        ordering::sort_rules(&mut rules, &self.specs);

        NamingStylePreferences {
            symbol_specifications: self.specs,
            naming_styles: self.styles,
            rules,
        }
    }

    /// Distinct rule titles, taken from keys shaped exactly
    /// `dotnet_naming_rule.<title>.<property>`. A key with extra dots is
    /// not a rule entry; titles cannot contain `.`.
    fn rule_titles(&self) -> Vec<String> {
        let mut titles = Vec::new();
        let mut seen = HashSet::new();

        for key in self.config.keys() {
            let mut segments = key.split('.');
            let (Some(prefix), Some(title), Some(_property), None) = (
                segments.next(),
                segments.next(),
                segments.next(),
                segments.next(),
            ) else {
                continue;
            };
            if !prefix.eq_ignore_ascii_case("dotnet_naming_rule") {
                continue;
            }
            if seen.insert(title.to_string()) {
                titles.push(title.to_string());
            }
        }

        titles
    }

    /// Build the rule for one title. Specification, style, and severity are
    /// resolved in dependency order; any missing piece drops the whole
    /// title, partial rules are never retained.
    fn rule_for_title(&mut self, title: &str) -> Option<NamingRule> {
        let symbol_spec = self.resolve_spec(title)?;
        let style = self.resolve_style(title)?;
        let severity_value = self
            .config
            .get(&format!("dotnet_naming_rule.{title}.severity"))?;

        Some(NamingRule {
            title: title.to_string(),
            symbol_spec,
            style,
            severity: Severity::from_editorconfig(severity_value),
        })
    }

    /// Intern the symbol group referenced by the title's `.symbols` entry.
    /// The group is parsed once per name and shared by every referencing
    /// title; the reference is case-insensitive like any key lookup.
    fn resolve_spec(&mut self, title: &str) -> Option<SpecId> {
        let group_name = self
            .config
            .get(&format!("dotnet_naming_rule.{title}.symbols"))?;

        if let Some(&id) = self.spec_ids.get(&group_name.to_lowercase()) {
            return Some(id);
        }

        let id = SpecId(self.specs.len() as u32);
        self.specs
            .push(SymbolSpecification::from_config(id, group_name, self.config));
        self.spec_ids.insert(group_name.to_lowercase(), id);
        Some(id)
    }

    /// Intern the style referenced by the title's `.style` entry. A style
    /// whose capitalization does not parse fails every referencing title.
    fn resolve_style(&mut self, title: &str) -> Option<StyleId> {
        let style_name = self
            .config
            .get(&format!("dotnet_naming_rule.{title}.style"))?;

        if let Some(&cached) = self.style_ids.get(&style_name.to_lowercase()) {
            return cached;
        }

        let id = StyleId(self.styles.len() as u32);
        let resolved = NamingStyle::from_config(id, style_name, self.config).map(|style| {
            self.styles.push(style);
            id
        });
        self.style_ids.insert(style_name.to_lowercase(), resolved);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &str)]) -> ConfigMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_titles_with_extra_dots_are_excluded() {
        let config = config(&[
            ("dotnet_naming_rule.good.symbols", "syms"),
            ("dotnet_naming_rule.bad.title.symbols", "syms"),
            ("dotnet_naming_rule_unrelated.x.y", "z"),
        ]);

        let titles = Assembler::new(&config).rule_titles();
        assert_eq!(titles, vec!["good".to_string()]);
    }

    #[test]
    fn test_specs_and_styles_are_interned_per_name() {
        let config = config(&[
            ("dotnet_naming_rule.one.symbols", "shared_syms"),
            ("dotnet_naming_rule.one.style", "shared_style"),
            ("dotnet_naming_rule.one.severity", "warning"),
            ("dotnet_naming_rule.two.symbols", "SHARED_SYMS"),
            ("dotnet_naming_rule.two.style", "shared_style"),
            ("dotnet_naming_rule.two.severity", "error"),
            ("dotnet_naming_symbols.shared_syms.applicable_kinds", "field"),
            ("dotnet_naming_style.shared_style.capitalization", "camel_case"),
        ]);

        let preferences = NamingStylePreferences::from_config_map(&config);
        assert_eq!(preferences.symbol_specifications.len(), 1);
        assert_eq!(preferences.naming_styles.len(), 1);
        // Different severities, so both rules survive deduplication
        assert_eq!(preferences.rules.len(), 2);
    }

    #[test]
    fn test_title_missing_style_reference_is_dropped() {
        let config = config(&[
            ("dotnet_naming_rule.orphan.symbols", "syms"),
            ("dotnet_naming_rule.orphan.severity", "warning"),
            ("dotnet_naming_symbols.syms.applicable_kinds", "field"),
        ]);

        let preferences = NamingStylePreferences::from_config_map(&config);
        assert!(preferences.rules.is_empty());
        // The specification was still parsed before the drop
        assert_eq!(preferences.symbol_specifications.len(), 1);
    }

    #[test]
    fn test_unusable_style_poisons_every_referencing_title() {
        let config = config(&[
            ("dotnet_naming_rule.one.symbols", "syms"),
            ("dotnet_naming_rule.one.style", "broken"),
            ("dotnet_naming_rule.one.severity", "warning"),
            ("dotnet_naming_rule.two.symbols", "syms"),
            ("dotnet_naming_rule.two.style", "broken"),
            ("dotnet_naming_rule.two.severity", "error"),
            ("dotnet_naming_symbols.syms.applicable_kinds", "field"),
            ("dotnet_naming_style.broken.capitalization", "not_a_scheme"),
        ]);

        let preferences = NamingStylePreferences::from_config_map(&config);
        assert!(preferences.rules.is_empty());
        assert!(preferences.naming_styles.is_empty());
    }
}
