//! Command implementations for the namestyle CLI

use crate::OutputFormat;
use crate::output::{OutputFormatter, print_resolution};
use namestyle_core::{
    Language, NamestyleError, NamingStylePreferences, Result, SymbolDescriptor, load_config_file,
    parse_accessibility_list, parse_kind_list, parse_modifier_list,
};
use std::path::Path;

/// List the assembled naming rules in their final applied order
pub fn rules_command(config_path: &Path, format: OutputFormat, language: Language) -> Result<()> {
    let preferences = load_preferences(config_path)?;
    OutputFormatter::new(format, language).print_rules(&preferences)
}

/// Resolve a described symbol against the ordered rule set
pub fn resolve_command(
    config_path: &Path,
    kind: &str,
    accessibility: &str,
    modifiers: Option<&str>,
) -> Result<()> {
    let preferences = load_preferences(config_path)?;
    let symbol = parse_symbol(kind, accessibility, modifiers)?;
    print_resolution(&preferences, &symbol);
    Ok(())
}

fn load_preferences(path: &Path) -> Result<NamingStylePreferences> {
    let config = load_config_file(path)?;
    Ok(NamingStylePreferences::from_config_map(&config))
}

/// Build a symbol descriptor from the same keyword tables the engine parses
/// configuration with. Kind and accessibility must each name exactly one
/// recognized keyword; unknown modifiers are dropped as they are in rules.
fn parse_symbol(
    kind: &str,
    accessibility: &str,
    modifiers: Option<&str>,
) -> Result<SymbolDescriptor> {
    let kind = match parse_kind_list(Some(kind)).as_slice() {
        [kind] => *kind,
        _ => {
            return Err(NamestyleError::config_error(format!(
                "Unrecognized symbol kind '{kind}'"
            )));
        }
    };

    let accessibility = match parse_accessibility_list(Some(accessibility)).as_slice() {
        [accessibility] => *accessibility,
        _ => {
            return Err(NamestyleError::config_error(format!(
                "Unrecognized accessibility '{accessibility}'"
            )));
        }
    };

    Ok(SymbolDescriptor::new(
        kind,
        accessibility,
        parse_modifier_list(modifiers),
    ))
}
