//! Output formatting for the namestyle CLI

use colored::*;
use namestyle_core::{
    Language, NamestyleError, NamingStylePreferences, Result, SymbolDescriptor,
};

use crate::OutputFormat;

/// Output formatter for the supported formats
pub struct OutputFormatter {
    format: OutputFormat,
    language: Language,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, language: Language) -> Self {
        Self { format, language }
    }

    /// Print the assembled rule set in the selected format
    pub fn print_rules(&self, preferences: &NamingStylePreferences) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.print_human(preferences);
                Ok(())
            }
            OutputFormat::Json => print_json(preferences),
        }
    }

    fn print_human(&self, preferences: &NamingStylePreferences) {
        if preferences.rules.is_empty() {
            println!("{}", "No complete naming rules found".yellow());
            return;
        }

        println!(
            "{} naming rule(s) in applied order:",
            preferences.rules.len().to_string().bold()
        );

        for (position, rule) in preferences.rules.iter().enumerate() {
            let spec = preferences.spec(rule.symbol_spec);
            let style = preferences.style(rule.style);

            println!();
            println!(
                "{:>3}. {} [{}]",
                position + 1,
                rule.title.bold(),
                severity_label(rule.severity.to_editorconfig_string())
            );
            println!(
                "     kinds: {}",
                non_empty(&spec.kinds_to_editorconfig_string())
            );
            println!(
                "     accessibilities: {}",
                non_empty(&spec.accessibilities_to_editorconfig_string(self.language))
            );
            println!(
                "     required modifiers: {}",
                non_empty(&spec.modifiers_to_editorconfig_string(self.language))
            );

            let mut template = vec![format!(
                "capitalization {}",
                style.capitalization.editorconfig_keyword()
            )];
            if !style.prefix.is_empty() {
                template.push(format!("prefix '{}'", style.prefix));
            }
            if !style.suffix.is_empty() {
                template.push(format!("suffix '{}'", style.suffix));
            }
            if !style.word_separator.is_empty() {
                template.push(format!("separator '{}'", style.word_separator));
            }
            println!("     style {}: {}", style.name, template.join(", "));
        }
    }
}

/// Report the first rule matching the described symbol
pub fn print_resolution(preferences: &NamingStylePreferences, symbol: &SymbolDescriptor) {
    match preferences.rule_for(symbol) {
        Some(rule) => {
            let style = preferences.style(rule.style);
            println!("{} {}", "match:".green().bold(), rule.title);
            println!(
                "  severity: {}",
                severity_label(rule.severity.to_editorconfig_string())
            );
            println!(
                "  style: {} (capitalization {})",
                style.name,
                style.capitalization.editorconfig_keyword()
            );
        }
        None => println!("{}", "no naming rule applies".yellow()),
    }
}

fn print_json(preferences: &NamingStylePreferences) -> Result<()> {
    let json = serde_json::to_string_pretty(preferences)
        .map_err(|e| NamestyleError::internal_error(format!("JSON serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}

fn severity_label(severity: &str) -> ColoredString {
    match severity {
        "error" => severity.red(),
        "warning" => severity.yellow(),
        _ => severity.normal(),
    }
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}
