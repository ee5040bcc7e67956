//! Naming templates parsed from `dotnet_naming_style` groups

use crate::config::ConfigMap;
use serde::{Deserialize, Serialize};

/// Arena handle referencing a [`NamingStyle`].
///
/// Like spec handles, style handles are only meaningful against the style
/// list produced by the same parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub u32);

/// Capitalization scheme applied to identifier words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    PascalCase,
    CamelCase,
    FirstUpper,
    AllUpper,
    AllLower,
}

impl Capitalization {
    /// Map an editorconfig keyword to its scheme, if recognized
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let capitalization = match keyword {
            "pascal_case" => Self::PascalCase,
            "camel_case" => Self::CamelCase,
            "first_word_upper" => Self::FirstUpper,
            "all_upper" => Self::AllUpper,
            "all_lower" => Self::AllLower,
            _ => return None,
        };
        Some(capitalization)
    }

    /// The editorconfig spelling; exactly inverts [`Capitalization::from_keyword`]
    pub fn editorconfig_keyword(self) -> &'static str {
        match self {
            Self::PascalCase => "pascal_case",
            Self::CamelCase => "camel_case",
            Self::FirstUpper => "first_word_upper",
            Self::AllUpper => "all_upper",
            Self::AllLower => "all_lower",
        }
    }
}

/// A naming template: fixed affixes, a word separator, and a capitalization
/// scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingStyle {
    pub id: StyleId,
    /// The `dotnet_naming_style` group name this was parsed from
    pub name: String,
    pub prefix: String,
    pub suffix: String,
    pub word_separator: String,
    pub capitalization: Capitalization,
}

impl NamingStyle {
    /// Parse the `dotnet_naming_style.<style_name>.*` entries for a style.
    ///
    /// Affixes and the word separator default to empty strings. The
    /// capitalization entry is required and must be a recognized keyword;
    /// there is no safe default scheme, so failure excludes every rule title
    /// referencing this style.
    pub fn from_config(id: StyleId, style_name: &str, config: &ConfigMap) -> Option<Self> {
        let capitalization = config
            .get(&format!("dotnet_naming_style.{style_name}.capitalization"))
            .and_then(Capitalization::from_keyword)?;

        let text_entry = |property: &str| {
            config
                .get(&format!("dotnet_naming_style.{style_name}.{property}"))
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            id,
            name: style_name.to_string(),
            prefix: text_entry("required_prefix"),
            suffix: text_entry("required_suffix"),
            word_separator: text_entry("word_separator"),
            capitalization,
        })
    }
}
