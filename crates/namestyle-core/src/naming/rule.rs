//! Severity-annotated naming rules

use super::style::StyleId;
use super::symbol_spec::SpecId;
use serde::{Deserialize, Serialize};

/// Diagnostic severity attached to a naming rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable reporting entirely
    Suppress,
    /// Report without user-visible display
    Hidden,
    /// Informational message
    Info,
    /// Warning
    Warn,
    /// Error
    Error,
}

impl Severity {
    /// Map an editorconfig severity value.
    ///
    /// Unrecognized values degrade to [`Severity::Hidden`] rather than
    /// dropping the rule; only a missing severity key excludes a rule title,
    /// which the assembler checks before calling this.
    pub fn from_editorconfig(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "none" => Self::Suppress,
            "refactoring" | "silent" => Self::Hidden,
            "suggestion" => Self::Info,
            "warning" => Self::Warn,
            "error" => Self::Error,
            other => {
                tracing::warn!("Unrecognized severity '{other}', defaulting to hidden");
                Self::Hidden
            }
        }
    }

    /// The canonical editorconfig spelling
    pub fn to_editorconfig_string(self) -> &'static str {
        match self {
            Self::Suppress => "none",
            Self::Hidden => "silent",
            Self::Info => "suggestion",
            Self::Warn => "warning",
            Self::Error => "error",
        }
    }
}

/// A naming rule linking a symbol specification to a naming style at a
/// severity.
///
/// Identity for deduplication is the (symbol_spec, style, severity) triple;
/// the title is carried for ordering tiebreaks and display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingRule {
    pub title: String,
    pub symbol_spec: SpecId,
    pub style: StyleId,
    pub severity: Severity,
}

impl NamingRule {
    /// The deduplication identity triple
    pub fn identity(&self) -> (SpecId, StyleId, Severity) {
        (self.symbol_spec, self.style, self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_keyword_mapping() {
        assert_eq!(Severity::from_editorconfig("none"), Severity::Suppress);
        assert_eq!(Severity::from_editorconfig("refactoring"), Severity::Hidden);
        assert_eq!(Severity::from_editorconfig("silent"), Severity::Hidden);
        assert_eq!(Severity::from_editorconfig("suggestion"), Severity::Info);
        assert_eq!(Severity::from_editorconfig("warning"), Severity::Warn);
        assert_eq!(Severity::from_editorconfig("error"), Severity::Error);
    }

    #[test]
    fn test_unrecognized_severity_defaults_to_hidden() {
        assert_eq!(Severity::from_editorconfig("bogus_value"), Severity::Hidden);
        assert_eq!(Severity::from_editorconfig(""), Severity::Hidden);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, r#""error""#);

        let json = serde_json::to_string(&Severity::Suppress).unwrap();
        assert_eq!(json, r#""suppress""#);
    }

    #[test]
    fn test_severity_round_trips_through_editorconfig_spelling() {
        for severity in [
            Severity::Suppress,
            Severity::Hidden,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
        ] {
            let spelled = severity.to_editorconfig_string();
            assert_eq!(Severity::from_editorconfig(spelled), severity);
        }
    }
}
