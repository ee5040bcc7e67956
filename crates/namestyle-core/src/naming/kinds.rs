//! Closed keyword domains for symbol matching
//!
//! Every axis of a symbol specification (kinds, accessibilities, required
//! modifiers) is parsed from a comma-separated editorconfig value against a
//! fixed keyword table. The wildcard `*` expands to the full domain at parse
//! time and is never carried downstream. Unrecognized tokens are dropped,
//! not fatal: speculative or partially written configuration entries must
//! not abort processing of the valid remainder.

use serde::{Deserialize, Serialize};

/// Target language for editorconfig keyword spellings.
///
/// Accessibility and modifier keywords have Visual Basic synonyms; kind and
/// capitalization keywords spell the same in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CSharp,
    VisualBasic,
}

/// Symbol kinds matched directly by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Namespace,
    Property,
    Field,
    Event,
    Parameter,
    TypeParameter,
    Local,
}

/// Type declaration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Module,
    Pointer,
    TypeParameter,
}

/// Method kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    Ordinary,
    LocalFunction,
}

/// Tagged union over the three kind families a naming rule can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolMatchKind {
    Symbol(SymbolKind),
    Type(TypeKind),
    Method(MethodKind),
}

/// Symbol accessibility levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Public,
    Internal,
    Private,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    /// Locals and other symbols without a declared accessibility
    NotApplicable,
}

/// Declaration modifiers a rule can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Abstract,
    Async,
    Const,
    Readonly,
    Static,
}

/// Canonical expansion of `*` for `applicable_kinds`, in fixed order
pub const ALL_MATCH_KINDS: [SymbolMatchKind; 14] = [
    SymbolMatchKind::Symbol(SymbolKind::Namespace),
    SymbolMatchKind::Type(TypeKind::Class),
    SymbolMatchKind::Type(TypeKind::Struct),
    SymbolMatchKind::Type(TypeKind::Interface),
    SymbolMatchKind::Type(TypeKind::Enum),
    SymbolMatchKind::Symbol(SymbolKind::Property),
    SymbolMatchKind::Method(MethodKind::Ordinary),
    SymbolMatchKind::Method(MethodKind::LocalFunction),
    SymbolMatchKind::Symbol(SymbolKind::Field),
    SymbolMatchKind::Symbol(SymbolKind::Event),
    SymbolMatchKind::Type(TypeKind::Delegate),
    SymbolMatchKind::Symbol(SymbolKind::Parameter),
    SymbolMatchKind::Symbol(SymbolKind::TypeParameter),
    SymbolMatchKind::Symbol(SymbolKind::Local),
];

/// Canonical expansion of `*` for `applicable_accessibilities`
pub const ALL_ACCESSIBILITIES: [Accessibility; 7] = [
    Accessibility::Public,
    Accessibility::Internal,
    Accessibility::Private,
    Accessibility::Protected,
    Accessibility::ProtectedInternal,
    Accessibility::PrivateProtected,
    Accessibility::NotApplicable,
];

/// Canonical expansion of `*` for `required_modifiers`
pub const ALL_MODIFIERS: [Modifier; 5] = [
    Modifier::Abstract,
    Modifier::Async,
    Modifier::Const,
    Modifier::Readonly,
    Modifier::Static,
];

impl SymbolMatchKind {
    /// Map an editorconfig keyword to its kind, if recognized
    fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "namespace" => Self::Symbol(SymbolKind::Namespace),
            "class" => Self::Type(TypeKind::Class),
            "struct" => Self::Type(TypeKind::Struct),
            "interface" => Self::Type(TypeKind::Interface),
            "enum" => Self::Type(TypeKind::Enum),
            "property" => Self::Symbol(SymbolKind::Property),
            "method" => Self::Method(MethodKind::Ordinary),
            "local_function" => Self::Method(MethodKind::LocalFunction),
            "field" => Self::Symbol(SymbolKind::Field),
            "event" => Self::Symbol(SymbolKind::Event),
            "delegate" => Self::Type(TypeKind::Delegate),
            "parameter" => Self::Symbol(SymbolKind::Parameter),
            "type_parameter" => Self::Symbol(SymbolKind::TypeParameter),
            "local" => Self::Symbol(SymbolKind::Local),
            _ => return None,
        };
        Some(kind)
    }

    /// The editorconfig spelling for this kind.
    ///
    /// Kinds outside the editorconfig vocabulary (module, pointer, and the
    /// type-kind form of type parameters) have none; they cannot result from
    /// parsing and are skipped when serializing.
    pub fn editorconfig_keyword(self) -> Option<&'static str> {
        let keyword = match self {
            Self::Symbol(SymbolKind::Namespace) => "namespace",
            Self::Type(TypeKind::Class) => "class",
            Self::Type(TypeKind::Struct) => "struct",
            Self::Type(TypeKind::Interface) => "interface",
            Self::Type(TypeKind::Enum) => "enum",
            Self::Symbol(SymbolKind::Property) => "property",
            Self::Method(MethodKind::Ordinary) => "method",
            Self::Method(MethodKind::LocalFunction) => "local_function",
            Self::Symbol(SymbolKind::Field) => "field",
            Self::Symbol(SymbolKind::Event) => "event",
            Self::Type(TypeKind::Delegate) => "delegate",
            Self::Symbol(SymbolKind::Parameter) => "parameter",
            Self::Symbol(SymbolKind::TypeParameter) => "type_parameter",
            Self::Symbol(SymbolKind::Local) => "local",
            Self::Type(TypeKind::Module | TypeKind::Pointer | TypeKind::TypeParameter) => {
                return None;
            }
        };
        Some(keyword)
    }
}

impl Accessibility {
    /// Map an editorconfig keyword to its accessibility, folding Visual
    /// Basic synonyms onto the same values
    fn from_keyword(keyword: &str) -> Option<Self> {
        let accessibility = match keyword {
            "public" => Self::Public,
            "internal" | "friend" => Self::Internal,
            "private" => Self::Private,
            "protected" => Self::Protected,
            "protected_internal" | "protected_friend" => Self::ProtectedInternal,
            "private_protected" => Self::PrivateProtected,
            "local" => Self::NotApplicable,
            _ => return None,
        };
        Some(accessibility)
    }

    /// The editorconfig spelling for the requested language
    pub fn editorconfig_keyword(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Internal, Language::VisualBasic) => "friend",
            (Self::ProtectedInternal, Language::VisualBasic) => "protected_friend",
            (Self::Public, _) => "public",
            (Self::Internal, _) => "internal",
            (Self::Private, _) => "private",
            (Self::Protected, _) => "protected",
            (Self::ProtectedInternal, _) => "protected_internal",
            (Self::PrivateProtected, _) => "private_protected",
            (Self::NotApplicable, _) => "local",
        }
    }
}

impl Modifier {
    /// Map an editorconfig keyword to its modifier, folding Visual Basic
    /// synonyms onto the same values
    fn from_keyword(keyword: &str) -> Option<Self> {
        let modifier = match keyword {
            "abstract" | "must_inherit" => Self::Abstract,
            "async" => Self::Async,
            "const" => Self::Const,
            "readonly" => Self::Readonly,
            "static" | "shared" => Self::Static,
            _ => return None,
        };
        Some(modifier)
    }

    /// The editorconfig spelling for the requested language
    pub fn editorconfig_keyword(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Abstract, Language::VisualBasic) => "must_inherit",
            (Self::Static, Language::VisualBasic) => "shared",
            (Self::Abstract, _) => "abstract",
            (Self::Async, _) => "async",
            (Self::Const, _) => "const",
            (Self::Readonly, _) => "readonly",
            (Self::Static, _) => "static",
        }
    }

    /// Whether a required modifier is satisfied by a declared modifier set.
    /// `const` implies both `static` and `readonly`.
    pub fn satisfied_by(self, declared: &[Modifier]) -> bool {
        if declared.contains(&self) {
            return true;
        }
        matches!(self, Self::Static | Self::Readonly) && declared.contains(&Modifier::Const)
    }
}

fn parse_keyword_list<T: Copy>(
    value: Option<&str>,
    full_domain: &[T],
    from_keyword: impl Fn(&str) -> Option<T>,
) -> Vec<T> {
    let Some(value) = value else {
        return Vec::new();
    };
    if value.trim() == "*" {
        return full_domain.to_vec();
    }

    let mut parsed = Vec::new();
    for token in value.split(',') {
        let token = token.trim();
        match from_keyword(token) {
            Some(item) => parsed.push(item),
            None => tracing::debug!("Dropping unrecognized keyword '{token}' from list"),
        }
    }
    parsed
}

/// Parse an `applicable_kinds` value; `None` yields an empty list
pub fn parse_kind_list(value: Option<&str>) -> Vec<SymbolMatchKind> {
    parse_keyword_list(value, &ALL_MATCH_KINDS, SymbolMatchKind::from_keyword)
}

/// Parse an `applicable_accessibilities` value; `None` yields an empty list
pub fn parse_accessibility_list(value: Option<&str>) -> Vec<Accessibility> {
    parse_keyword_list(value, &ALL_ACCESSIBILITIES, Accessibility::from_keyword)
}

/// Parse a `required_modifiers` value; `None` yields an empty list
pub fn parse_modifier_list(value: Option<&str>) -> Vec<Modifier> {
    parse_keyword_list(value, &ALL_MODIFIERS, Modifier::from_keyword)
}

fn is_full_domain<T: Copy + PartialEq>(values: &[T], domain: &[T]) -> bool {
    domain.iter().all(|member| values.contains(member))
        && values.iter().all(|value| domain.contains(value))
}

/// Serialize a kind list back to its editorconfig value.
///
/// Exactly the full domain serializes to `*`; anything else becomes the
/// comma-joined keyword list, inverting [`parse_kind_list`].
pub fn kind_list_to_editorconfig_string(kinds: &[SymbolMatchKind]) -> String {
    if is_full_domain(kinds, &ALL_MATCH_KINDS) {
        return "*".to_string();
    }
    kinds
        .iter()
        .filter_map(|kind| kind.editorconfig_keyword())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serialize an accessibility list back to its editorconfig value in the
/// requested language spelling
pub fn accessibility_list_to_editorconfig_string(
    accessibilities: &[Accessibility],
    language: Language,
) -> String {
    if is_full_domain(accessibilities, &ALL_ACCESSIBILITIES) {
        return "*".to_string();
    }
    accessibilities
        .iter()
        .map(|accessibility| accessibility.editorconfig_keyword(language))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serialize a modifier list back to its editorconfig value in the
/// requested language spelling
pub fn modifier_list_to_editorconfig_string(modifiers: &[Modifier], language: Language) -> String {
    if is_full_domain(modifiers, &ALL_MODIFIERS) {
        return "*".to_string();
    }
    modifiers
        .iter()
        .map(|modifier| modifier.editorconfig_keyword(language))
        .collect::<Vec<_>>()
        .join(", ")
}
