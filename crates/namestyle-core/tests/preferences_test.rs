//! Integration tests for naming-style preference assembly
//!
//! These tests exercise the full pipeline: flat configuration entries in,
//! ordered and deduplicated rule set out.

use namestyle_core::{
    Accessibility, Capitalization, ConfigMap, Language, Modifier, NamingStylePreferences, Severity,
    SymbolDescriptor, SymbolKind, SymbolMatchKind, TypeKind, accessibility_list_to_editorconfig_string,
    kind_list_to_editorconfig_string, modifier_list_to_editorconfig_string, parse_accessibility_list,
    parse_kind_list, parse_modifier_list,
};

fn config(entries: &[(&str, &str)]) -> ConfigMap {
    entries.iter().copied().collect()
}

#[test]
fn test_end_to_end_interface_prefix_rule() {
    let config = config(&[
        ("dotnet_naming_rule.interfaces.symbols", "interface_sym"),
        ("dotnet_naming_rule.interfaces.style", "pascal_i"),
        ("dotnet_naming_rule.interfaces.severity", "warning"),
        (
            "dotnet_naming_symbols.interface_sym.applicable_kinds",
            "interface",
        ),
        ("dotnet_naming_style.pascal_i.required_prefix", "I"),
        ("dotnet_naming_style.pascal_i.capitalization", "pascal_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);

    assert_eq!(preferences.rules.len(), 1);
    let rule = &preferences.rules[0];
    assert_eq!(rule.title, "interfaces");
    assert_eq!(rule.severity, Severity::Warn);

    let spec = preferences.spec(rule.symbol_spec);
    assert_eq!(
        spec.applicable_kinds,
        vec![SymbolMatchKind::Type(TypeKind::Interface)]
    );

    let style = preferences.style(rule.style);
    assert_eq!(style.prefix, "I");
    assert_eq!(style.capitalization, Capitalization::PascalCase);
}

#[test]
fn test_wildcard_kinds_expand_to_canonical_fourteen() {
    let kinds = parse_kind_list(Some("*"));
    assert_eq!(kinds.len(), 14);
    assert_eq!(kinds[0], SymbolMatchKind::Symbol(SymbolKind::Namespace));
    assert_eq!(kinds[1], SymbolMatchKind::Type(TypeKind::Class));
    assert_eq!(kinds[13], SymbolMatchKind::Symbol(SymbolKind::Local));
}

#[test]
fn test_round_trip_for_nonempty_subsets() {
    let kind_subsets: Vec<Vec<SymbolMatchKind>> = vec![
        vec![SymbolMatchKind::Type(TypeKind::Interface)],
        vec![
            SymbolMatchKind::Symbol(SymbolKind::Field),
            SymbolMatchKind::Symbol(SymbolKind::Property),
        ],
        parse_kind_list(Some("*")),
    ];
    for subset in kind_subsets {
        let serialized = kind_list_to_editorconfig_string(&subset);
        assert_eq!(parse_kind_list(Some(&serialized)), subset);
    }

    for language in [Language::CSharp, Language::VisualBasic] {
        let accessibility_subsets: Vec<Vec<Accessibility>> = vec![
            vec![Accessibility::Private],
            vec![Accessibility::Internal, Accessibility::ProtectedInternal],
        ];
        for subset in accessibility_subsets {
            let serialized = accessibility_list_to_editorconfig_string(&subset, language);
            assert_eq!(parse_accessibility_list(Some(&serialized)), subset);
        }

        let modifier_subsets: Vec<Vec<Modifier>> = vec![
            vec![Modifier::Const],
            vec![Modifier::Abstract, Modifier::Static],
        ];
        for subset in modifier_subsets {
            let serialized = modifier_list_to_editorconfig_string(&subset, language);
            assert_eq!(parse_modifier_list(Some(&serialized)), subset);
        }
    }
}

#[test]
fn test_full_domains_serialize_to_wildcard() {
    assert_eq!(
        kind_list_to_editorconfig_string(&parse_kind_list(Some("*"))),
        "*"
    );
    assert_eq!(
        accessibility_list_to_editorconfig_string(
            &parse_accessibility_list(Some("*")),
            Language::CSharp
        ),
        "*"
    );
    assert_eq!(
        modifier_list_to_editorconfig_string(&parse_modifier_list(Some("*")), Language::VisualBasic),
        "*"
    );
}

#[test]
fn test_duplicate_triples_collapse_to_first_sorting_title() {
    let config = config(&[
        ("dotnet_naming_rule.rule_B.symbols", "syms"),
        ("dotnet_naming_rule.rule_B.style", "style"),
        ("dotnet_naming_rule.rule_B.severity", "warning"),
        ("dotnet_naming_rule.rule_a.symbols", "syms"),
        ("dotnet_naming_rule.rule_a.style", "style"),
        ("dotnet_naming_rule.rule_a.severity", "warning"),
        ("dotnet_naming_symbols.syms.applicable_kinds", "field"),
        ("dotnet_naming_style.style.capitalization", "camel_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);

    // Identical (spec, style, severity) triples keep exactly one rule; the
    // case-insensitively first title wins ('a' < 'b').
    assert_eq!(preferences.rules.len(), 1);
    assert_eq!(preferences.rules[0].title, "rule_a");
}

#[test]
fn test_modifier_restricted_rule_orders_before_catch_all() {
    let entries = [
        ("dotnet_naming_rule.statics.symbols", "static_syms"),
        ("dotnet_naming_rule.statics.style", "style"),
        ("dotnet_naming_rule.statics.severity", "warning"),
        ("dotnet_naming_rule.anything.symbols", "any_syms"),
        ("dotnet_naming_rule.anything.style", "style"),
        ("dotnet_naming_rule.anything.severity", "warning"),
        ("dotnet_naming_symbols.static_syms.applicable_kinds", "field"),
        (
            "dotnet_naming_symbols.static_syms.applicable_accessibilities",
            "public",
        ),
        (
            "dotnet_naming_symbols.static_syms.required_modifiers",
            "static",
        ),
        ("dotnet_naming_symbols.any_syms.applicable_kinds", "field"),
        (
            "dotnet_naming_symbols.any_syms.applicable_accessibilities",
            "public, private",
        ),
        ("dotnet_naming_style.style.capitalization", "pascal_case"),
    ];

    // The result must not depend on the order entries were discovered in.
    let forward = NamingStylePreferences::from_config_map(&config(&entries));
    let mut reversed_entries = entries;
    reversed_entries.reverse();
    let backward = NamingStylePreferences::from_config_map(&config(&reversed_entries));

    for preferences in [&forward, &backward] {
        let titles: Vec<&str> = preferences
            .rules
            .iter()
            .map(|rule| rule.title.as_str())
            .collect();
        assert_eq!(titles, vec!["statics", "anything"]);
    }
}

#[test]
fn test_const_rule_orders_before_static_readonly_rule() {
    let config = config(&[
        ("dotnet_naming_rule.consts.symbols", "const_syms"),
        ("dotnet_naming_rule.consts.style", "style"),
        ("dotnet_naming_rule.consts.severity", "warning"),
        ("dotnet_naming_rule.baseline.symbols", "sr_syms"),
        ("dotnet_naming_rule.baseline.style", "style"),
        ("dotnet_naming_rule.baseline.severity", "warning"),
        ("dotnet_naming_symbols.const_syms.applicable_kinds", "field"),
        ("dotnet_naming_symbols.const_syms.required_modifiers", "const"),
        ("dotnet_naming_symbols.sr_syms.applicable_kinds", "field"),
        (
            "dotnet_naming_symbols.sr_syms.required_modifiers",
            "static, readonly",
        ),
        ("dotnet_naming_style.style.capitalization", "all_upper"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);
    let titles: Vec<&str> = preferences
        .rules
        .iter()
        .map(|rule| rule.title.as_str())
        .collect();

    // const implies static and readonly, so the const rule is at least as
    // specific and must be tried first.
    assert_eq!(titles, vec!["consts", "baseline"]);
}

#[test]
fn test_unrecognized_severity_retains_rule_as_hidden() {
    let config = config(&[
        ("dotnet_naming_rule.r1.symbols", "syms"),
        ("dotnet_naming_rule.r1.style", "style"),
        ("dotnet_naming_rule.r1.severity", "bogus_value"),
        ("dotnet_naming_symbols.syms.applicable_kinds", "field"),
        ("dotnet_naming_style.style.capitalization", "camel_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);
    assert_eq!(preferences.rules.len(), 1);
    assert_eq!(preferences.rules[0].severity, Severity::Hidden);
}

#[test]
fn test_missing_severity_key_excludes_title() {
    let config = config(&[
        ("dotnet_naming_rule.r1.symbols", "syms"),
        ("dotnet_naming_rule.r1.style", "style"),
        ("dotnet_naming_symbols.syms.applicable_kinds", "field"),
        ("dotnet_naming_style.style.capitalization", "camel_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);
    assert!(preferences.rules.is_empty());
}

#[test]
fn test_first_matching_rule_wins_for_symbol_lookup() {
    let config = config(&[
        ("dotnet_naming_rule.consts.symbols", "const_syms"),
        ("dotnet_naming_rule.consts.style", "upper"),
        ("dotnet_naming_rule.consts.severity", "warning"),
        ("dotnet_naming_rule.fields.symbols", "field_syms"),
        ("dotnet_naming_rule.fields.style", "camel"),
        ("dotnet_naming_rule.fields.severity", "suggestion"),
        ("dotnet_naming_symbols.const_syms.applicable_kinds", "field"),
        (
            "dotnet_naming_symbols.const_syms.applicable_accessibilities",
            "private",
        ),
        ("dotnet_naming_symbols.const_syms.required_modifiers", "const"),
        ("dotnet_naming_symbols.field_syms.applicable_kinds", "field"),
        (
            "dotnet_naming_symbols.field_syms.applicable_accessibilities",
            "private, public",
        ),
        ("dotnet_naming_style.upper.capitalization", "all_upper"),
        ("dotnet_naming_style.camel.capitalization", "camel_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);
    assert_eq!(preferences.rules.len(), 2);

    let const_field = SymbolDescriptor::new(
        SymbolMatchKind::Symbol(SymbolKind::Field),
        Accessibility::Private,
        vec![Modifier::Const],
    );
    let matched = preferences.rule_for(&const_field).unwrap();
    assert_eq!(matched.title, "consts");
    assert_eq!(
        preferences.style(matched.style).capitalization,
        Capitalization::AllUpper
    );

    let plain_field = SymbolDescriptor::new(
        SymbolMatchKind::Symbol(SymbolKind::Field),
        Accessibility::Public,
        vec![],
    );
    let matched = preferences.rule_for(&plain_field).unwrap();
    assert_eq!(matched.title, "fields");

    let unmatched = SymbolDescriptor::new(
        SymbolMatchKind::Type(TypeKind::Class),
        Accessibility::Public,
        vec![],
    );
    assert!(preferences.rule_for(&unmatched).is_none());
}

#[test]
fn test_preferences_serialize_to_json() {
    let config = config(&[
        ("dotnet_naming_rule.interfaces.symbols", "interface_sym"),
        ("dotnet_naming_rule.interfaces.style", "pascal_i"),
        ("dotnet_naming_rule.interfaces.severity", "warning"),
        (
            "dotnet_naming_symbols.interface_sym.applicable_kinds",
            "interface",
        ),
        ("dotnet_naming_style.pascal_i.required_prefix", "I"),
        ("dotnet_naming_style.pascal_i.capitalization", "pascal_case"),
    ]);

    let preferences = NamingStylePreferences::from_config_map(&config);
    let json = serde_json::to_value(&preferences).unwrap();

    assert_eq!(json["rules"][0]["severity"], "warn");
    assert_eq!(json["naming_styles"][0]["prefix"], "I");
    assert_eq!(json["symbol_specifications"][0]["name"], "interface_sym");
}
