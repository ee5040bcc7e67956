//! Deterministic ordering of naming rules
//!
//! Rules are applied first-match-wins, so more specific rules must sort
//! ahead of catch-alls. Specificity is judged per axis: a larger
//! required-modifier set first, then a narrower accessibility set, then a
//! narrower kind set, with the rule title (case-insensitive, then byte-wise)
//! as the final tiebreak. File position is never consulted; it is not
//! reproducible across configuration parsers.

use super::kinds::Modifier;
use super::rule::NamingRule;
use super::symbol_spec::SymbolSpecification;
use std::cmp::Ordering;

/// Three-way comparison from a subset relation: a strict subset sorts
/// first, mutual subsets are equal, incomparable sets are left as-is.
fn compare_by_subset<T>(
    left: &[T],
    right: &[T],
    is_subset: impl Fn(&[T], &[T]) -> bool,
) -> Ordering {
    match (is_subset(left, right), is_subset(right, left)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn contains_all<T: PartialEq>(superset: &[T], subset: &[T]) -> bool {
    subset.iter().all(|item| superset.contains(item))
}

/// Whether every modifier in `required` is satisfied by `covering`;
/// `const` in the covering set satisfies `static` and `readonly`
fn modifiers_covered(required: &[Modifier], covering: &[Modifier]) -> bool {
    required
        .iter()
        .all(|modifier| modifier.satisfied_by(covering))
}

/// The rule whose required modifiers cover the other's sorts first: it is
/// the more restrictive, hence more specific, match
fn compare_modifier_axis(left: &SymbolSpecification, right: &SymbolSpecification) -> Ordering {
    compare_by_subset(
        &left.required_modifiers,
        &right.required_modifiers,
        |subset, superset| modifiers_covered(subset, superset),
    )
    .reverse()
}

/// The rule matching fewer accessibilities sorts first
fn compare_accessibility_axis(left: &SymbolSpecification, right: &SymbolSpecification) -> Ordering {
    compare_by_subset(
        &left.applicable_accessibilities,
        &right.applicable_accessibilities,
        |subset, superset| contains_all(superset, subset),
    )
}

/// The rule matching fewer symbol kinds sorts first
fn compare_kind_axis(left: &SymbolSpecification, right: &SymbolSpecification) -> Ordering {
    compare_by_subset(
        &left.applicable_kinds,
        &right.applicable_kinds,
        |subset, superset| contains_all(superset, subset),
    )
}

/// Case-insensitive comparison, byte-wise for titles differing only in case
pub(crate) fn compare_titles(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

fn compare_rules(
    left: &NamingRule,
    right: &NamingRule,
    specs: &[SymbolSpecification],
) -> Ordering {
    let left_spec = &specs[left.symbol_spec.0 as usize];
    let right_spec = &specs[right.symbol_spec.0 as usize];

    compare_modifier_axis(left_spec, right_spec)
        .then_with(|| compare_accessibility_axis(left_spec, right_spec))
        .then_with(|| compare_kind_axis(left_spec, right_spec))
        .then_with(|| compare_titles(&left.title, &right.title))
}

/// Sort rules into their final applied order.
///
/// The axis comparisons are partial orders (incomparable sets compare
/// equal), so rules are first put into the total title order and then
/// stably rearranged by an insertion pass; this keeps the result
/// reproducible regardless of the order rules were discovered in.
///
/// Panics if a rule references a specification outside `specs`; handles are
/// arena indices and always resolve for rules built by the same parse pass.
pub(crate) fn sort_rules(rules: &mut [NamingRule], specs: &[SymbolSpecification]) {
    rules.sort_by(|left, right| compare_titles(&left.title, &right.title));

    for sorted_end in 1..rules.len() {
        let mut slot = sorted_end;
        while slot > 0 && compare_rules(&rules[slot - 1], &rules[slot], specs) == Ordering::Greater
        {
            rules.swap(slot - 1, slot);
            slot -= 1;
        }
    }
}
