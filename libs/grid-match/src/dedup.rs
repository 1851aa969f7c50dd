//! Deduplication of indistinguishable candidates and preference
//! tie-break.
//!
//! Two candidates are interchangeable for a wanted entry if they agree on
//! every explicitly constrained path, regardless of differences
//! elsewhere. One winner is kept per interchangeable group: the last
//! candidate in group order, unless a `preferredOver` rule outweighs it.

use browsergrid_manifest::Manifest;
use std::collections::BTreeSet;

use crate::matcher;

/// Weight of a `preferredOver` hit on a specific value. A specific value
/// carries more weight than the wildcard.
const SPECIFIC_WEIGHT: u32 = 1000;
const WILDCARD_WEIGHT: u32 = 1;

/// Collapse candidates that agree on every path in `explicit`, picking
/// one winner per collapsed subgroup. Group order is preserved.
pub fn select_winners<'a>(
    mut group: Vec<&'a Manifest>,
    explicit: &BTreeSet<String>,
) -> Vec<&'a Manifest> {
    let mut winners = Vec::new();

    let mut i = 0;
    while i < group.len() {
        let mut alternatives = vec![group[i]];

        let mut j = i + 1;
        while j < group.len() {
            if indistinguishable(group[i], group[j], explicit) {
                alternatives.push(group.remove(j));
            } else {
                j += 1;
            }
        }

        winners.push(pick_winner(&alternatives));
        i += 1;
    }

    winners
}

fn indistinguishable(a: &Manifest, b: &Manifest, explicit: &BTreeSet<String>) -> bool {
    explicit
        .iter()
        .all(|path| a.value_at(path) == b.value_at(path))
}

/// The last alternative wins, unless some pairwise `preferredOver` weight
/// exceeds every weight seen before it. Ties keep the earlier winner.
fn pick_winner<'a>(alternatives: &[&'a Manifest]) -> &'a Manifest {
    let mut winner = alternatives[alternatives.len() - 1];
    let mut max = 0;

    for x in 0..alternatives.len() {
        for y in x + 1..alternatives.len() {
            let weight_x = preference_weight(alternatives[x], alternatives[y]);
            let weight_y = preference_weight(alternatives[y], alternatives[x]);

            if weight_x > max {
                max = weight_x;
                winner = alternatives[x];
            }

            if weight_y > max {
                max = weight_y;
                winner = alternatives[y];
            }
        }
    }

    winner
}

/// How strongly `a` prefers to win over `b`, summed across all of `a`'s
/// `preferredOver` paths. Paths absent from `b` contribute nothing.
fn preference_weight(a: &Manifest, b: &Manifest) -> u32 {
    let Some(rules) = a.preferred_over() else {
        return 0;
    };

    let mut weight = 0;

    for (path, accepted) in rules {
        let Some(value) = b.value_at(path) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let Some(accepted) = accepted.as_array() else {
            continue;
        };

        let accepted: Vec<String> = accepted
            .iter()
            .filter_map(matcher::stringify)
            .map(|v| v.to_lowercase())
            .collect();

        let matches_value = matcher::stringify(value)
            .map(|v| accepted.contains(&v.to_lowercase()))
            .unwrap_or(false);

        if matches_value {
            weight += SPECIFIC_WEIGHT;
        } else if accepted.iter().any(|v| v == matcher::ANY) {
            weight += WILDCARD_WEIGHT;
        }
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn manifests(value: Value) -> Vec<Manifest> {
        serde_json::from_value(value).expect("valid catalog")
    }

    fn explicit(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn collapses_candidates_equal_on_explicit_paths() {
        let group = manifests(json!([
            { "name": "a", "foo": "1" },
            { "name": "a", "foo": "2" },
            { "name": "a", "foo": "3" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name"]));

        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].value_at("foo"), Some(&json!("3")));
    }

    #[test]
    fn keeps_candidates_that_differ_on_explicit_paths() {
        let group = manifests(json!([
            { "name": "a", "foo": "1" },
            { "name": "a", "foo": "2" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name", "foo"]));

        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn explicit_comparison_is_strict() {
        // "1" and 1 are different values, so the candidates stay apart
        let group = manifests(json!([
            { "name": "a", "foo": "1" },
            { "name": "a", "foo": 1 }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name", "foo"]));

        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn preferred_over_specific_value_beats_iteration_order() {
        let group = manifests(json!([
            { "name": "a", "foo": "1", "preferredOver": { "foo": ["3"] } },
            { "name": "a", "foo": "2" },
            { "name": "a", "foo": "3" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name"]));

        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].value_at("foo"), Some(&json!("1")));
    }

    #[test]
    fn preferred_over_wildcard_counts_presence() {
        let group = manifests(json!([
            { "name": "a", "device": "emulator", "preferredOver": { "device": ["any"] } },
            { "name": "a", "device": "simulator" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name"]));

        assert_eq!(winners[0].value_at("device"), Some(&json!("emulator")));
    }

    #[test]
    fn preferred_over_ignores_absent_paths() {
        let group = manifests(json!([
            { "name": "a", "preferredOver": { "missing": ["any"] } },
            { "name": "a", "foo": "2" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name"]));

        // no weight accrued, so the default last candidate stands
        assert_eq!(winners[0].value_at("foo"), Some(&json!("2")));
    }

    #[test]
    fn preferred_over_values_compare_case_insensitively() {
        let group = manifests(json!([
            {
                "name": "a",
                "device": "a",
                "preferredOver": { "device": ["Android Emulator"] }
            },
            { "name": "a", "device": "ANDROID EMULATOR" }
        ]));
        let refs: Vec<&Manifest> = group.iter().collect();

        let winners = select_winners(refs, &explicit(&["name"]));

        assert_eq!(winners[0].value_at("device"), Some(&json!("a")));
    }
}
