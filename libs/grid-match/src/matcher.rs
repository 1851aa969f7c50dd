//! Structural matching of wanted constraints against available manifests.
//!
//! A wanted entry's fields act as constraints: every field it declares
//! must match the corresponding field of a candidate manifest, recursing
//! through nested records; fields it does not declare impose nothing.
//! Matching records which dotted paths were concretely compared, which
//! later scopes deduplication.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Wildcard that matches any available value without becoming an
/// explicit constraint.
pub const ANY: &str = "any";

/// Top-level fields that are never constraints.
const UNCONSTRAINED: &[&str] = &["options", "preferredOver"];

/// Match `wanted` against `available`, recording concretely compared
/// paths in `explicit`. Paths in `skip` count as matched (and explicit)
/// without comparison; dedicated name and version logic handles them.
pub fn matches_manifest(
    available: &Map<String, Value>,
    wanted: &Map<String, Value>,
    explicit: &mut BTreeSet<String>,
    skip: &[&str],
) -> bool {
    wanted.iter().all(|(key, constraint)| {
        UNCONSTRAINED.contains(&key.as_str())
            || matches_value(available.get(key), constraint, explicit, skip, key)
    })
}

fn matches_value(
    available: Option<&Value>,
    wanted: &Value,
    explicit: &mut BTreeSet<String>,
    skip: &[&str],
    path: &str,
) -> bool {
    if let Some(Value::Array(elements)) = available {
        return elements
            .iter()
            .any(|element| matches_value(Some(element), wanted, explicit, skip, path));
    }

    match wanted {
        // A set of acceptable alternatives; any hit is a match.
        Value::Array(alternatives) => alternatives
            .iter()
            .any(|alternative| matches_value(available, alternative, explicit, skip, path)),
        Value::Object(constraints) => match available {
            Some(Value::Object(fields)) => constraints.iter().all(|(key, constraint)| {
                let path = format!("{path}.{key}");
                matches_value(fields.get(key), constraint, explicit, skip, &path)
            }),
            _ => false,
        },
        Value::String(s) if s == ANY => true,
        _ => {
            explicit.insert(path.to_string());
            skip.contains(&path) || matches_primitive(available, wanted)
        }
    }
}

fn matches_primitive(available: Option<&Value>, wanted: &Value) -> bool {
    match wanted {
        // Strings compare case-insensitively, against the stringified
        // available primitive.
        Value::String(wanted) => available
            .and_then(stringify)
            .map(|available| available.eq_ignore_ascii_case(wanted))
            .unwrap_or(false),
        _ => available == Some(wanted),
    }
}

/// Primitive JSON value as a string, the way it would appear unquoted.
pub(crate) fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SKIP: &[&str] = &["name", "version"];

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn check(available: Value, wanted: Value) -> (bool, BTreeSet<String>) {
        let mut explicit = BTreeSet::new();
        let matched = matches_manifest(
            &object(available),
            &object(wanted),
            &mut explicit,
            SKIP,
        );
        (matched, explicit)
    }

    #[test]
    fn absent_wanted_fields_impose_nothing() {
        let (matched, explicit) = check(
            json!({ "name": "a", "foo": true }),
            json!({ "name": "a" }),
        );

        assert!(matched);
        assert_eq!(explicit.into_iter().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn skip_paths_match_without_comparison_but_stay_explicit() {
        let (matched, explicit) = check(
            json!({ "name": "a", "version": "1.0" }),
            json!({ "name": "b", "version": "oldest..latest" }),
        );

        assert!(matched);
        assert!(explicit.contains("name"));
        assert!(explicit.contains("version"));
    }

    #[test]
    fn strings_compare_case_insensitively() {
        let (matched, _) = check(
            json!({ "name": "a", "platform": "Windows 10" }),
            json!({ "name": "a", "platform": "windows 10" }),
        );
        assert!(matched);

        let (matched, _) = check(
            json!({ "name": "a", "platform": "linux" }),
            json!({ "name": "a", "platform": "windows 10" }),
        );
        assert!(!matched);
    }

    #[test]
    fn string_constraints_match_stringified_primitives() {
        let (matched, _) = check(
            json!({ "name": "a", "apiLevel": 29 }),
            json!({ "name": "a", "apiLevel": "29" }),
        );
        assert!(matched);
    }

    #[test]
    fn non_string_constraints_compare_strictly() {
        let (matched, _) = check(
            json!({ "name": "a", "x": 2 }),
            json!({ "name": "a", "x": 2 }),
        );
        assert!(matched);

        let (matched, _) = check(
            json!({ "name": "a", "x": "2" }),
            json!({ "name": "a", "x": 2 }),
        );
        assert!(!matched);
    }

    #[test]
    fn nested_constraints_recurse_and_record_full_paths() {
        let (matched, explicit) = check(
            json!({ "name": "a", "x": { "y": 2, "z": 3 } }),
            json!({ "name": "a", "x": { "z": 3 } }),
        );

        assert!(matched);
        assert!(explicit.contains("x.z"));
        assert!(!explicit.contains("x.y"));
    }

    #[test]
    fn nested_constraints_fail_on_missing_structure() {
        let (matched, _) = check(
            json!({ "name": "a" }),
            json!({ "name": "a", "x": { "z": 3 } }),
        );
        assert!(!matched);

        let (matched, _) = check(
            json!({ "name": "a", "x": "flat" }),
            json!({ "name": "a", "x": { "z": 3 } }),
        );
        assert!(!matched);
    }

    #[test]
    fn wanted_alternatives_match_any() {
        let (matched, _) = check(
            json!({ "name": "a", "platform": "linux" }),
            json!({ "name": "a", "platform": ["linux", "windows 10"] }),
        );
        assert!(matched);

        let (matched, _) = check(
            json!({ "name": "a", "platform": "mac" }),
            json!({ "name": "a", "platform": ["linux", "windows 10"] }),
        );
        assert!(!matched);
    }

    #[test]
    fn available_arrays_match_any_element() {
        let (matched, _) = check(
            json!({ "name": "a", "platform": ["linux", "mac"] }),
            json!({ "name": "a", "platform": "mac" }),
        );
        assert!(matched);
    }

    #[test]
    fn wildcard_matches_without_becoming_explicit() {
        let (matched, explicit) = check(
            json!({ "name": "a", "platform": "linux" }),
            json!({ "name": "a", "platform": "any" }),
        );

        assert!(matched);
        assert!(!explicit.contains("platform"));
    }

    #[test]
    fn wildcard_matches_absent_fields() {
        let (matched, _) = check(json!({ "name": "a" }), json!({ "name": "a", "platform": "any" }));
        assert!(matched);
    }

    #[test]
    fn options_and_preferred_over_are_never_constraints() {
        let (matched, explicit) = check(
            json!({ "name": "a" }),
            json!({
                "name": "a",
                "options": { "headless": true },
                "preferredOver": { "foo": ["any"] }
            }),
        );

        assert!(matched);
        assert!(!explicit.contains("options"));
        assert!(!explicit.contains("preferredOver"));
    }
}
