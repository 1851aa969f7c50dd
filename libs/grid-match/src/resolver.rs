//! Target resolution pipeline.
//!
//! Wanted entries are normalized and expanded, candidates are filtered by
//! name (alias-aware), structure and version, interchangeable candidates
//! collapse to one winner each, and all winners flow into consolidation.
//! The name index is rebuilt per invocation; nothing is cached across
//! calls and inputs are never mutated.

use browsergrid_manifest::{cmp_versions, explode_versions, Manifest, WantedEntry};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::aliases::AliasLookup;
use crate::consolidate::{self, PendingMatch};
use crate::dedup;
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::matcher;
use crate::range;

#[cfg(feature = "builtin-aliases")]
use crate::aliases::BuiltinAliases;
#[cfg(feature = "builtin-aliases")]
use crate::env::ProcessEnvironment;

/// Paths matched by dedicated logic rather than the structural matcher.
const SKIP: &[&str] = &["name", "version"];

/// Matching engine with injectable collaborators.
#[derive(Debug, Clone)]
pub struct TargetMatcher<A, E> {
    aliases: A,
    env: E,
}

impl<A: AliasLookup, E: Environment> TargetMatcher<A, E> {
    /// Engine with explicit alias and environment collaborators.
    pub fn with_providers(aliases: A, env: E) -> Self {
        Self { aliases, env }
    }

    /// Resolve `wanted` against `available`.
    ///
    /// Returns one fully specified manifest per distinguishable match,
    /// with wanted `options` merged in, sorted by wanted name. Fails fast
    /// on the first wanted entry with zero candidates.
    pub fn match_targets(
        &self,
        available: &[Manifest],
        wanted: &[WantedEntry],
    ) -> Result<Vec<Manifest>> {
        let mut entries = wanted
            .iter()
            .map(WantedEntry::normalized)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        let entries = explode_versions(entries);

        let groups = group_by_name(available, &self.aliases);
        tracing::debug!(
            "indexed {} manifests into {} name groups",
            available.len(),
            groups.len()
        );

        let mut matches: Vec<PendingMatch<'_>> = Vec::new();

        for entry in &entries {
            let mut explicit = BTreeSet::new();

            let candidates: Vec<&Manifest> = groups
                .get(entry.name())
                .map(|group| {
                    group
                        .iter()
                        .copied()
                        .filter(|manifest| {
                            matcher::matches_manifest(
                                manifest.as_map(),
                                entry.as_map(),
                                &mut explicit,
                                SKIP,
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();

            let candidates = range::filter_versions(&candidates, &version_expr(entry));

            if candidates.is_empty() {
                return Err(Error::NoMatch(Box::new(entry.clone())));
            }

            tracing::debug!(
                "\"{}\": {} candidate(s), {} explicit path(s)",
                entry.name(),
                candidates.len(),
                explicit.len()
            );

            let options = entry.options().cloned().unwrap_or_default();
            for winner in dedup::select_winners(candidates, &explicit) {
                matches.push(PendingMatch {
                    manifest: winner,
                    options: options.clone(),
                });
            }
        }

        Ok(consolidate::consolidate(matches, self.env.is_insecure()))
    }
}

#[cfg(feature = "builtin-aliases")]
impl TargetMatcher<BuiltinAliases, ProcessEnvironment> {
    /// Engine with the built-in alias table and process-environment
    /// detection.
    pub fn new() -> Self {
        Self::with_providers(BuiltinAliases, ProcessEnvironment)
    }
}

#[cfg(feature = "builtin-aliases")]
impl Default for TargetMatcher<BuiltinAliases, ProcessEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `wanted` against `available` with the default collaborators.
#[cfg(feature = "builtin-aliases")]
pub fn match_targets(available: &[Manifest], wanted: &[WantedEntry]) -> Result<Vec<Manifest>> {
    TargetMatcher::new().match_targets(available, wanted)
}

/// Index the catalog by lower-cased name, each group sorted by version,
/// and register every group under the aliases of its name. Names present
/// in the catalog take precedence over aliases of other names.
fn group_by_name<'a, A: AliasLookup>(
    available: &'a [Manifest],
    aliases: &A,
) -> BTreeMap<String, Vec<&'a Manifest>> {
    let mut groups: BTreeMap<String, Vec<&'a Manifest>> = BTreeMap::new();

    for manifest in available {
        groups
            .entry(manifest.name().to_lowercase())
            .or_default()
            .push(manifest);
    }

    for group in groups.values_mut() {
        group.sort_by(|a, b| cmp_versions(a.version(), b.version()));
    }

    let mut aliased: Vec<(String, Vec<&'a Manifest>)> = Vec::new();
    for (name, group) in &groups {
        for alias in aliases.aliases_of(name) {
            let alias = alias.to_lowercase();
            if alias != *name && !groups.contains_key(&alias) {
                aliased.push((alias, group.clone()));
            }
        }
    }
    groups.extend(aliased);

    groups
}

fn version_expr(entry: &WantedEntry) -> String {
    entry
        .version()
        .and_then(Value::as_str)
        .unwrap_or("latest")
        .to_string()
}
