//! Final consolidation of per-entry winners.
//!
//! Runs after winner selection so that precedence among candidates is
//! identical in secure and insecure environments; only the end inclusion
//! differs.

use browsergrid_manifest::Manifest;
use serde_json::{Map, Value};

/// A selected winner awaiting consolidation, still paired with the
/// wanted entry's options.
pub struct PendingMatch<'a> {
    /// The winning catalog entry.
    pub manifest: &'a Manifest,
    /// Options from the wanted entry that selected it.
    pub options: Map<String, Value>,
}

/// Drop winners that need a secure environment when running insecure,
/// remove exact duplicates (same catalog entry, equal options; later
/// copies lose), and merge options into a copy of each winner.
pub fn consolidate(matches: Vec<PendingMatch<'_>>, insecure: bool) -> Vec<Manifest> {
    let mut kept: Vec<PendingMatch<'_>> = Vec::new();

    for candidate in matches {
        if insecure && candidate.manifest.wants_secure_env() {
            tracing::debug!(
                "excluding \"{}\": wants a secure environment",
                candidate.manifest.name()
            );
            continue;
        }

        let duplicate = kept.iter().any(|existing| {
            std::ptr::eq(existing.manifest, candidate.manifest)
                && existing.options == candidate.options
        });
        if !duplicate {
            kept.push(candidate);
        }
    }

    kept.into_iter()
        .map(|m| merge_options(m.manifest, m.options))
        .collect()
}

/// Copy of `manifest` with `options` deep-merged over the manifest's own
/// declared options; the wanted side wins per field, recursively.
fn merge_options(manifest: &Manifest, options: Map<String, Value>) -> Manifest {
    let merged = match manifest.options() {
        Some(own) => deep_merge(own.clone(), options),
        None => options,
    };
    manifest.with_options(merged)
}

fn deep_merge(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        match (base.remove(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                base.insert(key, Value::Object(deep_merge(existing, incoming)));
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
    base
}
