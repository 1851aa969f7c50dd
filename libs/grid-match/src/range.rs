//! Version range resolution over a version-sorted candidate group.
//!
//! A version expression is either a single endpoint (`"83.0"`, `"latest"`,
//! `"oldest"`, `"-1"`, a prerelease literal) or a `gte..lte` range of two
//! endpoints, with empty sides defaulting to `oldest` and `latest`. An
//! expression that matches nothing yields an empty slice; the caller
//! reports that as a zero-candidates failure.

use browsergrid_manifest::{cmp_version_prefix, is_prerelease, Manifest};
use std::cmp::Ordering;

/// Apply a version expression to the version-sorted `group`, returning
/// the in-range sub-slice as a new vector.
pub fn filter_versions<'a>(group: &[&'a Manifest], expr: &str) -> Vec<&'a Manifest> {
    let (gte, lte) = resolve_range(group, expr);

    let mut start = 0;
    let mut end = group.len();

    if let Some(gte) = gte {
        while start < end && cmp_version_prefix(group[start].version(), &gte) == Ordering::Less {
            start += 1;
        }
    }

    if let Some(lte) = lte {
        while end > start && cmp_version_prefix(group[end - 1].version(), &lte) == Ordering::Greater
        {
            end -= 1;
        }
    }

    group[start..end].to_vec()
}

/// Split an expression into resolved `gte`/`lte` endpoints. `None` means
/// the bound is open (an `oldest`/`latest` keyword that found nothing to
/// anchor on, e.g. a group of version-less manifests).
fn resolve_range(group: &[&Manifest], expr: &str) -> (Option<String>, Option<String>) {
    let (left, right) = match expr.split_once("..") {
        Some((left, right)) => (left, right),
        None => (expr, expr),
    };

    let left = if left.is_empty() { "oldest" } else { left };
    let right = if right.is_empty() { "latest" } else { right };

    (resolve_endpoint(group, left), resolve_endpoint(group, right))
}

fn resolve_endpoint(group: &[&Manifest], endpoint: &str) -> Option<String> {
    if group.is_empty() {
        return None;
    }

    if endpoint == "oldest" {
        return group[0].version().map(str::to_string);
    }

    if endpoint == "latest" {
        return latest(group, 0);
    }

    if let Ok(n) = endpoint.parse::<i64>() {
        if n < 0 {
            return latest(group, n.unsigned_abs() as usize);
        }
    }

    Some(endpoint.to_string())
}

/// The `n`th-from-latest stable version. With no stable versions at all,
/// `latest` (n = 0) falls back to the last prerelease; running out of
/// stable versions falls back to the oldest candidate.
fn latest(group: &[&Manifest], n: usize) -> Option<String> {
    let mut remaining = n;

    for manifest in group.iter().rev() {
        if let Some(version) = manifest.version() {
            if !is_prerelease(version) {
                if remaining == 0 {
                    return Some(version.to_string());
                }
                remaining -= 1;
            }
        }
    }

    if n == 0 {
        if let Some(version) = group
            .iter()
            .rev()
            .find_map(|manifest| manifest.version().filter(|v| is_prerelease(v)))
        {
            return Some(version.to_string());
        }
    }

    group.first().and_then(|manifest| manifest.version()).map(str::to_string)
}
