//! Version ordering for capability manifests.
//!
//! Browser farms report versions like `83.0`, `11.00.18362.890`, `80.0a1`
//! or `beta`, which do not follow semver. Ordering rules: dot-separated
//! numeric elements compare as integers; a version containing anything
//! other than digits and dots (or the empty string) is a prerelease and
//! sorts after every stable version; prereleases compare among themselves
//! by plain string order; a missing version sorts last of all.

use std::cmp::Ordering;

/// Whether `version` is a prerelease: empty, or containing any character
/// outside ASCII digits and `.`.
pub fn is_prerelease(version: &str) -> bool {
    version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Total order over optional version strings. A missing version sorts
/// after all present ones and equal to another missing one.
pub fn cmp_versions(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (is_prerelease(a), is_prerelease(b)) {
            (true, true) => a.cmp(b),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => cmp_stable(a, b),
        },
    }
}

/// Compare a candidate version against a range endpoint, considering only
/// as many elements as the endpoint has. A candidate with fewer elements
/// than the endpoint sorts lower; extra candidate elements are ignored, so
/// a shared prefix compares equal (`11.00.4.9` equals the endpoint
/// `11.0`). Prerelease endpoints match exactly or not at all.
pub fn cmp_version_prefix(candidate: Option<&str>, endpoint: &str) -> Ordering {
    let Some(candidate) = candidate else {
        return Ordering::Greater;
    };

    if is_prerelease(endpoint) {
        return if candidate == endpoint {
            Ordering::Equal
        } else if is_prerelease(candidate) {
            candidate.cmp(endpoint)
        } else {
            Ordering::Less
        };
    }

    if is_prerelease(candidate) {
        return Ordering::Greater;
    }

    let candidate: Vec<&str> = candidate.split('.').collect();
    let endpoint: Vec<&str> = endpoint.split('.').collect();

    for (ca, en) in candidate.iter().zip(endpoint.iter()) {
        match cmp_elements(ca, en) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    if candidate.len() < endpoint.len() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

fn cmp_stable(a: &str, b: &str) -> Ordering {
    let a: Vec<&str> = a.split('.').collect();
    let b: Vec<&str> = b.split('.').collect();

    for (ea, eb) in a.iter().zip(b.iter()) {
        match cmp_elements(ea, eb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    a.len().cmp(&b.len())
}

fn cmp_elements(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}
