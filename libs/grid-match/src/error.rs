//! Error types for target matching.

use browsergrid_manifest::{ManifestError, WantedEntry};
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Target matching errors.
///
/// Matching is fail-fast: the first wanted entry that cannot be satisfied
/// aborts the whole resolution, carrying the offending entry for
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// No available manifest satisfied the wanted entry's name, structure
    /// and version constraints.
    #[error("zero matches for {}", pretty(.0))]
    NoMatch(Box<WantedEntry>),

    /// The wanted entry itself is malformed (bad shape, or a version
    /// expression that is neither a string nor a number).
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

fn pretty(wanted: &WantedEntry) -> String {
    serde_json::to_string_pretty(wanted).unwrap_or_else(|_| format!("\"{}\"", wanted.name()))
}
