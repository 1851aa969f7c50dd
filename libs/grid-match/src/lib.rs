//! Matching of wanted browser/device test targets against a catalog of
//! capability manifests.
//!
//! Given a declarative "wanted" list and the manifests a test farm
//! advertises, this crate produces a deduplicated, fully specified set of
//! concrete targets: names are resolved through known aliases, structural
//! constraints are matched deep (wildcard-aware), version expressions
//! (`"latest"`, `"oldest..latest"`, `"-1"`, prerelease literals) are
//! resolved against the available versions, and interchangeable
//! candidates collapse to one winner via `preferredOver` tie-break rules.
//!
//! It is a selection engine, not a test runner: no network calls, no test
//! execution. Resolution is synchronous, side-effect-free on its inputs
//! and deterministic.
//!
//! # Example
//!
//! ```rust
//! use browsergrid_match::{match_targets, Manifest, WantedEntry};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let available = vec![
//!     Manifest::from_value(json!({ "name": "chrome", "version": "83.0" }))?,
//!     Manifest::from_value(json!({ "name": "chrome", "version": "84.0" }))?,
//!     Manifest::from_value(json!({ "name": "firefox", "version": "78.0" }))?,
//! ];
//! let wanted = vec![
//!     WantedEntry::from_value(json!({ "name": "chrome" }))?,
//! ];
//!
//! let matches = match_targets(&available, &wanted)?;
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].version(), Some("84.0"));
//! # Ok(())
//! # }
//! ```

pub mod aliases;
pub mod consolidate;
pub mod dedup;
pub mod env;
pub mod error;
pub mod matcher;
pub mod range;
pub mod resolver;

#[cfg(feature = "builtin-aliases")]
pub use aliases::BuiltinAliases;
pub use aliases::{AliasLookup, NoAliases};
pub use env::{Environment, ProcessEnvironment};
pub use error::{Error, Result};
#[cfg(feature = "builtin-aliases")]
pub use resolver::match_targets;
pub use resolver::TargetMatcher;

// Re-export the manifest model for convenience
pub use browsergrid_manifest::{Manifest, ManifestError, WantedEntry};
