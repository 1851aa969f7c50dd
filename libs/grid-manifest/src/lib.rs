//! Capability manifest model for browser/device test targets.
//!
//! A manifest is a tree-shaped JSON record describing one runnable test
//! target, such as a browser offering of a remote test farm. This crate
//! keeps manifests as raw `serde_json` trees behind typed accessors and
//! provides dotted-path traversal, wanted-entry normalization, and the
//! custom (non-semver) version ordering browser farms use.
//!
//! # Example
//!
//! ```rust
//! use browsergrid_manifest::{cmp_versions, Manifest};
//! use serde_json::json;
//! use std::cmp::Ordering;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = Manifest::from_value(json!({
//!     "name": "chrome",
//!     "version": "83.0",
//!     "platform": "linux"
//! }))?;
//!
//! assert_eq!(manifest.name(), "chrome");
//! assert_eq!(manifest.value_at("platform"), Some(&json!("linux")));
//! assert_eq!(cmp_versions(Some("2.0"), Some("10.0")), Ordering::Less);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manifest;
pub mod path;
pub mod version;

pub use error::{ManifestError, Result};
pub use manifest::{explode_versions, Manifest, WantedEntry};
pub use path::value_at;
pub use version::{cmp_version_prefix, cmp_versions, is_prerelease};
