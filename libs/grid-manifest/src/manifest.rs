//! Manifest and wanted-entry records.
//!
//! Both records are open JSON trees: besides the well-known fields
//! (`name`, `version`, `options`, `preferredOver`, `wants`) they carry
//! arbitrary nested capability fields that the matching engine compares
//! structurally. They are therefore stored as raw `serde_json` maps with
//! typed accessors on top, rather than as closed structs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ManifestError, Result};
use crate::path;

/// A catalog entry describing one available test target.
///
/// The only required field is `name`, the case-insensitive identity of
/// the target. Manifests are immutable inputs; the matching engine never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    raw: Map<String, Value>,
}

impl Manifest {
    /// Build a manifest from a JSON object, validating its minimal shape.
    pub fn from_map(raw: Map<String, Value>) -> Result<Self> {
        require_name(&raw)?;
        Ok(Self { raw })
    }

    /// Build a manifest from a JSON value; must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(raw) => Self::from_map(raw),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The target name. Guaranteed non-empty by construction.
    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// The target version, if declared as a string.
    pub fn version(&self) -> Option<&str> {
        self.raw.get("version").and_then(Value::as_str)
    }

    /// Whether this target needs credentials only present in a secure
    /// environment (`wants.secureEnv`).
    pub fn wants_secure_env(&self) -> bool {
        path::value_at(&self.raw, "wants.secureEnv")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Tie-break rules declared by this manifest: a mapping from a dotted
    /// field path to the set of values it prefers to win against.
    pub fn preferred_over(&self) -> Option<&Map<String, Value>> {
        self.raw.get("preferredOver").and_then(Value::as_object)
    }

    /// The manifest's own default `options`.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        self.raw.get("options").and_then(Value::as_object)
    }

    /// Resolve a dotted field path against this manifest.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        path::value_at(&self.raw, path)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Consume the manifest, yielding the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.raw
    }

    /// Copy of this manifest with `options` replaced.
    pub fn with_options(&self, options: Map<String, Value>) -> Manifest {
        let mut raw = self.raw.clone();
        raw.insert("options".to_string(), Value::Object(options));
        Manifest { raw }
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::deserialize(deserializer)?;
        Manifest::from_map(raw).map_err(serde::de::Error::custom)
    }
}

/// A caller-supplied partial specification to resolve against a catalog.
///
/// Same shape as [`Manifest`] plus an `options` payload that is merged
/// into (and overrides) the winning manifest's own `options`. All other
/// fields act as constraints; absent fields impose nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WantedEntry {
    raw: Map<String, Value>,
}

impl WantedEntry {
    /// Build a wanted entry from a JSON object, validating its minimal
    /// shape.
    pub fn from_map(raw: Map<String, Value>) -> Result<Self> {
        require_name(&raw)?;
        Ok(Self { raw })
    }

    /// Build a wanted entry from a JSON value; must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(raw) => Self::from_map(raw),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    /// Parse a wanted entry from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The wanted target name.
    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// The wanted version expression. After [`WantedEntry::normalized`]
    /// this is a string, or an array of strings until
    /// [`explode_versions`] has run.
    pub fn version(&self) -> Option<&Value> {
        self.raw.get("version")
    }

    /// Options to merge into the winning manifest.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        self.raw.get("options").and_then(Value::as_object)
    }

    /// Resolve a dotted field path against this entry.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        path::value_at(&self.raw, path)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Copy with matching defaults applied: lower-cased name, `version`
    /// defaulting to `"latest"`, `options` defaulting to `{}`, and the
    /// `iphone`/`ipad` device shorthand expanded into an `ios_saf` entry
    /// with a simulator `deviceName`.
    pub fn normalized(&self) -> Result<WantedEntry> {
        let mut raw = self.raw.clone();

        let name = self.name().to_lowercase();
        raw.insert("name".to_string(), Value::String(name.clone()));

        let version = canonical_version(raw.get("version"))?;
        raw.insert("version".to_string(), version);

        if !raw.contains_key("options") {
            raw.insert("options".to_string(), Value::Object(Map::new()));
        }

        if name == "iphone" || name == "ipad" {
            let device = if name == "iphone" {
                "iphone simulator"
            } else {
                "ipad simulator"
            };
            raw.insert("name".to_string(), Value::String("ios_saf".to_string()));

            let capabilities = raw
                .entry("capabilities".to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(capabilities) = capabilities {
                let appium = capabilities
                    .entry("appium".to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(appium) = appium {
                    appium
                        .entry("deviceName".to_string())
                        .or_insert_with(|| Value::String(device.to_string()));
                }
            }
        }

        Ok(WantedEntry { raw })
    }
}

impl<'de> Deserialize<'de> for WantedEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::deserialize(deserializer)?;
        WantedEntry::from_map(raw).map_err(serde::de::Error::custom)
    }
}

/// Expand wanted entries whose `version` is an array into one entry per
/// element, preserving order.
pub fn explode_versions(entries: Vec<WantedEntry>) -> Vec<WantedEntry> {
    entries
        .into_iter()
        .flat_map(|entry| match entry.raw.get("version") {
            Some(Value::Array(versions)) => {
                let versions = versions.clone();
                versions
                    .into_iter()
                    .map(|version| {
                        let mut raw = entry.raw.clone();
                        raw.insert("version".to_string(), version);
                        WantedEntry { raw }
                    })
                    .collect()
            }
            _ => vec![entry],
        })
        .collect()
}

fn require_name(raw: &Map<String, Value>) -> Result<()> {
    match raw.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(ManifestError::MissingName),
    }
}

/// Canonical form of a version expression: a lower-cased string, or a
/// flat array of such strings. Missing, null and empty expressions
/// default to `"latest"`; numbers are coerced to their decimal string.
fn canonical_version(value: Option<&Value>) -> Result<Value> {
    match value {
        None | Some(Value::Null) => Ok(Value::String("latest".to_string())),
        Some(Value::String(s)) if s.is_empty() => Ok(Value::String("latest".to_string())),
        Some(Value::String(s)) => Ok(Value::String(s.to_lowercase())),
        Some(Value::Number(n)) => Ok(Value::String(n.to_string())),
        Some(Value::Array(elements)) => {
            let mut flat = Vec::new();
            flatten_versions(elements, &mut flat)?;
            Ok(Value::Array(flat))
        }
        Some(other) => Err(ManifestError::InvalidVersion(other.clone())),
    }
}

fn flatten_versions(elements: &[Value], into: &mut Vec<Value>) -> Result<()> {
    for element in elements {
        match element {
            Value::Array(nested) => flatten_versions(nested, into)?,
            other => into.push(canonical_version(Some(other))?),
        }
    }
    Ok(())
}
