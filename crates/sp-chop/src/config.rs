//! Strategy configuration and fingerprinting
//!
//! A [`ChopConfig`] is the externally-supplied `(name, params)` pair that
//! selects and parameterizes a slicing strategy. The parameter mapping
//! arrives already deserialized (config-file parsing lives outside this
//! crate); the engine only binds it.
//!
//! The fingerprint keys externally cached slice sets: identical
//! `(name, params)` always hash identically, regardless of the order the
//! parameter keys were inserted in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// A named strategy plus its raw parameter mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChopConfig {
    /// Registry name of the strategy (e.g. `"tile"`, `"filtered_full"`)
    pub name: String,

    /// Strategy parameters (`scale`, `step`, `slices`, `filter`, `upper`)
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ChopConfig {
    /// Create a config from a strategy name and parameter mapping
    pub fn new(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Content hash over `name + ":" + canonical-JSON(params)`
    ///
    /// Canonicalization sorts object keys recursively, so two mappings
    /// that differ only in key insertion order produce the same digest.
    /// Returned as lowercase hex.
    pub fn fingerprint(&self) -> String {
        let canonical = canonicalize(&Value::Object(self.params.clone()));

        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update(b":");
        hasher.update(canonical.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Recursively sort object keys so serialization order is deterministic
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
