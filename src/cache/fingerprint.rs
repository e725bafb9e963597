//! Query Fingerprint Module
//!
//! Derives deterministic cache keys from an operation name and its
//! parameter mapping. Parameters are canonicalized by recursively sorting
//! object keys before hashing, so the order in which a caller assembled
//! the mapping never affects the resulting key.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

// == Fingerprint ==
/// Deterministic identifier for one logical query: operation name plus
/// canonicalized parameters, hashed to a fixed-width hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Returns the hex digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// == Fingerprint Derivation ==
/// Computes the fingerprint for (operation name, parameters).
///
/// Pure function: identical inputs always produce identical output.
/// Parameters are serialized with all object keys sorted recursively and
/// hashed with SHA-256 alongside the operation name. The name and the
/// parameter bytes are length-prefixed so that no boundary ambiguity
/// between the two segments can produce a collision.
///
/// # Arguments
/// * `operation` - Stable, non-empty name of the analytical operation
/// * `params` - JSON-representable parameter mapping for the operation
pub fn fingerprint(operation: &str, params: &Value) -> Fingerprint {
    let canonical = canonicalize(params);
    // Serializing a serde_json::Value cannot fail: every key is a string
    // and every value is already a JSON tree.
    let param_bytes = serde_json::to_vec(&canonical)
        .expect("JSON value serialization is infallible");

    let mut hasher = Sha256::new();
    hasher.update((operation.len() as u64).to_le_bytes());
    hasher.update(operation.as_bytes());
    hasher.update((param_bytes.len() as u64).to_le_bytes());
    hasher.update(&param_bytes);
    Fingerprint(format!("{:x}", hasher.finalize()))
}

// == Canonicalization ==
/// Rebuilds a JSON value with every object's keys in sorted order,
/// applied recursively through nested objects and arrays.
///
/// Array element order is preserved: an ordered sequence is part of the
/// parameter value, unlike mapping insertion order which is an accident
/// of construction.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut pairs: Vec<(&String, &Value)> = map.iter().collect();
            pairs.sort_by_key(|(key, _)| key.as_str());
            let mut sorted = Map::new();
            for (key, inner) in pairs {
                sorted.insert(key.clone(), canonicalize(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        scalar => scalar.clone(),
    }
}
