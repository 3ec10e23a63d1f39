//! Canonical serialization for byte-stable manifests.
//!
//! ## Determinism Guarantees
//!
//! - Struct fields serialize in declaration order
//! - `OrderedMap` serializes in insertion order, which finalization fixes
//! - No `std::collections::HashMap` in serialized data: use `OrderedMap` or `BTreeMap`
//! - Compact output with no insignificant whitespace

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<u64, serde_json::Error> {
    let bytes = to_canonical_bytes(value)?;
    Ok(xxh64(&bytes, 0))
}

/// Compute canonical hash and return as a 16 digit hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(format!("{:016x}", canonical_hash(value)?))
}
