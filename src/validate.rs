//! Structural check for persisted manifests.
//!
//! Callers use this to decide whether a cached manifest can be trusted or
//! has to be regenerated. It never fails and never modifies the candidate.

use serde_json::Value;

/// Return `candidate` unchanged if it has object-typed `mapping`,
/// `symbols` and `bundles` fields, `None` otherwise.
pub fn get_valid_manifest(candidate: Option<&Value>) -> Option<&Value> {
    let value = candidate?;
    let has_object = |field: &str| value.get(field).is_some_and(Value::is_object);

    if has_object("mapping") && has_object("symbols") && has_object("bundles") {
        Some(value)
    } else {
        None
    }
}

/// Whether `candidate` passes [`get_valid_manifest`].
pub fn is_valid_manifest(candidate: &Value) -> bool {
    get_valid_manifest(Some(candidate)).is_some()
}
