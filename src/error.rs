//! Error type for manifest generation.

/// Error type for manifest operations.
///
/// Unmatched hooks are not errors: they are dropped from the manifest.
/// These variants cover malformed input and unreadable persisted manifests.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// A chunk was given with an empty file name.
    #[error("Output chunk has an empty file name")]
    EmptyFileName,

    /// A hook record was given with an empty symbol name.
    #[error("Hook record for {0} has an empty symbol name")]
    EmptyHookName(String),

    /// A persisted manifest lacks object-typed `symbols`, `mapping` or `bundles`.
    #[error("Document is not a manifest: missing symbols, mapping or bundles object")]
    InvalidShape,

    /// A persisted manifest has a format version this crate does not read.
    #[error("Unsupported manifest version: {0}")]
    UnsupportedVersion(String),

    /// JSON encoding or decoding failed.
    #[error("Manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
