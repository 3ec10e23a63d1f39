//! The manifest artifact.

use serde::{Deserialize, Serialize};

use super::bundle::Bundle;
use super::options::{GlobalInjection, ManifestOptions};
use super::ordered::{deserialize_unique_keys, OrderedMap};
use super::symbol::Symbol;
use crate::canonical::{canonical_hash_hex, to_canonical_bytes};
use crate::error::ManifestError;
use crate::validate::get_valid_manifest;
use crate::MANIFEST_VERSION;

/// Symbol-to-bundle manifest for one build.
///
/// After finalization `symbols` and `mapping` iterate in priority order and
/// `bundles` iterate in case-insensitive alphabetical order. Serialized
/// output is byte-stable for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Symbol name to symbol record.
    #[serde(deserialize_with = "deserialize_unique_keys")]
    pub symbols: OrderedMap<Symbol>,
    /// Symbol name to bundle file name.
    #[serde(deserialize_with = "deserialize_unique_keys")]
    pub mapping: OrderedMap<String>,
    /// Bundle file name to bundle record.
    #[serde(deserialize_with = "deserialize_unique_keys")]
    pub bundles: OrderedMap<Bundle>,
    /// Global injections, passed through unchanged.
    #[serde(default)]
    pub injections: Vec<GlobalInjection>,
    /// Format tag.
    pub version: String,
    /// Build configuration snapshot.
    #[serde(default)]
    pub options: ManifestOptions,
}

/// A broken cross-reference inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityViolation {
    /// A symbol has no mapping entry.
    #[error("Symbol {0} has no mapping entry")]
    UnmappedSymbol(String),
    /// A mapping entry has no symbol record.
    #[error("Mapping entry {0} has no symbol record")]
    OrphanMapping(String),
    /// A mapping entry points at a bundle that does not exist.
    #[error("Symbol {symbol} maps to unknown bundle {bundle}")]
    UnknownBundle {
        /// Symbol name.
        symbol: String,
        /// Bundle file name it maps to.
        bundle: String,
    },
    /// A bundle lists a symbol that maps elsewhere (or nowhere).
    #[error("Bundle {bundle} lists symbol {symbol} that is not mapped to it")]
    MisplacedSymbol {
        /// Bundle file name.
        bundle: String,
        /// Symbol name.
        symbol: String,
    },
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new(injections: Vec<GlobalInjection>, options: ManifestOptions) -> Self {
        Self {
            symbols: OrderedMap::new(),
            mapping: OrderedMap::new(),
            bundles: OrderedMap::new(),
            injections,
            version: MANIFEST_VERSION.to_string(),
            options,
        }
    }

    /// Bundle file name containing `symbol`.
    pub fn bundle_for_symbol(&self, symbol: &str) -> Option<&str> {
        self.mapping.get(symbol).map(String::as_str)
    }

    /// Symbols listed for `bundle`, empty if unknown.
    pub fn symbols_in_bundle(&self, bundle: &str) -> &[String] {
        self.bundles.get(bundle).map(Bundle::symbols).unwrap_or_default()
    }

    /// Compact JSON bytes. Identical manifests give identical bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, ManifestError> {
        Ok(to_canonical_bytes(self)?)
    }

    /// Indented JSON text, as written to disk.
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a persisted manifest.
    ///
    /// The document must pass the structural shape check and carry the
    /// current format version. Map entries keep document order and a
    /// repeated key is an error; finalize the result to re-derive canonical
    /// order.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        // `Value` objects are key-sorted, so it only serves the shape check.
        let value: serde_json::Value = serde_json::from_str(json)?;
        if get_valid_manifest(Some(&value)).is_none() {
            return Err(ManifestError::InvalidShape);
        }
        let manifest: Manifest = serde_json::from_str(json)?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion(manifest.version));
        }
        Ok(manifest)
    }

    /// Content fingerprint (xxh64 of the compact JSON), usable as a cache key.
    pub fn manifest_hash(&self) -> Result<String, ManifestError> {
        Ok(canonical_hash_hex(self)?)
    }

    /// Check cross-references between `symbols`, `mapping` and `bundles`.
    ///
    /// Returns every violation found; an empty list means the manifest is
    /// internally consistent.
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for name in self.symbols.keys() {
            match self.mapping.get(name) {
                None => violations.push(IntegrityViolation::UnmappedSymbol(name.to_string())),
                Some(bundle) if !self.bundles.contains_key(bundle) => {
                    violations.push(IntegrityViolation::UnknownBundle {
                        symbol: name.to_string(),
                        bundle: bundle.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for name in self.mapping.keys() {
            if !self.symbols.contains_key(name) {
                violations.push(IntegrityViolation::OrphanMapping(name.to_string()));
            }
        }

        for (bundle_name, bundle) in self.bundles.iter() {
            for symbol in bundle.symbols() {
                if self.mapping.get(symbol).map(String::as_str) != Some(bundle_name.as_str()) {
                    violations.push(IntegrityViolation::MisplacedSymbol {
                        bundle: bundle_name.to_string(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        for violation in &violations {
            tracing::warn!(%violation, "Manifest integrity violation");
        }

        violations
    }
}
