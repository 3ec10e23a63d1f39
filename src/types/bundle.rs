//! Bundle records: one physical output file.

use serde::{Deserialize, Deserializer, Serialize};

/// A bundle entry in the manifest.
///
/// List fields are `None` rather than empty: absence means "no such
/// relation". Deserializing an empty list also yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Size of the output file in bytes.
    pub size: u64,
    /// Static imports of sibling bundles, relative to this bundle's directory.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub imports: Option<Vec<String>>,
    /// Dynamic imports of sibling bundles, relative to this bundle's directory.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub dynamic_imports: Option<Vec<String>>,
    /// Source modules folded into this bundle.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub origins: Option<Vec<String>>,
    /// Symbols whose code lives in this bundle.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub symbols: Option<Vec<String>>,
}

impl Bundle {
    /// Create a bundle with only a size.
    pub fn new(size: u64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Static imports, empty when there are none.
    pub fn imports(&self) -> &[String] {
        self.imports.as_deref().unwrap_or_default()
    }

    /// Dynamic imports, empty when there are none.
    pub fn dynamic_imports(&self) -> &[String] {
        self.dynamic_imports.as_deref().unwrap_or_default()
    }

    /// Symbol names, empty when there are none.
    pub fn symbols(&self) -> &[String] {
        self.symbols.as_deref().unwrap_or_default()
    }
}

/// `Some(list)` for a non-empty list, `None` otherwise.
pub(crate) fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(list.and_then(non_empty))
}
