//! Build configuration snapshot carried through to the manifest.
//!
//! These values are not interpreted while building the manifest. They are
//! recorded so a consumer can tell which build produced it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Platform the build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Browser client build.
    Client,
    /// Server-side rendering build.
    Ssr,
    /// Library build.
    Lib,
    /// Test build.
    Test,
}

impl Default for Target {
    fn default() -> Self {
        Self::Client
    }
}

/// Optimization mode of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Development build.
    Development,
    /// Production build.
    Production,
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::Development
    }
}

/// How symbols were grouped into entry chunks.
///
/// Each strategy may carry manual chunk assignments (symbol hash to chunk
/// name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryStrategy {
    /// Symbols stay inline in their defining module.
    Inline,
    /// Symbols are hoisted but not split.
    Hoist,
    /// Every symbol in one chunk.
    Single {
        /// Manual chunk assignments.
        #[serde(rename = "manualChunks", default, skip_serializing_if = "Option::is_none")]
        manual_chunks: Option<BTreeMap<String, String>>,
    },
    /// One chunk per symbol.
    Hook {
        /// Manual chunk assignments.
        #[serde(rename = "manualChunks", default, skip_serializing_if = "Option::is_none")]
        manual_chunks: Option<BTreeMap<String, String>>,
    },
    /// One chunk per component.
    Component {
        /// Manual chunk assignments.
        #[serde(rename = "manualChunks", default, skip_serializing_if = "Option::is_none")]
        manual_chunks: Option<BTreeMap<String, String>>,
    },
    /// Bundler-driven grouping.
    Smart {
        /// Manual chunk assignments.
        #[serde(rename = "manualChunks", default, skip_serializing_if = "Option::is_none")]
        manual_chunks: Option<BTreeMap<String, String>>,
    },
}

impl Default for EntryStrategy {
    fn default() -> Self {
        Self::Smart { manual_chunks: None }
    }
}

/// Reproducibility-relevant snapshot of the build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestOptions {
    /// Build target.
    pub target: Target,
    /// Build mode.
    pub build_mode: BuildMode,
    /// Whether the build ignored incremental state.
    pub force_full_build: bool,
    /// Chunking strategy.
    pub entry_strategy: EntryStrategy,
}

/// Where a global injection is placed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionLocation {
    /// Inside `<head>`.
    Head,
    /// Inside `<body>`.
    Body,
}

/// An element the renderer injects into every document (stylesheets etc).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalInjection {
    /// Element tag name.
    pub tag: String,
    /// Element attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    /// Placement.
    pub location: InjectionLocation,
}

impl GlobalInjection {
    /// A `<link rel="stylesheet">` injected into the head.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("rel".to_string(), "stylesheet".to_string());
        attributes.insert("href".to_string(), href.into());
        Self {
            tag: "link".to_string(),
            attributes: Some(attributes),
            location: InjectionLocation::Head,
        }
    }
}
