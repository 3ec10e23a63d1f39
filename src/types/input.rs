//! Inputs produced by the analyzer and the bundler.
//!
//! These are consumed as plain data; field names follow the camelCase JSON
//! the upstream tools emit.

use serde::{Deserialize, Serialize};

use super::options::{GlobalInjection, ManifestOptions};
use super::ordered::OrderedMap;
use super::symbol::CtxKind;

/// Static analysis record for one lazily loadable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookAnalysis {
    /// Symbol name; the manifest key.
    pub name: String,
    /// Source module path.
    #[serde(default)]
    pub origin: String,
    /// Human readable label.
    #[serde(default)]
    pub display_name: String,
    /// Compiled file stem.
    pub canonical_filename: String,
    /// Compiled file extension, without the dot.
    pub extension: String,
    /// Content hash.
    pub hash: String,
    /// Structural classification.
    #[serde(default)]
    pub ctx_kind: CtxKind,
    /// Event or function name.
    #[serde(default)]
    pub ctx_name: String,
    /// Whether the symbol closes over outer state.
    #[serde(default)]
    pub captures: bool,
    /// Enclosing symbol name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl HookAnalysis {
    /// Create a hook record compiled to `<canonical_filename>.js`.
    ///
    /// Defaults to a top-level, non-capturing `function` symbol with an
    /// empty context name.
    pub fn new(
        name: impl Into<String>,
        canonical_filename: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            origin: String::new(),
            canonical_filename: canonical_filename.into(),
            extension: "js".to_string(),
            hash: hash.into(),
            ctx_kind: CtxKind::Function,
            ctx_name: String::new(),
            captures: false,
            parent: None,
        }
    }

    /// Classify as an event handler for `ctx_name`.
    pub fn event(mut self, ctx_name: impl Into<String>) -> Self {
        self.ctx_kind = CtxKind::Event;
        self.ctx_name = ctx_name.into();
        self
    }

    /// Classify as a named function `ctx_name`.
    pub fn function(mut self, ctx_name: impl Into<String>) -> Self {
        self.ctx_kind = CtxKind::Function;
        self.ctx_name = ctx_name.into();
        self
    }

    /// Set the classification directly.
    pub fn with_kind(mut self, ctx_kind: CtxKind, ctx_name: impl Into<String>) -> Self {
        self.ctx_kind = ctx_kind;
        self.ctx_name = ctx_name.into();
        self
    }

    /// Nest under `parent`.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the source module path.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the compiled file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Mark as capturing outer state.
    pub fn capturing(mut self) -> Self {
        self.captures = true;
        self
    }

    /// The compiled file path suffix this hook is found under.
    pub fn build_file_path(&self) -> String {
        format!("{}.{}", self.canonical_filename, self.extension)
    }
}

/// Per-module details the bundler reports for a chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    /// Bytes the module contributes to the rendered chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_length: Option<u64>,
    /// Bytes of the original module source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_length: Option<u64>,
}

/// One output chunk produced by the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputChunk {
    /// Output path, relative to the bundler's output root.
    pub file_name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Statically imported chunk paths.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Dynamically imported chunk paths.
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
    /// Modules folded into this chunk, in bundler order.
    #[serde(default)]
    pub modules: OrderedMap<ModuleInfo>,
}

impl OutputChunk {
    /// Create an empty chunk.
    pub fn new(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size,
            imports: Vec::new(),
            dynamic_imports: Vec::new(),
            modules: OrderedMap::new(),
        }
    }

    /// Add a static import.
    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Add a dynamic import.
    pub fn with_dynamic_import(mut self, path: impl Into<String>) -> Self {
        self.dynamic_imports.push(path.into());
        self
    }

    /// Add a module.
    pub fn with_module(mut self, path: impl Into<String>) -> Self {
        self.modules.insert(path.into(), ModuleInfo::default());
        self
    }

    /// Whether any module path ends with `build_file_path`.
    pub fn contains_build_file(&self, build_file_path: &str) -> bool {
        self.modules.keys().any(|m| m.ends_with(build_file_path))
    }
}

/// Everything needed for one manifest build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInput {
    /// Analyzer hook records.
    #[serde(default)]
    pub hooks: Vec<HookAnalysis>,
    /// Global injections, passed through.
    #[serde(default)]
    pub injections: Vec<GlobalInjection>,
    /// Bundler output chunks.
    #[serde(default)]
    pub chunks: Vec<OutputChunk>,
    /// Build configuration snapshot.
    #[serde(default)]
    pub options: ManifestOptions,
}
