//! Symbol records: one lazily invocable unit of code.

use serde::{Deserialize, Serialize};

use super::input::HookAnalysis;

/// Structural classification of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtxKind {
    /// Event handler (`onClick$`, `onInput$`, ...).
    Event,
    /// Named lifecycle or definition function (`component$`, `useTask$`, ...).
    Function,
    /// Anything else the analyzer reports.
    #[serde(other)]
    Other,
}

impl Default for CtxKind {
    fn default() -> Self {
        Self::Function
    }
}

/// A symbol entry in the manifest.
///
/// `parent` names the enclosing symbol. It is a weak reference used only
/// for ordering: the parent may be absent from the manifest entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Source module path the symbol was extracted from.
    pub origin: String,
    /// Human readable label.
    pub display_name: String,
    /// Compiled file stem used to locate the output chunk.
    pub canonical_filename: String,
    /// Content hash; final ordering tie-break.
    pub hash: String,
    /// Structural classification.
    pub ctx_kind: CtxKind,
    /// Event or function name used for priority lookup.
    pub ctx_name: String,
    /// Whether the symbol closes over outer state.
    pub captures: bool,
    /// Name of the enclosing symbol, if nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Symbol {
    /// Whether the symbol is nested under another symbol.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

impl From<&HookAnalysis> for Symbol {
    fn from(hook: &HookAnalysis) -> Self {
        Self {
            origin: hook.origin.clone(),
            display_name: hook.display_name.clone(),
            canonical_filename: hook.canonical_filename.clone(),
            hash: hook.hash.clone(),
            ctx_kind: hook.ctx_kind,
            ctx_name: hook.ctx_name.clone(),
            captures: hook.captures,
            parent: hook.parent.clone(),
        }
    }
}
