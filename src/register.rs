//! Symbol registration: matching hook records to output chunks.

use crate::assemble::basename;
use crate::error::ManifestError;
use crate::types::{HookAnalysis, OutputChunk, Symbol};

/// A hook matched to the chunk that contains its compiled file.
#[derive(Debug, Clone)]
pub struct SymbolAssignment<'a> {
    /// Symbol name.
    pub name: String,
    /// Symbol record.
    pub symbol: Symbol,
    /// Bundle file name (basename of the chunk file name).
    pub bundle: String,
    /// The containing chunk.
    pub chunk: &'a OutputChunk,
}

/// First chunk, in input order, with a module ending in the hook's
/// `<canonical_filename>.<extension>`.
pub fn locate_chunk<'a>(hook: &HookAnalysis, chunks: &'a [OutputChunk]) -> Option<&'a OutputChunk> {
    let build_file_path = hook.build_file_path();
    chunks.iter().find(|c| c.contains_build_file(&build_file_path))
}

/// Match `hook` to its chunk.
///
/// `Ok(None)` when no chunk contains the hook's compiled file: the symbol
/// was eliminated from the output and is left out of the manifest.
pub fn assign_symbol<'a>(
    hook: &HookAnalysis,
    chunks: &'a [OutputChunk],
) -> Result<Option<SymbolAssignment<'a>>, ManifestError> {
    if hook.name.is_empty() {
        return Err(ManifestError::EmptyHookName(hook.canonical_filename.clone()));
    }

    let Some(chunk) = locate_chunk(hook, chunks) else {
        tracing::trace!(
            symbol = %hook.name,
            build_file = %hook.build_file_path(),
            "No output chunk contains symbol, skipping"
        );
        return Ok(None);
    };
    if chunk.file_name.is_empty() {
        return Err(ManifestError::EmptyFileName);
    }

    Ok(Some(SymbolAssignment {
        name: hook.name.clone(),
        symbol: Symbol::from(hook),
        bundle: basename(&chunk.file_name).to_string(),
        chunk,
    }))
}
