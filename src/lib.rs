//! # lazy-manifest
//!
//! Deterministic manifest generation for lazily loaded output chunks.
//!
//! After a bundler has produced its output chunks, the manifest records
//! which lazily invocable symbol lives in which chunk, how chunks import
//! each other, and in what order symbols should be considered for
//! prefetching.
//!
//! ## Architecture
//!
//! ```text
//! HookAnalysis[] ─► register ─┐
//!                             ├─► assemble ─► finalize ─► Manifest
//! OutputChunk[] ──────────────┘
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same hooks + same chunks (in any order) → byte-identical JSON
//! - Symbol ordering is canonical (event rank, function rank, nesting, hash)
//! - Bundle ordering is canonical (case-insensitive file name)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod assemble;
pub mod register;
pub mod finalize;
pub mod validate;
pub mod builder;
pub mod canonical;
pub mod error;

// Re-exports
pub use types::{
    OrderedMap, Symbol, CtxKind, Bundle, Manifest, IntegrityViolation,
    ManifestOptions, Target, BuildMode, EntryStrategy, GlobalInjection, InjectionLocation,
    HookAnalysis, OutputChunk, ModuleInfo, BuildInput,
};
pub use policy::{alphabetical, priority, event_rank, function_rank, EVENT_PRIORITY, FUNCTION_PRIORITY};
pub use assemble::{assemble_bundle, record_bundle};
pub use register::{assign_symbol, locate_chunk, SymbolAssignment};
pub use finalize::{finalize, prioritize_symbol_names, sort_bundle_names};
pub use validate::{get_valid_manifest, is_valid_manifest};
pub use builder::{build_manifest, ManifestBuilder};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
pub use error::ManifestError;

/// Manifest format version written to every manifest.
pub const MANIFEST_VERSION: &str = "1";
