//! Core types for the manifest generator.

pub mod ordered;
pub mod symbol;
pub mod bundle;
pub mod options;
pub mod input;
pub mod manifest;

pub use ordered::OrderedMap;
pub use symbol::{Symbol, CtxKind};
pub use bundle::Bundle;
pub use options::{ManifestOptions, Target, BuildMode, EntryStrategy, GlobalInjection, InjectionLocation};
pub use input::{HookAnalysis, OutputChunk, ModuleInfo, BuildInput};
pub use manifest::{Manifest, IntegrityViolation};
