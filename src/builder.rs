//! Manifest orchestration.
//!
//! `ManifestBuilder` stages symbol assignments and bundle records for one
//! build. Nothing it holds is a finished manifest: the draft is folded into
//! canonical form by [`finalize`] in [`ManifestBuilder::build`].
//!
//! ```text
//! hooks ──► register_symbol ──► record_bundle (containing chunk)
//! chunks ─────────────────────► record_bundle (every chunk)
//!                                   │
//!                                   ▼
//!                               finalize ──► Manifest
//! ```

use crate::assemble::record_bundle;
use crate::error::ManifestError;
use crate::finalize::finalize;
use crate::register::assign_symbol;
use crate::types::{
    Bundle, BuildInput, GlobalInjection, HookAnalysis, Manifest, ManifestOptions, OrderedMap,
    OutputChunk, Symbol,
};

/// Builder for manifests.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    symbols: OrderedMap<Symbol>,
    mapping: OrderedMap<String>,
    bundles: OrderedMap<Bundle>,
    injections: Vec<GlobalInjection>,
    options: ManifestOptions,
}

impl ManifestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global injections.
    pub fn injections(mut self, injections: Vec<GlobalInjection>) -> Self {
        self.injections = injections;
        self
    }

    /// Set the build options snapshot.
    pub fn options(mut self, options: ManifestOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of symbols registered so far.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of bundles recorded so far.
    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    /// Register `hook` against the chunk containing its compiled file.
    ///
    /// Returns `false` when no chunk contains it; the hook is then left out
    /// of the manifest.
    pub fn register_symbol(
        &mut self,
        hook: &HookAnalysis,
        chunks: &[OutputChunk],
    ) -> Result<bool, ManifestError> {
        let Some(assignment) = assign_symbol(hook, chunks)? else {
            return Ok(false);
        };

        self.mapping.insert(assignment.name.clone(), assignment.bundle);
        self.symbols.insert(assignment.name, assignment.symbol);
        record_bundle(&mut self.bundles, assignment.chunk)?;
        Ok(true)
    }

    /// Record `chunk` as a bundle if not already present.
    pub fn record_bundle(&mut self, chunk: &OutputChunk) -> Result<bool, ManifestError> {
        record_bundle(&mut self.bundles, chunk)
    }

    /// Register every hook, then record every chunk, in input order.
    pub fn add_build_output(
        mut self,
        hooks: &[HookAnalysis],
        chunks: &[OutputChunk],
    ) -> Result<Self, ManifestError> {
        let mut registered = 0usize;
        for hook in hooks {
            if self.register_symbol(hook, chunks)? {
                registered += 1;
            }
        }
        for chunk in chunks {
            self.record_bundle(chunk)?;
        }

        tracing::debug!(
            hooks = hooks.len(),
            registered,
            skipped = hooks.len() - registered,
            chunks = chunks.len(),
            bundles = self.bundles.len(),
            "Build output staged"
        );
        Ok(self)
    }

    /// Finalize into a canonical manifest.
    pub fn build(self) -> Manifest {
        let mut manifest = Manifest::new(self.injections, self.options);
        manifest.symbols = self.symbols;
        manifest.mapping = self.mapping;
        manifest.bundles = self.bundles;
        finalize(manifest)
    }
}

/// Build the manifest for one bundler run.
///
/// Hooks whose compiled file is in no chunk are dropped. Every chunk gets a
/// bundle record, including chunks with no symbols. Malformed input (an
/// empty chunk file name or hook name) fails the build.
pub fn build_manifest(
    hooks: &[HookAnalysis],
    injections: Vec<GlobalInjection>,
    chunks: &[OutputChunk],
    options: ManifestOptions,
) -> Result<Manifest, ManifestError> {
    Ok(ManifestBuilder::new()
        .injections(injections)
        .options(options)
        .add_build_output(hooks, chunks)?
        .build())
}

impl BuildInput {
    /// Build the manifest for this input.
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        build_manifest(
            &self.hooks,
            self.injections.clone(),
            &self.chunks,
            self.options.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chunks() -> Vec<OutputChunk> {
        vec![
            OutputChunk::new("build/q-foo.js", 10)
                .with_module("src/foo.js")
                .with_import("build/q-shared.js"),
            OutputChunk::new("build/q-bar.js", 20).with_module("src/bar.js"),
            OutputChunk::new("build/q-shared.js", 30).with_module("node_modules/lib/index.js"),
        ]
    }

    #[test]
    fn test_register_symbol_records_containing_bundle() {
        let chunks = make_chunks();
        let mut builder = ManifestBuilder::new();

        let hook = HookAnalysis::new("s_foo", "foo", "a").event("click");
        assert!(builder.register_symbol(&hook, &chunks).unwrap());
        assert_eq!(builder.symbol_count(), 1);
        assert_eq!(builder.bundle_count(), 1);

        let gone = HookAnalysis::new("s_gone", "gone", "b");
        assert!(!builder.register_symbol(&gone, &chunks).unwrap());
        assert_eq!(builder.symbol_count(), 1);
    }

    #[test]
    fn test_every_chunk_gets_a_bundle() {
        let chunks = make_chunks();
        let hooks = vec![HookAnalysis::new("s_foo", "foo", "a").event("click")];

        let manifest = build_manifest(&hooks, vec![], &chunks, ManifestOptions::default()).unwrap();
        let names: Vec<_> = manifest.bundles.keys().collect();
        assert_eq!(names, vec!["q-bar.js", "q-foo.js", "q-shared.js"]);
        assert_eq!(manifest.symbols_in_bundle("q-foo.js"), ["s_foo".to_string()]);
        assert!(manifest.symbols_in_bundle("q-shared.js").is_empty());
        assert!(manifest.check_integrity().is_empty());
    }

    #[test]
    fn test_passthrough_fields() {
        let injections = vec![GlobalInjection::stylesheet("/build/q-global.css")];
        let options = ManifestOptions {
            force_full_build: true,
            ..ManifestOptions::default()
        };

        let manifest = build_manifest(&[], injections.clone(), &[], options.clone()).unwrap();
        assert_eq!(manifest.injections, injections);
        assert_eq!(manifest.options, options);
        assert_eq!(manifest.version, crate::MANIFEST_VERSION);
        assert!(manifest.symbols.is_empty());
    }

    #[test]
    fn test_empty_chunk_name_fails_build() {
        let chunks = vec![OutputChunk::new("", 1)];
        let err = build_manifest(&[], vec![], &chunks, ManifestOptions::default()).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyFileName));
    }

    #[test]
    fn test_build_input() {
        let input = BuildInput {
            hooks: vec![HookAnalysis::new("s_bar", "bar", "c").function("component$")],
            chunks: make_chunks(),
            ..BuildInput::default()
        };

        let manifest = input.build().unwrap();
        assert_eq!(manifest.bundle_for_symbol("s_bar"), Some("q-bar.js"));
    }
}
