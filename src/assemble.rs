//! Bundle assembly: one output chunk to one bundle record.
//!
//! Only import edges between chunks in the same output directory are kept,
//! rewritten relative to that directory. Cross-directory edges are dropped.

use crate::error::ManifestError;
use crate::types::bundle::non_empty;
use crate::types::{Bundle, OrderedMap, OutputChunk};

/// Directory part of a `/`-separated path; `.` when there is none.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((dir, _)) => dir,
        None => ".",
    }
}

/// Final component of a `/`-separated path.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Keep paths in `dir`, each rewritten relative to it.
fn same_dir_relative(dir: &str, paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .filter(|p| dirname(p) == dir)
        .map(|p| basename(p).to_string())
        .collect()
}

/// Build the bundle record for `chunk`, keyed by its file's basename.
pub fn assemble_bundle(chunk: &OutputChunk) -> Result<(String, Bundle), ManifestError> {
    if chunk.file_name.is_empty() {
        return Err(ManifestError::EmptyFileName);
    }

    let build_dir = dirname(&chunk.file_name);
    let bundle = Bundle {
        size: chunk.size,
        imports: non_empty(same_dir_relative(build_dir, &chunk.imports)),
        dynamic_imports: non_empty(same_dir_relative(build_dir, &chunk.dynamic_imports)),
        origins: non_empty(chunk.modules.keys().cloned().collect()),
        symbols: None,
    };

    Ok((basename(&chunk.file_name).to_string(), bundle))
}

/// Record `chunk` in `bundles` unless a bundle with its name already exists.
///
/// Returns whether a new bundle was added. The first record for a name
/// wins, so a chunk seen once as a symbol container and again in the
/// general sweep is recorded once.
pub fn record_bundle(
    bundles: &mut OrderedMap<Bundle>,
    chunk: &OutputChunk,
) -> Result<bool, ManifestError> {
    if chunk.file_name.is_empty() {
        return Err(ManifestError::EmptyFileName);
    }
    if bundles.contains_key(basename(&chunk.file_name)) {
        tracing::trace!(file_name = %chunk.file_name, "Bundle already recorded");
        return Ok(false);
    }

    let (name, bundle) = assemble_bundle(chunk)?;
    bundles.insert(name, bundle);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_helpers() {
        assert_eq!(dirname("build/q-a.js"), "build");
        assert_eq!(dirname("a/b/q-a.js"), "a/b");
        assert_eq!(dirname("q-a.js"), ".");
        assert_eq!(dirname("/q-a.js"), "/");
        assert_eq!(basename("build/q-a.js"), "q-a.js");
        assert_eq!(basename("q-a.js"), "q-a.js");
    }

    #[test]
    fn test_minimal_bundle() {
        let (name, bundle) = assemble_bundle(&OutputChunk::new("build/q-a.js", 10)).unwrap();
        assert_eq!(name, "q-a.js");
        assert_eq!(bundle, Bundle::new(10));
    }

    #[test]
    fn test_imports_scoped_to_directory() {
        let chunk = OutputChunk::new("build/q-a.js", 10)
            .with_import("build/q-core.js")
            .with_import("vendor/q-lib.js")
            .with_import("q-root.js")
            .with_dynamic_import("build/nested/q-deep.js")
            .with_dynamic_import("build/q-lazy.js");

        let (_, bundle) = assemble_bundle(&chunk).unwrap();
        assert_eq!(bundle.imports, Some(vec!["q-core.js".to_string()]));
        assert_eq!(bundle.dynamic_imports, Some(vec!["q-lazy.js".to_string()]));
    }

    #[test]
    fn test_root_level_chunk_imports() {
        let chunk = OutputChunk::new("q-a.js", 10)
            .with_import("q-b.js")
            .with_import("build/q-c.js");

        let (_, bundle) = assemble_bundle(&chunk).unwrap();
        assert_eq!(bundle.imports, Some(vec!["q-b.js".to_string()]));
    }

    #[test]
    fn test_only_cross_directory_imports_yields_none() {
        let chunk = OutputChunk::new("build/q-a.js", 10).with_dynamic_import("other/q-b.js");

        let (_, bundle) = assemble_bundle(&chunk).unwrap();
        assert_eq!(bundle.dynamic_imports, None);
    }

    #[test]
    fn test_origins_keep_module_order() {
        let chunk = OutputChunk::new("q-a.js", 10)
            .with_module("src/z.js")
            .with_module("src/a.js");

        let (_, bundle) = assemble_bundle(&chunk).unwrap();
        assert_eq!(
            bundle.origins,
            Some(vec!["src/z.js".to_string(), "src/a.js".to_string()])
        );
    }

    #[test]
    fn test_record_bundle_first_writer_wins() {
        let mut bundles = OrderedMap::new();
        let first = OutputChunk::new("build/q-a.js", 10).with_import("build/q-b.js");
        let second = OutputChunk::new("build/q-a.js", 99);

        assert!(record_bundle(&mut bundles, &first).unwrap());
        let once = bundles.clone();
        assert!(!record_bundle(&mut bundles, &first).unwrap());
        assert_eq!(bundles, once);
        assert!(!record_bundle(&mut bundles, &second).unwrap());
        assert_eq!(bundles.get("q-a.js").map(|b| b.size), Some(10));
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let mut bundles = OrderedMap::new();
        let err = record_bundle(&mut bundles, &OutputChunk::new("", 1)).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyFileName));
        assert!(bundles.is_empty());
    }
}
