//! Manifest finalization: canonical, reproducible ordering.
//!
//! Global symbol order follows priority and drives cross-bundle prefetch.
//! A bundle's own symbol list is alphabetical for readability.

use std::collections::BTreeMap;
use std::cmp::Ordering;

use crate::policy::{alphabetical, PriorityKey};
use crate::types::{Bundle, Manifest, OrderedMap, Symbol};

/// Case-insensitive order with a raw tie-break, so names differing only in
/// case still land in a fixed order.
fn alphabetical_strict(a: &str, b: &str) -> Ordering {
    alphabetical(a, b).then_with(|| a.cmp(b))
}

/// Symbol names in priority order.
pub fn prioritize_symbol_names(symbols: &OrderedMap<Symbol>) -> Vec<String> {
    let mut keyed: Vec<(PriorityKey<'_>, &str)> = symbols
        .iter()
        .map(|(name, symbol)| (PriorityKey::of(symbol), name.as_str()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    keyed.into_iter().map(|(_, name)| name.to_string()).collect()
}

/// Bundle names in case-insensitive alphabetical order.
pub fn sort_bundle_names(bundles: &OrderedMap<Bundle>) -> Vec<String> {
    let mut names: Vec<String> = bundles.keys().cloned().collect();
    names.sort_by(|a, b| alphabetical_strict(a, b));
    names
}

/// Put `manifest` in canonical order.
///
/// - `symbols` and `mapping`: priority order; mapping entries with no
///   symbol are dropped
/// - `bundles`: alphabetical, each with sorted import lists and a freshly
///   derived, alphabetical `symbols` list
///
/// Finalizing a finalized manifest returns it unchanged.
pub fn finalize(manifest: Manifest) -> Manifest {
    let Manifest {
        symbols,
        mapping,
        bundles,
        injections,
        version,
        options,
    } = manifest;

    let order = prioritize_symbol_names(&symbols);

    let mut symbols_by_name: BTreeMap<String, Symbol> = symbols.into_iter().collect();
    let mut mapping_by_name: BTreeMap<String, String> = mapping.into_iter().collect();
    let mut prioritized_symbols = OrderedMap::with_capacity(order.len());
    let mut prioritized_mapping = OrderedMap::with_capacity(order.len());
    let mut symbols_per_bundle: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for name in order {
        if let Some(bundle_name) = mapping_by_name.remove(&name) {
            symbols_per_bundle
                .entry(bundle_name.clone())
                .or_default()
                .push(name.clone());
            prioritized_mapping.insert(name.clone(), bundle_name);
        }
        if let Some(symbol) = symbols_by_name.remove(&name) {
            prioritized_symbols.insert(name, symbol);
        }
    }

    let bundle_order = sort_bundle_names(&bundles);
    let mut bundles_by_name: BTreeMap<String, Bundle> = bundles.into_iter().collect();
    let mut sorted_bundles = OrderedMap::with_capacity(bundle_order.len());

    for name in bundle_order {
        let Some(mut bundle) = bundles_by_name.remove(&name) else {
            continue;
        };
        if let Some(imports) = bundle.imports.as_mut() {
            imports.sort_by(|a, b| alphabetical_strict(a, b));
        }
        if let Some(dynamic_imports) = bundle.dynamic_imports.as_mut() {
            dynamic_imports.sort_by(|a, b| alphabetical_strict(a, b));
        }
        bundle.symbols = symbols_per_bundle.remove(&name).map(|mut names| {
            names.sort_by(|a, b| alphabetical_strict(a, b));
            names
        });
        sorted_bundles.insert(name, bundle);
    }

    tracing::debug!(
        symbols = prioritized_symbols.len(),
        bundles = sorted_bundles.len(),
        "Manifest finalized"
    );

    Manifest {
        symbols: prioritized_symbols,
        mapping: prioritized_mapping,
        bundles: sorted_bundles,
        injections,
        version,
        options,
    }
}
