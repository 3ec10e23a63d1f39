//! Comparators used to put a manifest in canonical order.
//!
//! ## Symbol priority
//!
//! The first rule that distinguishes two symbols decides:
//!
//! 1. Event handlers before everything else
//! 2. Among events: listed event rank, listed before unlisted
//! 3. Among non-events: listed function rank, listed before unlisted
//! 4. Top-level symbols before nested ones
//! 5. Content hash, byte order
//!
//! Rules are folded into a `PriorityKey` so the order is total and a
//! comparison never re-derives ranks.

use std::cmp::Ordering;

use super::ranks::{event_rank, function_rank};
use crate::types::{CtxKind, Symbol};

/// Case-insensitive comparison.
///
/// Strings equal after case folding compare `Equal`; callers that need a
/// strict order chain a raw comparison after it.
pub fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Priority comparison of two symbols. `Less` means `a` loads first.
pub fn priority(a: &Symbol, b: &Symbol) -> Ordering {
    PriorityKey::of(a).cmp(&PriorityKey::of(b))
}

/// Precomputed sort key for a symbol.
///
/// Field order is comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey<'a> {
    /// 0 for events, 1 otherwise.
    tier: u8,
    /// Table rank; unlisted names sort last.
    rank: usize,
    /// Nested symbols after top-level ones.
    nested: bool,
    hash: &'a [u8],
}

impl<'a> PriorityKey<'a> {
    /// Compute the key for `symbol`.
    pub fn of(symbol: &'a Symbol) -> Self {
        let (tier, rank) = match symbol.ctx_kind {
            CtxKind::Event => (0, event_rank(&symbol.ctx_name)),
            CtxKind::Function => (1, function_rank(&symbol.ctx_name)),
            CtxKind::Other => (1, None),
        };
        Self {
            tier,
            rank: rank.unwrap_or(usize::MAX),
            nested: symbol.has_parent(),
            hash: symbol.hash.as_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_symbol(kind: CtxKind, ctx_name: &str, hash: &str, parent: Option<&str>) -> Symbol {
        Symbol {
            origin: "src/app.tsx".to_string(),
            display_name: format!("app_{ctx_name}"),
            canonical_filename: format!("app_{hash}"),
            hash: hash.to_string(),
            ctx_kind: kind,
            ctx_name: ctx_name.to_string(),
            captures: false,
            parent: parent.map(str::to_string),
        }
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        assert_eq!(alphabetical("Q-b.js", "q-a.js"), Ordering::Greater);
        assert_eq!(alphabetical("q-A.js", "q-b.js"), Ordering::Less);
        assert_eq!(alphabetical("Q-A.JS", "q-a.js"), Ordering::Equal);
    }

    #[test]
    fn test_event_before_function() {
        let click = make_symbol(CtxKind::Event, "click", "zzz", None);
        let component = make_symbol(CtxKind::Function, "component$", "aaa", None);

        assert_eq!(priority(&click, &component), Ordering::Less);
        assert_eq!(priority(&component, &click), Ordering::Greater);
    }

    #[test]
    fn test_unlisted_event_before_function() {
        let visible = make_symbol(CtxKind::Event, "onQVisible$", "zzz", Some("parent"));
        let task = make_symbol(CtxKind::Function, "useTask$", "aaa", None);

        assert_eq!(priority(&visible, &task), Ordering::Less);
    }

    #[test]
    fn test_event_table_order() {
        let click = make_symbol(CtxKind::Event, "click", "b", None);
        let scroll = make_symbol(CtxKind::Event, "scroll", "a", None);
        let custom = make_symbol(CtxKind::Event, "onCustom$", "0", None);

        assert_eq!(priority(&click, &scroll), Ordering::Less);
        assert_eq!(priority(&scroll, &custom), Ordering::Less);
    }

    #[test]
    fn test_function_table_order() {
        let task = make_symbol(CtxKind::Function, "useTask$", "z", Some("p"));
        let component = make_symbol(CtxKind::Function, "component$", "a", None);
        let styles = make_symbol(CtxKind::Function, "useStylesScoped$", "a", None);
        let other = make_symbol(CtxKind::Function, "server$", "0", None);

        assert_eq!(priority(&task, &component), Ordering::Less);
        assert_eq!(priority(&component, &styles), Ordering::Less);
        assert_eq!(priority(&styles, &other), Ordering::Less);
    }

    #[test]
    fn test_other_kinds_share_function_tier() {
        let component = make_symbol(CtxKind::Function, "component$", "z", None);
        let prop = make_symbol(CtxKind::Other, "onClick$", "a", None);
        let click = make_symbol(CtxKind::Event, "click", "z", None);

        // ranked function first; the event-looking name does not lift `Other`
        assert_eq!(priority(&component, &prop), Ordering::Less);
        assert_eq!(priority(&click, &prop), Ordering::Less);

        let unlisted = make_symbol(CtxKind::Function, "server$", "b", None);
        assert_eq!(priority(&prop, &unlisted), Ordering::Less);
    }

    #[test]
    fn test_unlisted_events_fall_through_to_parent_then_hash() {
        let nested = make_symbol(CtxKind::Event, "onA$", "a", Some("s_parent"));
        let top = make_symbol(CtxKind::Event, "onB$", "b", None);
        let top_later = make_symbol(CtxKind::Event, "onC$", "c", None);

        assert_eq!(priority(&top, &nested), Ordering::Less);
        assert_eq!(priority(&top, &top_later), Ordering::Less);
    }

    #[test]
    fn test_hash_is_byte_order() {
        let upper = make_symbol(CtxKind::Function, "", "Zeta", None);
        let lower = make_symbol(CtxKind::Function, "", "alpha", None);

        // 'Z' (0x5a) sorts before 'a' (0x61)
        assert_eq!(priority(&upper, &lower), Ordering::Less);
        assert_eq!(priority(&upper, &upper.clone()), Ordering::Equal);
    }
}
