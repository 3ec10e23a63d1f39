//! Fixed priority tables for symbol classification.
//!
//! User-triggered events rank ahead of everything else, most urgent first.
//! Lookups go through name-to-rank maps built once on first use.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Event names from most to least urgent.
pub const EVENT_PRIORITY: &[&str] = &[
    // Click
    "click",
    "dblclick",
    "contextmenu",
    "auxclick",
    // Pointer
    "pointerdown",
    "pointerup",
    "pointermove",
    "pointerover",
    "pointerenter",
    "pointerleave",
    "pointerout",
    "pointercancel",
    "gotpointercapture",
    "lostpointercapture",
    // Touch
    "touchstart",
    "touchend",
    "touchmove",
    "touchcancel",
    // Mouse
    "mousedown",
    "mouseup",
    "mousemove",
    "mouseenter",
    "mouseleave",
    "mouseover",
    "mouseout",
    "wheel",
    // Gesture
    "gesturestart",
    "gesturechange",
    "gestureend",
    // Keyboard
    "keydown",
    "keyup",
    "keypress",
    // Input/change
    "input",
    "change",
    "search",
    "invalid",
    "beforeinput",
    "select",
    // Focus/blur
    "focusin",
    "focusout",
    "focus",
    "blur",
    // Form
    "submit",
    "reset",
    // Scroll
    "scroll",
];

/// Lifecycle/definition function names from most to least urgent.
pub const FUNCTION_PRIORITY: &[&str] = &[
    "useTask$",
    "useDocumentTask$",
    "component$",
    "useStyles$",
    "useStylesScoped$",
];

static EVENT_RANKS: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    EVENT_PRIORITY
        .iter()
        .enumerate()
        .map(|(rank, name)| (name.to_string(), rank))
        .collect()
});

static FUNCTION_RANKS: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    FUNCTION_PRIORITY
        .iter()
        .enumerate()
        .map(|(rank, name)| (normalize_function_name(name), rank))
        .collect()
});

fn normalize_function_name(name: &str) -> String {
    name.to_lowercase().trim_end_matches('$').to_string()
}

/// Rank of an event name, `None` if not listed.
///
/// Accepts the bare event name (`click`) or handler form (`onClick$`),
/// case-insensitively.
pub fn event_rank(ctx_name: &str) -> Option<usize> {
    let lower = ctx_name.to_lowercase();
    let bare = lower
        .strip_prefix("on")
        .and_then(|s| s.strip_suffix('$'))
        .unwrap_or(lower.as_str());
    EVENT_RANKS.get(bare).copied()
}

/// Rank of a function name, `None` if not listed.
///
/// Case-insensitive; the trailing `$` is optional.
pub fn function_rank(ctx_name: &str) -> Option<usize> {
    FUNCTION_RANKS.get(&normalize_function_name(ctx_name)).copied()
}
