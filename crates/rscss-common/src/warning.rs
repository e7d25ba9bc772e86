//! Linter warnings with deduplication.
//!
//! Notices that are not diagnostics (unresolvable nesting, skipped input)
//! are emitted once per unique message so a large stylesheet does not flood
//! the log.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Emit a warning through `tracing` (once per unique message).
///
/// Returns `true` when the warning was emitted, `false` when it had already
/// been seen since the last [`clear_warnings`].
///
/// # Example
/// ```ignore
/// warn_once("flatten", "nesting selector '&' outside of a rule: '& > .a'");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        tracing::warn!(component, "{message}");
    }
    should_emit
}

/// Clear all recorded warnings (call when starting a new run)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
