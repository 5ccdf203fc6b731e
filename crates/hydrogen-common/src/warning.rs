//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tokenizer and tree builder to report malformed markup that was
//! recovered from without failing the parse.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are written to stderr at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about recovered malformed input (prints once per unique message)
///
/// # Example
/// ```
/// use hydrogen_common::warning::warn_once;
///
/// warn_once("HTML Tokenizer", "unrecognized character '&'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Hydrogen {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if this exact warning has been recorded since the last
/// [`clear_warnings`].
#[cfg(test)]
fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Turn stderr output on or off. Warnings are still recorded while disabled.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded() {
        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
        assert!(!has_warned("Test", "never emitted"));
    }

    #[test]
    fn test_warning_scoped_by_component() {
        warn_once("Tokenizer", "shared message");
        assert!(has_warned("Tokenizer", "shared message"));
        assert!(!has_warned("Parser", "shared message"));
    }

    #[test]
    fn test_disabled_warnings_still_recorded() {
        set_warnings_enabled(false);
        warn_once("Test", "silent");
        set_warnings_enabled(true);
        assert!(has_warned("Test", "silent"));
    }
}
