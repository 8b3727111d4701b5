//! Color-theme bootstrap.
//!
//! Resolves the user's preference (stored override, else the system
//! `prefers-color-scheme`) and stamps a `data-theme` attribute on the
//! `<html>` element. Browser-only; server rendering leaves the attribute
//! unset and lets hydration decide.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "tunemate_theme";

/// Resolve the effective theme from a stored override and the system hint.
///
/// `stored` is the raw localStorage value (`"dark"` / `"light"`); anything
/// else falls through to `system_dark`.
#[must_use]
pub fn dark_enabled(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some("dark") => true,
        Some("light") => false,
        _ => system_dark,
    }
}

/// Resolve and apply the theme. Call once the app is live in the browser.
pub fn bootstrap() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        let dark = dark_enabled(stored.as_deref(), system_dark);
        if let Some(el) = window.document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
}
