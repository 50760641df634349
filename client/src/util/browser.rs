//! Thin wrappers over the browser APIs the page touches.
//!
//! All functions are safe to call during server rendering: without the
//! `hydrate` feature they degrade to no-ops or deterministic values.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Point the window at `href` (used for `mailto:` hand-off).
pub fn navigate_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("navigate_to: no window");
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            log::warn!("navigate_to: browser rejected navigation: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Monotonic milliseconds for frame timing.
///
/// Prefers `performance.now()` and falls back to wall-clock time.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |perf| perf.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
