//! Capability seam for the navigation side effects of canned replies.
//!
//! Reply selection stays pure; anything that actually moves the browser
//! goes through [`Navigator`], so tests can record navigations instead of
//! performing them.

use crate::chat::replies::SideEffect;

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

/// Performs navigation on behalf of the chat engine.
pub trait Navigator {
    /// Open an external URL in a new tab. Fire-and-forget: popup blockers
    /// may refuse and the conversation continues regardless.
    fn open_external(&self, url: &str);

    /// Navigate the current document to an internal route.
    fn navigate_internal(&self, path: &str);
}

/// Dispatch a reply side effect through a navigator, if there is one.
pub fn apply_side_effect(navigator: &dyn Navigator, effect: Option<&SideEffect>) {
    match effect {
        Some(SideEffect::NavigateInternal(path)) => navigator.navigate_internal(path),
        Some(SideEffect::NavigateExternal(url)) => navigator.open_external(url),
        None => {}
    }
}

/// Browser-backed navigator.
#[cfg(feature = "hydrate")]
pub struct DomNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for DomNavigator {
    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.open_with_url_and_target(url, "_blank").is_err() {
            log::warn!("failed to open external url: {url}");
        }
    }

    fn navigate_internal(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().assign(path).is_err() {
            log::warn!("failed to navigate to {path}");
        }
    }
}
