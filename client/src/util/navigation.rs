//! Full-page navigation.
//!
//! Leaving for the backend's OAuth endpoint must replace the current document,
//! so this goes through `window.location` rather than the client router.
//! Failures are left to the browser; the hydrate build only logs them.

pub trait Navigator {
    /// Navigate the current browsing context to `url`.
    fn navigate_to(&self, url: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate_to(&self, url: &str) {
        (**self).navigate_to(url);
    }
}

/// Navigates through `window.location.href`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("no window; cannot navigate to {url}");
                return;
            };
            if let Err(e) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
