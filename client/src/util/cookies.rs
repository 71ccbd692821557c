//! Read-only cookie access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page only needs read-by-key. `DocumentCookies` reads
//! `document.cookie` in the browser and is a no-op during SSR, while
//! `CookieString` parses a raw `name=value; ...` string and backs tests.

use std::borrow::Cow;

use cookie::Cookie;

/// Read-by-key access to stored cookies.
pub trait CookieStore {
    /// Value stored under `name`, if any. An empty value is returned as-is;
    /// callers decide what an empty value means.
    fn read(&self, name: &str) -> Option<String>;
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }
}

/// Find `name` in a `document.cookie` style string.
///
/// Malformed pairs are skipped; the first matching cookie wins. The value is
/// percent-decoded when it decodes to UTF-8 and returned raw otherwise, so a
/// stored value is never lost to its encoding.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| decode_value(c.value()))
}

fn decode_value(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_owned(), Cow::into_owned)
}

/// Cookies visible to scripts in the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieStore for DocumentCookies {
    fn read(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            let raw = html.cookie().ok()?;
            let value = find_cookie(&raw, name);
            log::debug!("cookie {name}: {}", if value.is_some() { "present" } else { "absent" });
            value
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }
}

/// Cookie store over a fixed raw cookie string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieString(String);

impl From<&str> for CookieString {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl CookieStore for CookieString {
    fn read(&self, name: &str) -> Option<String> {
        find_cookie(&self.0, name)
    }
}

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;
