//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, location) from page
//! logic so the pages can be tested without a browser.

pub mod cookies;
pub mod navigation;
