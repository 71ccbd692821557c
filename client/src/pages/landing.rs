//! Landing page: welcome back, or sign in with Google.
//!
//! The page renders anonymous first (on the server and on the first client
//! pass). After hydration a single effect reads the session cookie and, if a
//! marker is present, switches to the welcome state. Signing in leaves the app
//! entirely for the backend's OAuth endpoint.

use leptos::prelude::*;

use crate::config::BackendBase;
use crate::state::session::{LandingState, SessionCheck};
use crate::util::cookies::DocumentCookies;
use crate::util::navigation::{BrowserNavigator, Navigator};

pub const WELCOME_MESSAGE: &str = "Welcome back! You are logged in.";
pub const SIGN_IN_PROMPT: &str = "Gochi. Sign in with Google to continue.";
pub const SIGN_IN_LABEL: &str = "Sign in with Google";

/// Heading text for `state`.
pub fn headline(state: LandingState) -> &'static str {
    match state {
        LandingState::Anonymous => SIGN_IN_PROMPT,
        LandingState::Welcomed => WELCOME_MESSAGE,
    }
}

/// Send the browser to `{backend}/auth/google/login`.
pub fn sign_in<N: Navigator + ?Sized>(navigator: &N, backend: &BackendBase) {
    navigator.navigate_to(&backend.google_login_url());
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = RwSignal::new(SessionCheck::new());

    // Tracks no signals, so it runs once per page instance.
    Effect::new(move || {
        session.update(|check| {
            check.mount(&DocumentCookies);
        });
    });

    view! { <LandingContent state=Signal::derive(move || session.get().state())/> }
}

/// Heading plus, while anonymous, the sign-in button.
#[component]
pub fn LandingContent(#[prop(into)] state: Signal<LandingState>) -> impl IntoView {
    let backend = StoredValue::new(use_context::<BackendBase>().unwrap_or_default());

    view! {
        <main class="landing">
            <h1 class="landing__title">{move || headline(state.get())}</h1>
            <Show when=move || state.get().offers_sign_in()>
                <button
                    class="landing__button"
                    type="button"
                    on:click=move |_| backend.with_value(|base| sign_in(&BrowserNavigator, base))
                >
                    {SIGN_IN_LABEL}
                </button>
            </Show>
        </main>
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
