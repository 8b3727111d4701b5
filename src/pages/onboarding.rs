//! Post-login landing: confirms the connection, guards signed-out visits.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::session::SessionStore;

/// True when the visitor has no usable credential and belongs back on the
/// login screen.
#[must_use]
fn should_redirect_to_login(token: Option<&str>) -> bool {
    token.is_none_or(str::is_empty)
}

/// Redirect to the login screen whenever no credential is stored.
fn install_signed_out_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(store.load_token().as_deref()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Onboarding screen shown right after a successful sign-in.
#[component]
pub fn OnboardingPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_signed_out_redirect(store.clone(), navigate);

    let on_switch_account = move |_| {
        store.clear_token();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <h1 class="onboarding-card__title">"You're all set"</h1>
                <p class="onboarding-card__copy">
                    "Your streaming account is connected. Next: tell us what you love to listen to, and we'll find your people."
                </p>
                <button class="onboarding-card__switch" on:click=on_switch_account>
                    "Use a different account"
                </button>
            </div>
        </div>
    }
}
