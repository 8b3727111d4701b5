//! Sign-in screen: two mocked provider actions, one orchestrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel sequences one attempt at a time: raise that provider's
//! pending flag (both buttons disable), await the provider call, then
//! persist the credential and leave for `/onboarding` — or surface the
//! failure and return to idle. Mutual exclusion is enforced twice: the
//! disabled buttons in normal use, and the `begin` guard for anything
//! that bypasses them.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::provider_button::ProviderButton;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::providers::LoginError;
use crate::net::providers::Provider;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AuthResult;
use crate::state::auth::LoginAttemptState;
use crate::util::session::SessionStore;

/// Apply a settled attempt to the panel.
///
/// Success persists the credential and requests `/onboarding`; a
/// provider fault surfaces its message and persists nothing. The pending
/// flag clears in every branch, after everything else.
#[cfg(any(test, feature = "hydrate"))]
fn settle_login(
    state: &mut LoginAttemptState,
    store: &SessionStore,
    provider: Provider,
    outcome: Result<AuthResult, LoginError>,
    navigate: impl FnOnce(&str),
) {
    match outcome {
        Ok(result) if result.success => {
            store.save_token(&result.token);
            navigate("/onboarding");
            state.finish(provider);
        }
        Ok(_) => state.finish(provider),
        Err(error) => state.fail(provider, &error),
    }
}

/// Login panel offering "Continue with Spotify" / "Continue with Apple Music".
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let attempt = RwSignal::new(LoginAttemptState::default());
    let any_pending = Signal::derive(move || attempt.get().any_pending());

    let on_provider_login = Callback::new(move |provider: Provider| {
        let mut started = false;
        attempt.update(|state| started = state.begin(provider));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::providers::attempt_login(provider).await;
                if let Err(ref error) = outcome {
                    log::error!("{provider} login error: {error}");
                }
                attempt.update(|state| {
                    settle_login(state, &store, provider, outcome, |path| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(path);
                        }
                    });
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &store;
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome"</h1>
                <p class="login-card__subtitle">"Sign in with your music streaming service"</p>
                <Show when=move || attempt.get().error.is_some()>
                    <p class="login-error">{move || attempt.get().error.unwrap_or_default()}</p>
                </Show>
                {Provider::ALL
                    .into_iter()
                    .map(|provider| {
                        view! {
                            <ProviderButton
                                provider=provider
                                pending=Signal::derive(move || attempt.get().is_pending(provider))
                                disabled=any_pending
                                on_press=on_provider_login
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="login-card__footer">
                    <svg
                        class="login-card__footer-icon"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <path d="M9 18V5l12-2v13"/>
                        <circle cx="6" cy="18" r="3"/>
                        <circle cx="18" cy="16" r="3"/>
                    </svg>
                    <span>"Find your musical matches"</span>
                </div>
            </div>
        </div>
    }
}
