use super::*;

#[test]
fn default_state_is_idle() {
    let state = LoginAttemptState::default();
    assert!(!state.spotify_pending);
    assert!(!state.apple_pending);
    assert!(state.error.is_none());
    assert!(!state.any_pending());
}

#[test]
fn begin_raises_only_that_providers_flag() {
    let mut state = LoginAttemptState::default();
    assert!(state.begin(Provider::Spotify));
    assert!(state.spotify_pending);
    assert!(!state.apple_pending);
    assert!(state.is_pending(Provider::Spotify));
    assert!(!state.is_pending(Provider::AppleMusic));
}

#[test]
fn begin_refuses_while_another_attempt_is_pending() {
    let mut state = LoginAttemptState::default();
    assert!(state.begin(Provider::Spotify));
    assert!(!state.begin(Provider::AppleMusic));
    assert!(!state.apple_pending);
    // The in-flight attempt is untouched.
    assert!(state.spotify_pending);
}

#[test]
fn begin_refuses_a_repeat_of_the_same_provider() {
    let mut state = LoginAttemptState::default();
    assert!(state.begin(Provider::AppleMusic));
    assert!(!state.begin(Provider::AppleMusic));
    assert!(state.apple_pending);
}

#[test]
fn begin_clears_a_stale_error() {
    let mut state = LoginAttemptState {
        error: Some("Failed to login with Spotify. Please try again.".to_owned()),
        ..LoginAttemptState::default()
    };
    assert!(state.begin(Provider::AppleMusic));
    assert!(state.error.is_none());
}

#[test]
fn fail_records_the_provider_message_and_clears_the_flag() {
    let mut state = LoginAttemptState::default();
    assert!(state.begin(Provider::Spotify));
    state.fail(Provider::Spotify, &LoginError(Provider::Spotify));
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to login with Spotify. Please try again.")
    );
    assert!(!state.spotify_pending);
    assert!(!state.any_pending());
}

#[test]
fn finish_returns_the_panel_to_idle() {
    let mut state = LoginAttemptState::default();
    assert!(state.begin(Provider::AppleMusic));
    state.finish(Provider::AppleMusic);
    assert_eq!(state, LoginAttemptState::default());
}
