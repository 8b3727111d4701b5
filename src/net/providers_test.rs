use super::*;

#[test]
fn display_names_match_service_branding() {
    assert_eq!(Provider::Spotify.to_string(), "Spotify");
    assert_eq!(Provider::AppleMusic.to_string(), "Apple Music");
}

#[test]
fn mock_tokens_are_distinct_and_non_empty() {
    let spotify = Provider::Spotify.mock_token();
    let apple = Provider::AppleMusic.mock_token();
    assert!(!spotify.is_empty());
    assert!(!apple.is_empty());
    assert_ne!(spotify, apple);
}

#[test]
fn login_error_message_names_the_provider() {
    assert_eq!(
        LoginError(Provider::Spotify).to_string(),
        "Failed to login with Spotify. Please try again."
    );
    assert_eq!(
        LoginError(Provider::AppleMusic).to_string(),
        "Failed to login with Apple Music. Please try again."
    );
}

#[test]
fn attempt_login_resolves_with_the_provider_credential() {
    for provider in Provider::ALL {
        let result =
            futures::executor::block_on(attempt_login(provider)).expect("mocked login never fails");
        assert!(result.success);
        assert_eq!(result.token, provider.mock_token());
    }
}
