use super::*;

#[test]
fn missing_or_empty_credential_redirects_to_login() {
    assert!(should_redirect_to_login(None));
    assert!(should_redirect_to_login(Some("")));
}

#[test]
fn stored_credential_keeps_the_visitor_here() {
    assert!(!should_redirect_to_login(Some("mock-spotify-jwt-token")));
    assert!(!should_redirect_to_login(Some("mock-apple-music-jwt-token")));
}
