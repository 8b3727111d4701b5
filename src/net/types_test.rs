use super::*;

#[test]
fn auth_result_deserializes_a_provider_payload() {
    let result: AuthResult =
        serde_json::from_str(r#"{"success":true,"token":"mock-spotify-jwt-token"}"#).unwrap();
    assert!(result.success);
    assert_eq!(result.token, "mock-spotify-jwt-token");
}
