use super::*;

#[test]
fn stored_override_wins_over_system_hint() {
    assert!(dark_enabled(Some("dark"), false));
    assert!(!dark_enabled(Some("light"), true));
}

#[test]
fn missing_or_unrecognized_override_falls_back_to_system() {
    assert!(dark_enabled(None, true));
    assert!(!dark_enabled(None, false));
    assert!(dark_enabled(Some("auto"), true));
    assert!(!dark_enabled(Some(""), false));
}
