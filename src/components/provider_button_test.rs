use super::*;

#[test]
fn labels_follow_the_provider_name() {
    assert_eq!(button_label(Provider::Spotify), "Continue with Spotify");
    assert_eq!(
        button_label(Provider::AppleMusic),
        "Continue with Apple Music"
    );
}

#[test]
fn each_provider_gets_its_brand_class() {
    assert_eq!(
        button_class(Provider::Spotify),
        "provider-btn provider-btn--spotify"
    );
    assert_eq!(
        button_class(Provider::AppleMusic),
        "provider-btn provider-btn--apple"
    );
}

#[test]
fn icons_are_distinct_per_provider() {
    let (spotify_box, spotify_path) = icon(Provider::Spotify);
    let (apple_box, apple_path) = icon(Provider::AppleMusic);
    assert_ne!(spotify_path, apple_path);
    assert_ne!(spotify_box, apple_box);
    assert!(!spotify_path.is_empty());
    assert!(!apple_path.is_empty());
}
