
use super::broadcast::field_matches;

#[test]
fn wildcard_matches_every_field() {
    assert!(field_matches("centerMode", "*"));
    assert!(field_matches("apiKey", "*"));
}

#[test]
fn exact_pattern_matches_only_its_field() {
    assert!(field_matches("centerMode", "centerMode"));
    assert!(!field_matches("centerMode", "zenMode"));
    assert!(!field_matches("centerMode", "center"));
}
