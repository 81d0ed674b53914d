use super::*;

#[test]
fn bearer_token_extracts_the_token() {
    assert_eq!(bearer_token(Some("Bearer abc123")), Some("abc123"));
}

#[test]
fn bearer_token_trims_surrounding_whitespace() {
    assert_eq!(bearer_token(Some("Bearer  abc123 ")), Some("abc123"));
}

#[test]
fn bearer_token_rejects_missing_header() {
    assert_eq!(bearer_token(None), None);
}

#[test]
fn bearer_token_rejects_other_schemes() {
    assert_eq!(bearer_token(Some("Basic abc123")), None);
}

#[test]
fn bearer_token_rejects_empty_token() {
    assert_eq!(bearer_token(Some("Bearer ")), None);
    assert_eq!(bearer_token(Some("Bearer   ")), None);
}
