use super::*;

#[test]
fn test_app_state_carries_admin_token() {
    let state = test_helpers::test_app_state(Some("secret"));
    assert_eq!(state.admin_token.as_deref(), Some("secret"));
}

#[test]
fn test_app_state_without_token_disables_admin() {
    let state = test_helpers::test_app_state(None);
    assert!(state.admin_token.is_none());
}
