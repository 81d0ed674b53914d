use super::*;

fn row(id: &str, sort_order: i32, active: bool) -> ServiceRecord {
    ServiceRecord {
        id: id.to_owned(),
        slug: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        icon: "code".to_owned(),
        active,
        sort_order,
    }
}

#[test]
fn default_state_is_loading_and_empty() {
    let state = ServicesState::default();
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(state.items.is_empty());
}

#[test]
fn resolve_moves_to_ready_with_display_rows() {
    let mut state = ServicesState::default();
    state.resolve(vec![row("a", 2, true), row("b", 1, true), row("c", 1, false)]);

    assert_eq!(state.phase, LoadPhase::Ready);
    let ids: Vec<&str> = state.items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn resolve_with_no_rows_is_ready_and_empty() {
    let mut state = ServicesState::default();
    state.resolve(Vec::new());
    assert_eq!(state.phase, LoadPhase::Ready);
    assert!(state.items.is_empty());
}

#[test]
fn fail_empties_the_list() {
    let mut state = ServicesState::default();
    state.resolve(vec![row("a", 1, true)]);
    state.fail();

    assert_eq!(state.phase, LoadPhase::Failed);
    assert!(state.items.is_empty());
}

#[test]
fn resolve_is_deterministic_for_repeated_inputs() {
    let input = vec![row("y", 5, true), row("x", 5, true)];
    let mut first = ServicesState::default();
    let mut second = ServicesState::default();
    first.resolve(input.clone());
    second.resolve(input);
    assert_eq!(first.items, second.items);
}
