use super::*;
use std::collections::HashSet;

#[test]
fn playground_ids_are_unique() {
    let ids: HashSet<&str> = PLAYGROUNDS.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), PLAYGROUNDS.len());
}

#[test]
fn playground_entries_have_display_content() {
    for entry in PLAYGROUNDS {
        assert!(!entry.title.is_empty());
        assert!(!entry.description.is_empty());
        assert!(!entry.runtime.is_empty());
        assert!(entry.vcpus > 0);
        assert!(entry.memory_gb > 0);
        assert!(entry.session_minutes > 0);
    }
}
