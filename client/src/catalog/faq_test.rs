use super::*;
use std::collections::HashSet;

#[test]
fn faq_ids_are_unique() {
    let ids: HashSet<&str> = FAQ.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), FAQ.len());
}

#[test]
fn faq_entries_have_question_and_answer() {
    for entry in FAQ {
        assert!(!entry.question.is_empty());
        assert!(!entry.answer.is_empty());
    }
}
