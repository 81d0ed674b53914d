use super::*;
use std::collections::HashSet;

#[test]
fn assessment_ids_are_unique() {
    let ids: HashSet<&str> = ASSESSMENTS.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), ASSESSMENTS.len());
}

#[test]
fn assessment_entries_have_display_content() {
    for entry in ASSESSMENTS {
        assert!(!entry.title.is_empty());
        assert!(!entry.description.is_empty());
        assert!(entry.duration_minutes > 0);
        assert!(entry.question_count > 0);
        assert!(entry.pass_score_percent <= 100, "{}", entry.id);
    }
}

#[test]
fn difficulty_badge_classes_are_distinct() {
    let classes: HashSet<&str> = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ]
    .into_iter()
    .map(Difficulty::badge_class)
    .collect();
    assert_eq!(classes.len(), 3);
}

#[test]
fn summary_stats_are_nonempty_copy() {
    assert!(!SUMMARY_STATS.is_empty());
    for (label, value) in SUMMARY_STATS {
        assert!(!label.is_empty());
        assert!(!value.is_empty());
    }
}
