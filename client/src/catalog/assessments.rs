//! Skill assessment catalog entries.

#[cfg(test)]
#[path = "assessments_test.rs"]
mod assessments_test;

/// Difficulty tier of an assessment. Badge color is keyed by variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Badge modifier class keyed by the tier.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Beginner => "assessment-card__badge--beginner",
            Self::Intermediate => "assessment-card__badge--intermediate",
            Self::Advanced => "assessment-card__badge--advanced",
        }
    }
}

/// One hand-authored assessment listing.
#[derive(Clone, Copy, Debug)]
pub struct AssessmentEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub duration_minutes: u16,
    pub question_count: u16,
    pub pass_score_percent: u8,
}

/// Fixed summary figures shown above the grid. Display copy, not computed
/// from the entries.
pub const SUMMARY_STATS: &[(&str, &str)] = &[
    ("Assessments", "24"),
    ("Avg. completion", "38 min"),
    ("First-try pass rate", "71%"),
];

/// The assessment catalog, in display order.
pub const ASSESSMENTS: &[AssessmentEntry] = &[
    AssessmentEntry {
        id: "asmt-linux-fundamentals",
        title: "Linux Fundamentals",
        description: "Shell navigation, permissions, processes, and package management on a stock distribution.",
        difficulty: Difficulty::Beginner,
        duration_minutes: 30,
        question_count: 25,
        pass_score_percent: 70,
    },
    AssessmentEntry {
        id: "asmt-sql-foundations",
        title: "SQL Foundations",
        description: "Joins, aggregation, and schema reasoning against a realistic inventory dataset.",
        difficulty: Difficulty::Beginner,
        duration_minutes: 35,
        question_count: 30,
        pass_score_percent: 70,
    },
    AssessmentEntry {
        id: "asmt-container-basics",
        title: "Container Basics",
        description: "Images, volumes, networking, and lifecycle for single-host container workloads.",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 40,
        question_count: 28,
        pass_score_percent: 75,
    },
    AssessmentEntry {
        id: "asmt-cloud-networking",
        title: "Cloud Networking",
        description: "Subnets, routing tables, gateways, and security groups across availability zones.",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 45,
        question_count: 32,
        pass_score_percent: 75,
    },
    AssessmentEntry {
        id: "asmt-distributed-systems",
        title: "Distributed Systems",
        description: "Consistency trade-offs, consensus, and failure handling in multi-node services.",
        difficulty: Difficulty::Advanced,
        duration_minutes: 60,
        question_count: 36,
        pass_score_percent: 80,
    },
    AssessmentEntry {
        id: "asmt-incident-response",
        title: "Incident Response",
        description: "Triage, containment, and postmortem discipline for production security events.",
        difficulty: Difficulty::Advanced,
        duration_minutes: 50,
        question_count: 30,
        pass_score_percent: 80,
    },
];
