//! FAQ accordion entries for the home page.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// One question/answer pair.
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// The FAQ list, in display order.
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-what-is-skillbranch",
        question: "What is Skillbranch?",
        answer: "A course catalog, skill assessments, and disposable cloud sandboxes in one place. \
                 Pick a track, measure where you stand, and practice on real infrastructure.",
    },
    FaqEntry {
        id: "faq-assessment-retakes",
        question: "Can I retake an assessment?",
        answer: "Yes. Assessments can be retaken after a 48-hour cooldown; your profile keeps the \
                 best score.",
    },
    FaqEntry {
        id: "faq-sandbox-persistence",
        question: "Do sandboxes keep my work?",
        answer: "Sandboxes are disposable by design. Anything you want to keep should be pushed to \
                 your own git remote before the session ends.",
    },
    FaqEntry {
        id: "faq-team-plans",
        question: "Is there a team plan?",
        answer: "Team seats include shared progress dashboards and private assessment pools. \
                 Reach out through the services page for details.",
    },
];
