//! Assessments page — static catalog of skill assessments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure static view: no fetch, no loading state, no error path. Summary
//! figures are fixed display copy, not computed from the entries.

use leptos::prelude::*;

use crate::catalog::assessments::{ASSESSMENTS, SUMMARY_STATS};
use crate::components::assessment_card::AssessmentCard;

/// Assessments page with summary stats and one card per catalog entry.
#[component]
pub fn AssessmentsPage() -> impl IntoView {
    // Starting an assessment has no backing system yet; record the intent.
    let on_start = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        log::info!("assessment start requested: {id}");
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="assessments-page">
            <header class="assessments-page__intro">
                <h1>"Skill assessments"</h1>
                <p>"Timed, scored, and honest about where you stand."</p>
            </header>
            <div class="summary-stats">
                {SUMMARY_STATS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-stats__tile">
                                <span class="summary-stats__value">{*value}</span>
                                <span class="summary-stats__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="assessments-page__grid">
                {ASSESSMENTS
                    .iter()
                    .map(|entry| {
                        view! {
                            <AssessmentCard
                                id=entry.id.to_owned()
                                title=entry.title.to_owned()
                                description=entry.description.to_owned()
                                difficulty=entry.difficulty
                                duration_minutes=entry.duration_minutes
                                question_count=entry.question_count
                                pass_score_percent=entry.pass_score_percent
                                on_start=on_start
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
