//! Card component for one skill assessment.

use leptos::prelude::*;

use crate::catalog::assessments::Difficulty;

/// A card for one assessment entry with a difficulty badge, stat row, and a
/// start control that hands the assessment id to the caller.
#[component]
pub fn AssessmentCard(
    id: String,
    title: String,
    description: String,
    difficulty: Difficulty,
    duration_minutes: u16,
    question_count: u16,
    pass_score_percent: u8,
    #[prop(optional)] on_start: Option<Callback<String>>,
) -> impl IntoView {
    let on_start_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_start) = on_start.as_ref() {
                on_start.run(id.clone());
            }
        }
    });

    view! {
        <div class="assessment-card">
            <span class=format!("assessment-card__badge {}", difficulty.badge_class())>
                {difficulty.label()}
            </span>
            <span class="assessment-card__title">{title}</span>
            <span class="assessment-card__description">{description}</span>
            <div class="assessment-card__stats">
                <span class="assessment-card__stat">{format!("{duration_minutes} min")}</span>
                <span class="assessment-card__stat">{format!("{question_count} questions")}</span>
                <span class="assessment-card__stat">{format!("{pass_score_percent}% to pass")}</span>
            </div>
            <button class="btn btn--primary assessment-card__start" on:click=move |_| on_start_click.run(())>
                "Start assessment"
            </button>
        </div>
    }
}
