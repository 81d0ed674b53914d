//! Cloud sandbox page — static catalog of playground environments.

use leptos::prelude::*;

use crate::catalog::playgrounds::{PLAYGROUNDS, SUMMARY_STATS};
use crate::components::playground_card::PlaygroundCard;

/// Sandbox page with summary stats and one tile per playground entry.
#[component]
pub fn SandboxPage() -> impl IntoView {
    // Provisioning is not implemented; record the intent.
    let on_launch = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        log::info!("sandbox launch requested: {id}");
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="sandbox-page">
            <header class="sandbox-page__intro">
                <h1>"Cloud sandbox"</h1>
                <p>"Disposable environments that boot fast and clean up after themselves."</p>
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
            <div class="sandbox-page__grid">
                {PLAYGROUNDS
                    .iter()
                    .map(|entry| {
                        view! {
                            <PlaygroundCard
                                id=entry.id.to_owned()
                                title=entry.title.to_owned()
                                description=entry.description.to_owned()
                                runtime=entry.runtime.to_owned()
                                vcpus=entry.vcpus
                                memory_gb=entry.memory_gb
                                session_minutes=entry.session_minutes
                                on_launch=on_launch
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
