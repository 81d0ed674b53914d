//! Site-wide header with navigation and the dark-mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Top navigation bar shared by every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Skillbranch"</a>
            <nav class="site-header__nav">
                <a href="/services">"Services"</a>
                <a href="/assessments">"Assessments"</a>
                <a href="/sandbox">"Cloud Sandbox"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <button
                class="btn site-header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
        </header>
    }
}
