//! Accordion row for one FAQ entry.

use leptos::prelude::*;

/// One FAQ accordion row. The parent owns which entry is open; toggling
/// reports back through the callback.
#[component]
pub fn FaqItem(
    question: String,
    answer: String,
    open: bool,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let expanded = if open { "true" } else { "false" };
    let chevron = if open { "\u{2212}" } else { "+" };

    view! {
        <div class="faq-item" class:faq-item--open=open>
            <button
                class="faq-item__question"
                aria-expanded=expanded
                on:click=move |_| on_toggle.run(())
            >
                <span>{question}</span>
                <span class="faq-item__chevron" aria-hidden="true">{chevron}</span>
            </button>
            <Show when=move || open>
                <p class="faq-item__answer">{answer.clone()}</p>
            </Show>
        </div>
    }
}
