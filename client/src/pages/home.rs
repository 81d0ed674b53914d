//! Home page — hero copy and the FAQ accordion.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::catalog::faq::FAQ;
use crate::components::faq_item::FaqItem;

/// At most one FAQ entry is open; toggling the open entry closes it.
fn toggle_entry(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let open_entry = RwSignal::new(None::<usize>);

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Learn infrastructure by doing it."</h1>
                <p>
                    "Guided course tracks, honest skill assessments, and disposable cloud "
                    "sandboxes for hands-on practice."
                </p>
                <div class="home-page__hero-actions">
                    <a class="btn btn--primary" href="/assessments">"Take an assessment"</a>
                    <a class="btn" href="/services">"Browse services"</a>
                </div>
            </section>
            <section class="home-page__faq">
                <h2>"Frequently asked questions"</h2>
                {move || {
                    FAQ.iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let on_toggle = Callback::new(move |()| {
                                open_entry.update(|open| *open = toggle_entry(*open, index));
                            });
                            view! {
                                <FaqItem
                                    question=entry.question.to_owned()
                                    answer=entry.answer.to_owned()
                                    open=open_entry.get() == Some(index)
                                    on_toggle=on_toggle
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}
