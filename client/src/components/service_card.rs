//! Card component for one service listing.
//!
//! DESIGN
//! ======
//! The card is an anchor to the service detail route; the start control is a
//! nested button that suppresses navigation and hands the service id to the
//! caller. With no callback supplied the control is inert.

#[cfg(test)]
#[path = "service_card_test.rs"]
mod service_card_test;

use leptos::prelude::*;

use crate::util::icons::Icon;

fn detail_href(slug: &str) -> String {
    format!("/services/{slug}")
}

/// A clickable card representing one row of the services table.
#[component]
pub fn ServiceCard(
    id: String,
    slug: String,
    title: String,
    description: String,
    icon: String,
    #[prop(optional)] on_start: Option<Callback<String>>,
) -> impl IntoView {
    let symbol = Icon::from_name(&icon);
    let href = detail_href(&slug);
    let on_start_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_start) = on_start.as_ref() {
                on_start.run(id.clone());
            }
        }
    });

    view! {
        <a class="service-card" href=href>
            <span
                class=format!("service-card__badge {}", symbol.badge_class())
                aria-hidden="true"
            >
                {symbol.glyph()}
            </span>
            <span class="service-card__title">{title}</span>
            <span class="service-card__description">{description}</span>
            <button
                class="btn service-card__start"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_start_click.run(());
                }
            >
                "Get started"
            </button>
        </a>
    }
}
