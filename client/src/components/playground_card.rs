//! Tile component for one cloud sandbox playground.

use leptos::prelude::*;

/// A tile for one sandbox environment with a runtime badge, resource stats,
/// and a launch control that hands the playground id to the caller.
#[component]
pub fn PlaygroundCard(
    id: String,
    title: String,
    description: String,
    runtime: String,
    vcpus: u8,
    memory_gb: u8,
    session_minutes: u16,
    #[prop(optional)] on_launch: Option<Callback<String>>,
) -> impl IntoView {
    let on_launch_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_launch) = on_launch.as_ref() {
                on_launch.run(id.clone());
            }
        }
    });

    view! {
        <div class="playground-card">
            <span class="playground-card__badge">{runtime}</span>
            <span class="playground-card__title">{title}</span>
            <span class="playground-card__description">{description}</span>
            <div class="playground-card__stats">
                <span class="playground-card__stat">{format!("{vcpus} vCPU")}</span>
                <span class="playground-card__stat">{format!("{memory_gb} GB")}</span>
                <span class="playground-card__stat">{format!("{session_minutes} min session")}</span>
            </div>
            <button class="btn btn--primary playground-card__launch" on:click=move |_| on_launch_click.run(())>
                "Launch sandbox"
            </button>
        </div>
    }
}
