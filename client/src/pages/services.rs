//! Services page — the remote-backed catalog list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only view on the site backed by the remote services table. It issues
//! exactly one read per mount, renders skeleton placeholders while the read
//! is outstanding, and degrades to an empty grid on failure.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and otherwise indistinguishable from "no active
//! services". A liveness flag guards the state update so a response arriving
//! after unmount is dropped.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::components::skeleton_card::SkeletonCard;
use crate::state::services::{LoadPhase, ServicesState};

/// Number of placeholder cards shown while the service list loads.
pub const SKELETON_CARD_COUNT: usize = 6;

fn skeleton_slots(phase: LoadPhase) -> usize {
    match phase {
        LoadPhase::Loading => SKELETON_CARD_COUNT,
        LoadPhase::Ready | LoadPhase::Failed => 0,
    }
}

/// Services page. Owns its fetch lifecycle; nothing is cached across mounts.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = RwSignal::new(ServicesState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_services().await;
            // Dropped view: do not touch its state.
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            match outcome {
                Ok(rows) => services.update(|s| s.resolve(rows)),
                Err(err) => {
                    log::warn!("service list fetch failed: {err}");
                    services.update(|s| s.fail());
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="services-page">
            <header class="services-page__intro">
                <h1>"Services"</h1>
                <p>"Everything the platform offers, from guided tracks to team tooling."</p>
            </header>
            <div class="services-page__grid">
                {move || {
                    (0..skeleton_slots(services.get().phase))
                        .map(|_| view! { <SkeletonCard/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    services
                        .get()
                        .items
                        .into_iter()
                        .map(|record| {
                            view! {
                                <ServiceCard
                                    id=record.id
                                    slug=record.slug
                                    title=record.title
                                    description=record.description
                                    icon=record.icon
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
