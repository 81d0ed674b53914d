//! Placeholder card shown while the service list loads.

use leptos::prelude::*;

/// A content-free card silhouette. Rendered a fixed number of times while
/// the services fetch is outstanding.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="skeleton-card" aria-hidden="true">
            <span class="skeleton-card__badge"></span>
            <span class="skeleton-card__line skeleton-card__line--title"></span>
            <span class="skeleton-card__line"></span>
            <span class="skeleton-card__line skeleton-card__line--short"></span>
        </div>
    }
}
