use dioxus::prelude::*;

/// Placeholder card shown while a listing page loads
#[component]
pub fn JobCardSkeleton() -> Element {
    rsx! {
        div { class: "job-card skeleton",
            div { class: "skeleton-circle" }
            div { class: "skeleton-line skeleton-line-wide" }
            div { class: "skeleton-line" }
            div { class: "skeleton-line skeleton-line-short" }
            div { class: "skeleton-button" }
        }
    }
}

/// Placeholder for the detail view. Also stays up when the fetch failed.
#[component]
pub fn JobDetailSkeleton() -> Element {
    rsx! {
        div { class: "detail-card skeleton",
            div { class: "skeleton-line skeleton-line-title" }
            for _ in 0..4 {
                div { class: "skeleton-line" }
            }
            div { class: "skeleton-block" }
        }
    }
}
