use crate::ui::{use_jsearch_client, Route};
use dioxus::prelude::*;
use tracing::error;

use super::back_button::BackButton;
use super::view::JobDetailView;
use crate::ui::components::skeleton::JobDetailSkeleton;

/// Detail page for the job named in the route.
///
/// Fetches once per id. A failed fetch is only logged; the skeleton stays up.
#[component]
pub fn JobDetailPage(id: ReadSignal<String>, from_page: ReadSignal<u32>) -> Element {
    let client = use_jsearch_client();

    let detail_resource = use_resource(move || {
        let job_id = id();
        let client = client.clone();
        async move {
            client
                .job_details(&job_id)
                .await
                .inspect_err(|e| error!("Error fetching job details for {}: {}", job_id, e))
                .ok()
        }
    });

    rsx! {
        div { class: "container detail-page",
            BackButton { to: Route::back_from_detail(from_page()) }
            match detail_resource.value().read().as_ref() {
                Some(Some(job)) => rsx! {
                    JobDetailView { job: job.clone() }
                },
                _ => rsx! {
                    JobDetailSkeleton {}
                },
            }
        }
    }
}
