use crate::search::{ListingState, ListingView, PageIndex};
use crate::ui::{use_jsearch_client, Route};
use dioxus::prelude::*;
use tracing::debug;

use super::job_card::JobCard;
use super::pagination::Pagination;
use super::search_context::use_committed_query;
use super::skeleton::JobCardSkeleton;

/// Listing at page 1
#[component]
pub fn Home() -> Element {
    rsx! {
        JobListing { page: PageIndex::FIRST }
    }
}

/// Listing at the page named in the route
#[component]
pub fn ListingPage(page: ReadSignal<u32>) -> Element {
    let page = use_memo(move || PageIndex::new(page()).unwrap_or_default());

    rsx! {
        JobListing { page: page() }
    }
}

/// Results grid for the committed query at one page.
///
/// Every change of query or page starts one fetch. The listing state hands
/// out a ticket per fetch and drops results whose ticket was superseded.
#[component]
pub fn JobListing(page: ReadSignal<PageIndex>) -> Element {
    let client = use_jsearch_client();
    let query = use_committed_query();
    let mut listing = use_signal(ListingState::default);

    use_effect(move || {
        let query = query();
        let page = page();
        let ticket = listing.write().begin_fetch();
        debug!("Fetching listing page {} as {:?}", page, ticket);

        let client = client.clone();
        spawn(async move {
            let outcome = client.search_jobs(&query, page).await;
            listing.write().settle(ticket, outcome);
        });
    });

    let on_page_change = move |next: PageIndex| {
        navigator().push(Route::listing(next));
    };

    rsx! {
        div { class: "container",
            div { class: "job-grid",
                match listing.read().view() {
                    ListingView::Loading { placeholders } => rsx! {
                        for i in 0..placeholders {
                            JobCardSkeleton { key: "{i}" }
                        }
                    },
                    ListingView::Empty => rsx! {
                        p { class: "empty-state", "No jobs found" }
                    },
                    ListingView::Jobs(jobs) => rsx! {
                        for job in jobs.iter() {
                            JobCard { key: "{job.job_id}", job: job.clone(), page: page() }
                        }
                    },
                }
            }
            Pagination { current: page(), on_change: on_page_change }
        }
    }
}
