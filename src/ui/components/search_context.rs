use crate::search::SearchQuery;
use crate::ui::Route;
use dioxus::prelude::*;
use tracing::info;

/// Committed search, lifted above both the search bar and the listing.
///
/// The provider is the only owner; the listing gets a read-only view and the
/// search bar gets a submit callback.
#[derive(Clone, Copy)]
pub struct SearchState {
    query: Signal<SearchQuery>,
}

/// Provider component to make the committed search available throughout the app
#[component]
pub fn SearchStateProvider(children: Element) -> Element {
    let query = use_signal(SearchQuery::default);
    use_context_provider(|| SearchState { query });

    rsx! {
        {children}
    }
}

/// Hook to read the committed search
pub fn use_committed_query() -> ReadSignal<SearchQuery> {
    let state = use_context::<SearchState>();
    state.query.into()
}

/// A submitted search resolved against the route it was made from
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSubmission {
    /// Replaces the committed query as is
    pub query: SearchQuery,
    pub landing: Route,
}

impl SearchSubmission {
    pub fn new(submitted: SearchQuery, from: &Route) -> Self {
        Self {
            landing: from.search_landing(),
            query: submitted,
        }
    }
}

/// Hook returning the submit callback for the search bar.
///
/// Submitting replaces the committed query and lands on the listing: on the
/// page already shown when the listing is open, otherwise on page 1.
pub fn use_search_submit() -> Callback<SearchQuery> {
    let mut query = use_context::<SearchState>().query;
    let route = use_route::<Route>();

    use_callback(move |submitted: SearchQuery| {
        info!(
            "Search submitted: '{}' ({})",
            submitted.api_query(),
            submitted.date_posted
        );
        let submission = SearchSubmission::new(submitted, &route);
        query.set(submission.query);
        navigator().push(submission.landing);
    })
}
