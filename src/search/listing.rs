use crate::jsearch::{JSearchError, JobSummary};
use tracing::{debug, error, warn};

/// Number of skeleton cards shown while a listing fetch is outstanding
pub const PLACEHOLDER_CARDS: usize = 8;

/// Identifies one listing fetch. Tickets are issued in increasing order and
/// only the most recent one may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What the listing grid should render
#[derive(Debug, PartialEq)]
pub enum ListingView<'a> {
    Loading { placeholders: usize },
    Empty,
    Jobs(&'a [JobSummary]),
}

/// Job list plus the bookkeeping that keeps stale responses out of it.
///
/// A slow response for an earlier query or page settles after a newer fetch
/// has started; its ticket is no longer the latest, so it is dropped instead
/// of overwriting what the user asked for last.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingState {
    jobs: Vec<JobSummary>,
    issued: u64,
    in_flight: Option<FetchTicket>,
}

impl ListingState {
    /// Start a new fetch, superseding any fetch still in flight
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        if let Some(previous) = self.in_flight.replace(ticket) {
            debug!("Fetch {:?} superseded by {:?}", previous, ticket);
        }
        ticket
    }

    /// Apply a settled fetch. Returns false when the result was stale and ignored.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<JobSummary>, JSearchError>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            debug!("Discarding stale listing result for {:?}", ticket);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(jobs) => self.jobs = jobs,
            Err(JSearchError::MissingData) => {
                warn!("Error: No jobs field in response");
                self.jobs.clear();
            }
            Err(e) => {
                // Previous list stays visible
                error!("Error fetching jobs: {}", e);
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn jobs(&self) -> &[JobSummary] {
        &self.jobs
    }

    pub fn view(&self) -> ListingView<'_> {
        if self.is_loading() {
            ListingView::Loading {
                placeholders: PLACEHOLDER_CARDS,
            }
        } else if self.jobs.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Jobs(&self.jobs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn job(id: &str) -> JobSummary {
        JobSummary {
            job_id: id.to_string(),
            job_title: format!("Job {id}"),
            employer_name: "Employer".to_string(),
            employer_logo: None,
            job_employment_type: Some("FULLTIME".to_string()),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ListingState::default();
        assert!(!state.is_loading());
        assert_eq!(state.view(), ListingView::Empty);
    }

    #[test]
    fn test_loading_renders_eight_placeholders() {
        let mut state = ListingState::default();
        state.begin_fetch();
        assert!(state.is_loading());
        assert_eq!(state.view(), ListingView::Loading { placeholders: 8 });
    }

    #[test]
    fn test_success_replaces_list_in_order() {
        let mut state = ListingState::default();
        let ticket = state.begin_fetch();
        assert!(state.settle(ticket, Ok(vec![job("a"), job("b")])));

        match state.view() {
            ListingView::Jobs(jobs) => {
                let ids: Vec<_> = jobs.iter().map(|j| j.job_id.as_str()).collect();
                assert_eq!(ids, ["a", "b"]);
            }
            other => panic!("expected jobs, got {other:?}"),
        }

        let ticket = state.begin_fetch();
        state.settle(ticket, Ok(vec![job("c")]));
        assert_eq!(state.jobs().len(), 1);
        assert_eq!(state.jobs()[0].job_id, "c");
    }

    #[test]
    fn test_missing_results_field_empties_list() {
        let mut state = ListingState::default();
        let ticket = state.begin_fetch();
        state.settle(ticket, Ok(vec![job("a")]));

        let ticket = state.begin_fetch();
        assert!(state.settle(ticket, Err(JSearchError::MissingData)));
        assert!(!state.is_loading());
        assert_eq!(state.view(), ListingView::Empty);
    }

    #[test]
    fn test_transport_failure_keeps_previous_list() {
        let mut state = ListingState::default();
        let ticket = state.begin_fetch();
        state.settle(ticket, Ok(vec![job("a"), job("b")]));

        let ticket = state.begin_fetch();
        assert!(state.settle(
            ticket,
            Err(JSearchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert!(!state.is_loading());
        assert_eq!(state.jobs().len(), 2);
    }

    #[test]
    fn test_failure_on_first_fetch_is_empty_not_loading() {
        let mut state = ListingState::default();
        let ticket = state.begin_fetch();
        state.settle(ticket, Err(JSearchError::RateLimit));
        assert_eq!(state.view(), ListingView::Empty);
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut state = ListingState::default();
        let slow_page_one = state.begin_fetch();
        let fast_page_two = state.begin_fetch();
        assert!(slow_page_one < fast_page_two);

        assert!(state.settle(fast_page_two, Ok(vec![job("page-2")])));
        assert!(!state.settle(slow_page_one, Ok(vec![job("page-1")])));

        assert_eq!(state.jobs()[0].job_id, "page-2");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_result_does_not_clear_loading() {
        let mut state = ListingState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(!state.settle(first, Err(JSearchError::MissingData)));
        assert!(state.is_loading());

        state.settle(second, Ok(Vec::new()));
        assert!(!state.is_loading());
        assert_eq!(state.view(), ListingView::Empty);
    }
}
