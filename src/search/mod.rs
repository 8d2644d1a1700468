// # Search Module
//
// Framework-free core of the job listing:
//
// - **SearchQuery / DatePosted**: the committed title/location/date filter
// - **PageIndex**: 1-based cursor into the listing endpoint
// - **ListingState**: fetch generations, stale-result rejection and the
//   loading/empty/populated render policy
//
// The UI layer owns these values in signals and only calls into this module.

mod listing;
mod page;
mod query;

pub use listing::{FetchTicket, ListingState, ListingView, PLACEHOLDER_CARDS};
pub use page::PageIndex;
pub use query::{DatePosted, DatePostedParseError, SearchQuery};
