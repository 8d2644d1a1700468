pub mod app;
pub mod job_card;
pub mod job_detail;
pub mod listing;
pub mod navbar;
pub mod pagination;
pub mod search_bar;
pub mod search_context;
pub mod skeleton;

pub use app::App;
pub use job_card::JobCard;
pub use job_detail::JobDetailPage;
pub use listing::{Home, JobListing, ListingPage};
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use search_context::{use_committed_query, use_search_submit, SearchStateProvider};
pub use skeleton::{JobCardSkeleton, JobDetailSkeleton};
