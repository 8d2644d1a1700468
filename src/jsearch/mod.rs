pub mod client;
pub mod models;

pub use client::{JSearchClient, JSearchError};
pub use models::{JobDetail, JobSummary};
