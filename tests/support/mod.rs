pub mod mock_jsearch;

pub use mock_jsearch::{MockJSearch, RecordedRequest, TEST_API_HOST, TEST_API_KEY};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
