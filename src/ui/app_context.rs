use crate::config::Config;
use crate::jsearch::JSearchClient;
use dioxus::prelude::*;

/// Root context handed to the launcher: the API client built from config
#[derive(Clone)]
pub struct AppContext {
    pub jsearch: JSearchClient,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            jsearch: JSearchClient::new(config),
        }
    }
}

/// Hook to access the JSearch client
pub fn use_jsearch_client() -> JSearchClient {
    let context = use_context::<AppContext>();
    context.jsearch.clone()
}
