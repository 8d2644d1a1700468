use crate::config::Config;
use crate::jsearch::models::{ApiResponse, JobDetail, JobSummary};
use crate::search::{PageIndex, SearchQuery};
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum JSearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Job not found")]
    NotFound,
    #[error("Response has no data field")]
    MissingData,
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
    api_host: String,
    base_url: String,
}

impl JSearchClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch one page of job summaries for a committed search
    pub async fn search_jobs(
        &self,
        query: &SearchQuery,
        page: PageIndex,
    ) -> Result<Vec<JobSummary>, JSearchError> {
        let url = format!("{}/search", self.base_url);
        let text = query.api_query();
        let page = page.to_string();

        let params = [
            ("query", text.as_str()),
            ("date_posted", query.date_posted.as_param()),
            ("page", page.as_str()),
        ];

        info!(
            "📡 JSearch API: GET {} with query='{}', date_posted={}, page={}",
            url, text, query.date_posted, page
        );

        let response = self.get(&url, &params).await?;
        let body: ApiResponse<JobSummary> = parse_body(response).await?;

        match body.data {
            Some(jobs) => {
                info!("✓ JSearch returned {} job(s) for page {}", jobs.len(), page);
                Ok(jobs)
            }
            None => Err(JSearchError::MissingData),
        }
    }

    /// Fetch full details for one job id
    pub async fn job_details(&self, job_id: &str) -> Result<JobDetail, JSearchError> {
        let url = format!("{}/job-details", self.base_url);

        info!("📡 JSearch API: GET {} with job_id={}", url, job_id);

        let response = self.get(&url, &[("job_id", job_id)]).await?;
        let body: ApiResponse<JobDetail> = parse_body(response).await?;

        // Documented to hold exactly one element
        body.data
            .ok_or(JSearchError::MissingData)?
            .into_iter()
            .next()
            .ok_or(JSearchError::NotFound)
    }

    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Response, JSearchError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("✗ JSearch rate limit exceeded");
            Err(JSearchError::RateLimit)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("✗ JSearch rejected the API key");
            Err(JSearchError::InvalidApiKey)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ JSearch resource not found: {}", url);
            Err(JSearchError::NotFound)
        } else {
            warn!("✗ JSearch API error: {}", status);
            Err(JSearchError::Status(status))
        }
    }
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, JSearchError> {
    // Raw text first so a parse failure can log what came back
    let text = response.text().await?;

    serde_json::from_str(&text).map_err(|e| {
        error!("JSON parsing error: {}", e);
        debug!("Raw response: {}", text);
        JSearchError::Serialization(e)
    })
}
