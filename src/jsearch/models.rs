use serde::{Deserialize, Deserializer, Serialize};

/// Envelope shared by both JSearch endpoints.
///
/// `data` is absent on malformed or quota-limited responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Option<String>,
    pub request_id: Option<String>,
    pub data: Option<Vec<T>>,
}

/// Text field where JSearch sends `null` as often as it omits the key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Job as listed by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSummary {
    pub job_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub job_employment_type: Option<String>,
}

/// Full job record from the job-details endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDetail {
    pub job_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub job_employment_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_description: String,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_country: Option<String>,
    pub job_is_remote: Option<bool>,
    pub job_posted_at_datetime_utc: Option<String>,
    pub job_apply_link: Option<String>,
}
