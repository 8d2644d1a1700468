use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_HOST: &str = "jsearch.p.rapidapi.com";
pub const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// RapidAPI key sent as `X-RapidAPI-Key`
    pub api_key: String,
    /// RapidAPI host sent as `X-RapidAPI-Host`
    pub api_host: String,
    /// Base URL of the JSearch API (overridable for local testing)
    pub base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, reading process environment");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("RAPIDAPI_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("RAPIDAPI_KEY"))?;

        let api_host = lookup("RAPIDAPI_HOST").unwrap_or_else(|| {
            warn!("RAPIDAPI_HOST not set, using {}", DEFAULT_API_HOST);
            DEFAULT_API_HOST.to_string()
        });

        let base_url = lookup("JSEARCH_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        info!("JSearch endpoint: {} (host {})", base_url, api_host);

        Ok(Self {
            api_key,
            api_host,
            base_url,
        })
    }
}
