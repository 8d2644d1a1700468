use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Unknown date filter: {0}")]
pub struct DatePostedParseError(pub String);

/// Date-posted filter accepted by the listing endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePosted {
    #[default]
    All,
    Today,
    LastWeek,
    LastMonth,
}

impl DatePosted {
    /// Every filter in the order the search bar offers them
    pub const ALL: [DatePosted; 4] = [
        DatePosted::All,
        DatePosted::Today,
        DatePosted::LastWeek,
        DatePosted::LastMonth,
    ];

    /// Value sent as the `date_posted` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            DatePosted::All => "all",
            DatePosted::Today => "today",
            DatePosted::LastWeek => "last_week",
            DatePosted::LastMonth => "last_month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePosted::All => "All dates",
            DatePosted::Today => "Today",
            DatePosted::LastWeek => "Last Week",
            DatePosted::LastMonth => "Last Month",
        }
    }
}

impl fmt::Display for DatePosted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for DatePosted {
    type Err = DatePostedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatePosted::ALL
            .into_iter()
            .find(|filter| filter.as_param() == s)
            .ok_or_else(|| DatePostedParseError(s.to_string()))
    }
}

/// The committed search driving the listing fetch.
///
/// Replaced wholesale on every submission, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub title: String,
    pub location: String,
    pub date_posted: DatePosted,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            title: "developer".to_string(),
            location: String::new(),
            date_posted: DatePosted::All,
        }
    }
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, location: impl Into<String>, date_posted: DatePosted) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            date_posted,
        }
    }

    /// Free-text `query` parameter: "<title> in <location>"
    pub fn api_query(&self) -> String {
        format!("{} in {}", self.title, self.location)
    }
}
