use crate::jsearch::JobDetail;
use chrono::{DateTime, NaiveDateTime};

/// Description text as consecutive lines, split lazily on line breaks
pub fn description_lines(description: &str) -> impl Iterator<Item = &str> {
    description.lines()
}

/// "City, State", falling back to the country, then to "Remote"
pub fn location_line(job: &JobDetail) -> String {
    let parts: Vec<&str> = [job.job_city.as_deref(), job.job_state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();

    if !parts.is_empty() {
        return parts.join(", ");
    }

    match job.job_country.as_deref() {
        Some(country) if !country.trim().is_empty() => country.to_string(),
        _ if job.job_is_remote == Some(true) => "Remote".to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Short US-style date (M/D/YYYY) of the UTC posting timestamp
pub fn format_posted_date(posted_at: Option<&str>) -> String {
    let Some(raw) = posted_at else {
        return "Unknown".to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"));

    match date {
        Ok(dt) => dt.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
