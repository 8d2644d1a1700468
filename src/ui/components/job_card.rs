use crate::jsearch::JobSummary;
use crate::search::PageIndex;
use crate::ui::Route;
use dioxus::prelude::*;

const TITLE_LIMIT: usize = 20;

/// Cut titles longer than 20 characters and mark the cut with "..."
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let head: String = title.chars().take(TITLE_LIMIT).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

/// Grid card for one job; links to its detail view, remembering `page`
#[component]
pub fn JobCard(job: JobSummary, page: PageIndex) -> Element {
    let title = truncate_title(&job.job_title);
    let employment_type = job.job_employment_type.clone().unwrap_or_default();

    rsx! {
        div { class: "job-card",
            if let Some(logo) = &job.employer_logo {
                img {
                    class: "employer-logo",
                    src: "{logo}",
                    alt: "{job.employer_name}",
                }
            } else {
                div { class: "employer-logo employer-logo-missing" }
            }
            h2 { class: "job-title", title: "{job.job_title}", "{title}" }
            p { class: "card-detail", "{job.employer_name}" }
            p { class: "card-detail muted", "{employment_type}" }
            Link {
                to: Route::job_detail(job.job_id.clone(), page),
                class: "button button-block",
                "View Details"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_titles_are_untouched() {
        assert_eq!(truncate_title("Rust Developer"), "Rust Developer");
        assert_eq!(truncate_title("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(truncate_title(""), "");
    }

    #[test]
    fn test_long_titles_are_cut_at_twenty() {
        assert_eq!(
            truncate_title("Senior Software Engineer, Platform"),
            "Senior Software Engi..."
        );
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let title = "Développeur logiciel confirmé";
        let truncated = truncate_title(title);
        assert_eq!(truncated, "Développeur logiciel...");
    }
}
