use crate::jsearch::JobDetail;
use dioxus::prelude::*;

use super::utils::{description_lines, format_posted_date, location_line};

#[component]
pub fn JobDetailView(job: JobDetail) -> Element {
    let location = location_line(&job);
    let posted_on = format_posted_date(job.job_posted_at_datetime_utc.as_deref());
    let employment_type = job.job_employment_type.clone().unwrap_or_default();

    rsx! {
        div { class: "detail-card",
            h1 { class: "job-title", "{job.job_title}" }
            p { class: "card-detail", "Employer: {job.employer_name}" }
            p { class: "card-detail", "Location: {location}" }
            p { class: "card-detail", "Type: {employment_type}" }
            p { class: "card-detail", "Posted on: {posted_on}" }
            h3 { class: "section-title", "Job Description:" }
            div { class: "description",
                for (index, line) in description_lines(&job.job_description).enumerate() {
                    p { key: "{index}", "{line}" }
                }
            }
        }
        if let Some(apply_link) = &job.job_apply_link {
            div { class: "apply",
                a {
                    class: "button button-dark",
                    href: "{apply_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Apply Now →"
                }
            }
        }
    }
}
