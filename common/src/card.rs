//! Labels shown on a job card.
//!
//! Backend values that are empty strings or zero salaries are treated as
//! missing, so a card never shows a blank slot.

use crate::job::Job;

pub const SENIORITY_FALLBACK: &str = "PM Role";
pub const LOCATION_FALLBACK: &str = "Remote";
pub const SALARY_FALLBACK: &str = "Competitive Salary";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn nonzero(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

pub fn title_line(job: &Job) -> String {
    match present(&job.company) {
        Some(company) => format!("{} at {}", job.title, company),
        None => job.title.clone(),
    }
}

pub fn seniority_label(job: &Job) -> &str {
    present(&job.seniority_level).unwrap_or(SENIORITY_FALLBACK)
}

pub fn location_label(job: &Job) -> &str {
    present(&job.location_metro)
        .or_else(|| present(&job.work_arrangement))
        .unwrap_or(LOCATION_FALLBACK)
}

/// Salary bounds are stored in thousands.
pub fn salary_label(job: &Job) -> String {
    match (nonzero(job.salary_min), nonzero(job.salary_max)) {
        (Some(min), Some(max)) => format!("${}k - ${}k", min, max),
        _ => SALARY_FALLBACK.to_string(),
    }
}
