//! HTML for the job board page.

use common::card::{location_label, salary_label, seniority_label, title_line};
use common::filter::{SEARCH_PARAM, TYPE_PARAM, encode_query, toggle_type_query};
use common::{FilterState, Job, JobType};

/// Escapes text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn href(pairs: &[(String, String)]) -> String {
    let query = encode_query(pairs);
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query)
    }
}

/// Full page: search box, filters panel and the filtered job list.
pub fn page(filter: &FilterState, pairs: &[(String, String)], jobs: &[&Job]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Jobs</title>
</head>
<body>
<main class="board">
{search}
<aside class="filters-column">
{filters}
</aside>
<section class="jobs-column">
{list}
</section>
</main>
</body>
</html>
"#,
        search = search_form(filter),
        filters = filters_panel(filter, pairs),
        list = job_list(jobs),
    )
}

/// GET form for `q`. The current type selection rides along so a new
/// search keeps it.
pub fn search_form(filter: &FilterState) -> String {
    let mut html = format!(
        r#"<form class="search" method="get" action="/">
<input type="search" name="{q}" value="{value}" placeholder="Search jobs">
"#,
        q = SEARCH_PARAM,
        value = escape(&filter.q),
    );
    if !filter.types.is_empty() {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            TYPE_PARAM,
            escape(&filter.types.join(","))
        ));
    }
    html.push_str("<button type=\"submit\">Search</button>\n</form>");
    html
}

/// One checkbox per job type. Toggling navigates to the same page with
/// the tag added to or removed from `type`.
pub fn filters_panel(filter: &FilterState, pairs: &[(String, String)]) -> String {
    let mut html = String::from(
        "<div class=\"filters\">\n<h5>Type</h5>\n<fieldset>\n",
    );
    for job_type in JobType::ALL {
        let key = job_type.key();
        let label = job_type.label();
        let target = escape(&href(&toggle_type_query(pairs, key)));
        let checked = if filter.is_selected(key) { " checked" } else { "" };
        html.push_str(&format!(
            r#"<div class="filter-option">
<input id="{key}" type="checkbox" name="{label}" value="{key}" aria-describedby="{label}" data-href="{target}" onchange="window.location.assign(this.dataset.href)"{checked}>
<label for="{key}"><a href="{target}">{label}</a></label>
</div>
"#
        ));
    }
    html.push_str("</fieldset>\n</div>");
    html
}

pub fn job_list(jobs: &[&Job]) -> String {
    let mut html = String::from("<div class=\"job-list\">\n");
    for job in jobs {
        html.push_str(&job_card(job));
        html.push('\n');
    }
    html.push_str("</div>");
    html
}

pub fn job_card(job: &Job) -> String {
    let link = job
        .apply_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or("#");
    format!(
        r#"<a class="job-card" id="job-{id}" href="{link}">
<p class="job-title">{title}</p>
<p class="job-type">{job_type}</p>
<p class="job-seniority">{seniority}</p>
<p class="job-location">{location}</p>
<p class="job-salary">{salary}</p>
</a>"#,
        id = job.id,
        link = escape(link),
        title = escape(&title_line(job)),
        job_type = escape(&job.job_type),
        seniority = escape(seniority_label(job)),
        location = escape(location_label(job)),
        salary = escape(&salary_label(job)),
    )
}
