/// Table holding the listings.
pub const JOBS_TABLE: &str = "jobs";

/// Columns requested on every read.
pub const JOB_COLUMNS: [&str; 14] = [
    "id",
    "title",
    "description",
    "type",
    "created_at",
    "apply_url",
    "company",
    "seniority_level",
    "location_metro",
    "work_arrangement",
    "salary_min",
    "salary_max",
    "company_stage",
    "primary_responsibilities",
];

/// Generated tsvector column the full-text predicate runs against.
pub const SEARCH_COLUMN: &str = "fts";

/// One read of the jobs table: an optional full-text search, always
/// ordered by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub search: Option<String>,
}

impl JobQuery {
    /// Empty text means no predicate.
    pub fn new(search_text: &str) -> Self {
        let search = if search_text.is_empty() {
            None
        } else {
            Some(search_text.to_string())
        };
        Self { search }
    }

    /// PostgREST query parameters for this read.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), JOB_COLUMNS.join(","))];
        if let Some(text) = &self.search {
            params.push((SEARCH_COLUMN.to_string(), format!("fts.{}", text)));
        }
        params.push(("order".to_string(), "title.asc".to_string()));
        params
    }
}
