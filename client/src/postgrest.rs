use async_trait::async_trait;
use common::Job;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::ClientError;
use crate::query::{JOBS_TABLE, JobQuery};
use crate::JobSource;

/// HTTP client for a Supabase project's REST endpoint.
#[derive(Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    table_url: String,
}

impl JobsClient {
    /// `base_url` is the project URL, e.g. `https://xyz.supabase.co`.
    /// `api_key` goes out as both the `apikey` header and the bearer token.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ClientError> {
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), JOBS_TABLE),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

#[async_trait]
impl JobSource for JobsClient {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, ClientError> {
        let response = self
            .http
            .get(&self.table_url)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        // A null body reads as no rows.
        let rows: Option<Vec<Job>> = response.json().await?;
        let jobs = rows.unwrap_or_default();

        debug!(
            search = query.search.as_deref().unwrap_or(""),
            rows = jobs.len(),
            "Fetched jobs"
        );
        Ok(jobs)
    }
}
