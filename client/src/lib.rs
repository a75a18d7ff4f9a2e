//! Read access to the hosted `jobs` table.
//!
//! The backend speaks PostgREST: a table is a URL, filters and ordering
//! are query parameters, and rows come back as a JSON array.

mod error;
mod postgrest;
mod query;

pub use error::ClientError;
pub use postgrest::JobsClient;
pub use query::{JOB_COLUMNS, JOBS_TABLE, JobQuery, SEARCH_COLUMN};

use async_trait::async_trait;
use common::Job;

/// Anything that can answer a job query.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, ClientError>;
}
