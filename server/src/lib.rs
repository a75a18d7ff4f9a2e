//! Job Board Server
//!
//! Renders the filterable job list over HTTP using Axum. Jobs come from
//! the hosted `jobs` table; type filtering happens here.

pub mod api;
pub mod config;
pub mod job_list;
pub mod render;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use client::JobSource;
use tower_http::trace::TraceLayer;

use crate::job_list::JobList;

/// Shared application state
pub struct AppState {
    pub source: Arc<dyn JobSource>,
    pub jobs: JobList,
    pub refresh_after: Duration,
}

impl AppState {
    pub fn new(source: Arc<dyn JobSource>, refresh_after: Duration) -> Self {
        Self {
            source,
            jobs: JobList::default(),
            refresh_after,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::page_handler))
        .route("/api/jobs", get(api::jobs_handler))
        .route("/health", get(api::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
