use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use common::{FilterState, Job};
use serde::Serialize;

use crate::AppState;
use crate::render;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub types: Vec<String>,
    pub total_results: usize,
    pub results: Vec<Job>,
}

/// Jobs for `search_text`, loading first unless a fresh result is held.
async fn jobs_for(state: &AppState, search_text: &str) -> Vec<Job> {
    if state.jobs.needs_load(search_text, state.refresh_after).await {
        state.jobs.load(state.source.as_ref(), search_text).await;
    }
    state.jobs.jobs(search_text).await
}

/// Handler for GET /?q=<text>&type=<tags>
pub async fn page_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let filter = FilterState::from_pairs(&pairs);
    let jobs = jobs_for(&state, &filter.q).await;
    let visible = filter.apply(&jobs);
    Html(render::page(&filter, &pairs, &visible))
}

/// Handler for GET /api/jobs?q=<text>&type=<tags>
pub async fn jobs_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let filter = FilterState::from_pairs(&pairs);
    let jobs = jobs_for(&state, &filter.q).await;
    let results: Vec<Job> = filter.apply(&jobs).into_iter().cloned().collect();

    Json(SearchResponse {
        total_results: results.len(),
        results,
        query: filter.q,
        types: filter.types,
    })
}

pub async fn health_handler() -> &'static str {
    "ok"
}
