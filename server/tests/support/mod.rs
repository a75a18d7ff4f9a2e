#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use client::{ClientError, JobQuery, JobSource};
use common::Job;
use tokio::sync::Notify;

pub fn job(id: i64, title: &str, job_type: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        job_type: job_type.to_string(),
        created_at: DateTime::<Utc>::from_timestamp(1_700_000_000 + id, 0),
        apply_url: None,
        company: Some("Acme".to_string()),
        seniority_level: None,
        location_metro: None,
        work_arrangement: None,
        salary_min: None,
        salary_max: None,
        company_stage: None,
        primary_responsibilities: None,
    }
}

/// Answers every query with the same jobs, keeping only those whose title
/// contains the search text. Can be switched to fail.
pub struct StubSource {
    jobs: Mutex<Vec<Job>>,
    failing: AtomicBool,
    calls: AtomicUsize,
    queries: Mutex<Vec<JobQuery>>,
}

impl StubSource {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn set_jobs(&self, jobs: Vec<Job>) {
        *self.jobs.lock().unwrap() = jobs;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<JobQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for StubSource {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }

        let jobs = self.jobs.lock().unwrap();
        let matched = match &query.search {
            Some(text) => jobs
                .iter()
                .filter(|j| j.title.to_lowercase().contains(&text.to_lowercase()))
                .cloned()
                .collect(),
            None => jobs.clone(),
        };
        Ok(matched)
    }
}

/// Holds the first query until `gate` is released; later queries answer
/// immediately. Each answer is one job titled `"<search text> #<call>"`.
pub struct GatedSource {
    pub started: Notify,
    pub gate: Notify,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl JobSource for GatedSource {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, ClientError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == 1 {
            self.started.notify_one();
            self.gate.notified().await;
        }
        let text = query.search.clone().unwrap_or_default();
        Ok(vec![job(call as i64, &format!("{} #{}", text, call), "full_time")])
    }
}
