//! Held job results, one entry per search text, and the load that
//! refreshes them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use client::{JobQuery, JobSource};
use common::Job;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Searches kept at once. The one with the oldest ticket goes first.
pub const MAX_HELD_SEARCHES: usize = 64;

#[derive(Debug)]
struct Held {
    jobs: Vec<Job>,
    loaded_at: Instant,
    ticket: u64,
}

#[derive(Debug, Default)]
pub struct JobList {
    held: RwLock<HashMap<String, Held>>,
    in_flight: AtomicUsize,
    issued: AtomicU64,
}

/// Counts a load as in flight until dropped, including when the load's
/// future is dropped before it finishes.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl JobList {
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Jobs held for `search_text`; empty when nothing was loaded for it.
    pub async fn jobs(&self, search_text: &str) -> Vec<Job> {
        self.held
            .read()
            .await
            .get(search_text)
            .map(|h| h.jobs.clone())
            .unwrap_or_default()
    }

    pub async fn is_held(&self, search_text: &str) -> bool {
        self.held.read().await.contains_key(search_text)
    }

    /// True when nothing is held for `search_text` or the held result is
    /// older than `max_age`.
    pub async fn needs_load(&self, search_text: &str, max_age: Duration) -> bool {
        match self.held.read().await.get(search_text) {
            None => true,
            Some(h) => h.loaded_at.elapsed() >= max_age,
        }
    }

    /// Fetches jobs for `search_text` and holds them under that text.
    ///
    /// Failures are logged and leave that search's held jobs untouched.
    /// A result only lands if no later-issued load for the same text has
    /// landed first.
    pub async fn load(&self, source: &dyn JobSource, search_text: &str) {
        let _in_flight = InFlight::enter(&self.in_flight);
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let result = source.fetch_jobs(&JobQuery::new(search_text)).await;

        let jobs = match result {
            Ok(jobs) => jobs,
            Err(e) => {
                error!(search = search_text, error = %e, "Failed to load jobs");
                return;
            }
        };

        let mut held = self.held.write().await;
        if held.get(search_text).is_some_and(|h| h.ticket > ticket) {
            debug!(search = search_text, ticket, "Dropped superseded result");
            return;
        }

        debug!(search = search_text, jobs = jobs.len(), ticket, "Loaded jobs");
        held.insert(
            search_text.to_string(),
            Held {
                jobs,
                loaded_at: Instant::now(),
                ticket,
            },
        );

        if held.len() > MAX_HELD_SEARCHES {
            let oldest = held
                .iter()
                .min_by_key(|(_, h)| h.ticket)
                .map(|(text, _)| text.clone());
            if let Some(text) = oldest {
                held.remove(&text);
            }
        }
    }
}
