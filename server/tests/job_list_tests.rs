mod support;

use std::sync::Arc;
use std::time::Duration;

use server::job_list::{JobList, MAX_HELD_SEARCHES};

use support::{GatedSource, StubSource, job};

const MINUTE: Duration = Duration::from_secs(60);

fn titles(jobs: &[common::Job]) -> Vec<String> {
    jobs.iter().map(|j| j.title.clone()).collect()
}

#[tokio::test]
async fn test_load_holds_jobs_under_search_text() {
    let list = JobList::default();
    let source = StubSource::new(vec![job(1, "Data PM", "contract"), job(2, "Designer", "full_time")]);

    list.load(&source, "data").await;

    assert_eq!(titles(&list.jobs("data").await), vec!["Data PM"]);
    assert!(list.jobs("").await.is_empty());
    assert!(!list.is_loading());
}

#[tokio::test]
async fn test_needs_load() {
    let list = JobList::default();
    assert!(list.needs_load("", MINUTE).await);

    let source = StubSource::new(vec![job(1, "PM", "full_time")]);
    list.load(&source, "").await;

    assert!(!list.needs_load("", MINUTE).await);
    assert!(list.needs_load("engineer", MINUTE).await);
    assert!(list.needs_load("", Duration::ZERO).await);
}

#[tokio::test]
async fn test_searches_are_held_separately() {
    let list = JobList::default();
    let source = StubSource::new(vec![job(1, "PM", "full_time"), job(2, "Engineer", "contract")]);

    list.load(&source, "").await;
    list.load(&source, "engineer").await;

    assert_eq!(titles(&list.jobs("").await), vec!["PM", "Engineer"]);
    assert_eq!(titles(&list.jobs("engineer").await), vec!["Engineer"]);
}

#[tokio::test]
async fn test_failure_keeps_jobs_and_clears_loading() {
    let list = JobList::default();
    let source = StubSource::new(vec![job(1, "PM", "full_time"), job(2, "APM", "internship")]);
    list.load(&source, "pm").await;

    source.set_failing(true);
    list.load(&source, "pm").await;

    assert_eq!(list.jobs("pm").await.len(), 2);
    assert!(!list.is_loading());
}

#[tokio::test]
async fn test_first_load_failure_holds_nothing() {
    let list = JobList::default();
    let source = StubSource::new(vec![job(1, "PM", "full_time")]);
    source.set_failing(true);

    list.load(&source, "").await;

    assert!(list.jobs("").await.is_empty());
    assert!(!list.is_held("").await);
    assert!(list.needs_load("", MINUTE).await);
}

#[tokio::test]
async fn test_superseded_result_for_same_search_is_dropped() {
    let list = Arc::new(JobList::default());
    let source = Arc::new(GatedSource::new());

    let slow = {
        let list = list.clone();
        let source = source.clone();
        tokio::spawn(async move {
            list.load(source.as_ref(), "pm").await;
        })
    };

    source.started.notified().await;
    assert!(list.is_loading());

    list.load(source.as_ref(), "pm").await;
    assert!(list.is_loading());

    source.gate.notify_one();
    slow.await.unwrap();

    assert_eq!(titles(&list.jobs("pm").await), vec!["pm #2"]);
    assert!(!list.is_loading());
}

#[tokio::test]
async fn test_overlapping_searches_keep_their_own_results() {
    let list = Arc::new(JobList::default());
    let source = Arc::new(GatedSource::new());

    let slow = {
        let list = list.clone();
        let source = source.clone();
        tokio::spawn(async move {
            list.load(source.as_ref(), "slow").await;
        })
    };

    source.started.notified().await;
    list.load(source.as_ref(), "fast").await;
    source.gate.notify_one();
    slow.await.unwrap();

    assert_eq!(titles(&list.jobs("slow").await), vec!["slow #1"]);
    assert_eq!(titles(&list.jobs("fast").await), vec!["fast #2"]);
}

#[tokio::test]
async fn test_cancelled_load_clears_loading() {
    let list = Arc::new(JobList::default());
    let source = Arc::new(GatedSource::new());

    let pending = {
        let list = list.clone();
        let source = source.clone();
        tokio::spawn(async move {
            list.load(source.as_ref(), "pm").await;
        })
    };

    source.started.notified().await;
    assert!(list.is_loading());

    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    assert!(!list.is_loading());
    assert!(!list.is_held("pm").await);
}

#[tokio::test]
async fn test_oldest_search_is_evicted() {
    let list = JobList::default();
    let source = StubSource::new(vec![job(1, "PM", "full_time")]);

    for i in 0..=MAX_HELD_SEARCHES {
        list.load(&source, &format!("search {i}")).await;
    }

    assert!(!list.is_held("search 0").await);
    assert!(list.is_held(&format!("search {MAX_HELD_SEARCHES}")).await);
}
