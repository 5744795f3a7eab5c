//! End-to-end feed behavior over the in-memory backend.

use chrono::{Duration, Utc};
use tokio_test::{assert_err, assert_ok};

use jobhub_feed::{
    BackendOp, FeedConfig, FeedError, JobBackend, JobFeed, LoadStatus, MemoryJobBackend,
    MissingUpdatePolicy, WorkModeFilter,
};
use jobhub_models::{Identity, Job, JobForm, JobId, UserRole, WorkMode, ANONYMOUS_UID};

fn job(id: &str, days_ago: i64, work_mode: WorkMode) -> Job {
    Job {
        id: JobId::from(id),
        title: format!("Engineer {}", id),
        company_name: "Acme".to_string(),
        experience: "2-5 years".to_string(),
        location: "Hyderabad, Telangana".to_string(),
        description: "Build the product".to_string(),
        skills: vec!["React".to_string(), "Node".to_string()],
        openings: 2,
        work_mode,
        salary: "₹6,00,000 - ₹10,00,000".to_string(),
        posted_at: Utc::now() - Duration::days(days_ago),
        posted_by: "emp-1".to_string(),
    }
}

fn form(title: &str) -> JobForm {
    JobForm {
        title: title.to_string(),
        company_name: "Globex".to_string(),
        experience: "5+ years".to_string(),
        location: "Chennai, Tamil Nadu".to_string(),
        description: "Lead the team".to_string(),
        skills: "Rust, Kubernetes".to_string(),
        openings: 1,
        work_mode: WorkMode::Wfo,
        salary: "₹20,00,000 - ₹30,00,000".to_string(),
    }
}

async fn loaded_feed(jobs: Vec<Job>) -> JobFeed<MemoryJobBackend> {
    let mut feed = JobFeed::new(MemoryJobBackend::with_jobs(jobs), FeedConfig::default());
    feed.refresh().await.unwrap();
    feed
}

fn numbered(n: usize) -> Vec<Job> {
    (0..n)
        .map(|i| job(&format!("j{:02}", i), i as i64, WorkMode::Remote))
        .collect()
}

#[tokio::test]
async fn test_hybrid_filter_on_fresh_feed() {
    let mut jobs = Vec::new();
    for i in 0..3 {
        jobs.push(job(&format!("today-{}", i), 0, WorkMode::Remote));
    }
    for i in 0..4 {
        jobs.push(job(&format!("older-{}", i), 5, WorkMode::Remote));
    }
    jobs[5].work_mode = WorkMode::Hybrid;
    let hybrid_id = jobs[5].id.clone();

    let mut feed = loaded_feed(jobs).await;
    assert_eq!(feed.view().filtered_count, 7);
    assert!(feed.view().show_pagination());

    let mut draft = feed.draft();
    draft.set_work_mode(WorkModeFilter::Only(WorkMode::Hybrid));
    feed.apply_filters(draft).unwrap();

    let view = feed.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.jobs.len(), 1);
    assert_eq!(view.jobs[0].id, hybrid_id);
    assert!(!view.show_pagination());
    assert_eq!(
        feed.summary().to_string(),
        "1 - 1 of 1 jobs | Work Mode: hybrid"
    );
}

#[tokio::test]
async fn test_newest_jobs_come_first() {
    let feed = loaded_feed(vec![
        job("old", 10, WorkMode::Remote),
        job("new", 0, WorkMode::Remote),
        job("mid", 3, WorkMode::Remote),
    ])
    .await;
    let order: Vec<&str> = feed.view().jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(order, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_last_page_of_fourteen() {
    let mut feed = loaded_feed(numbered(14)).await;
    feed.set_page(3);

    let view = feed.view();
    assert_eq!(view.total_pages, 3);
    let ids: Vec<&str> = view.jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j12", "j13"]);
    assert_eq!(feed.summary().range, "13 - 14 of 14");
}

#[tokio::test]
async fn test_deleting_sole_job_on_last_page_keeps_page() {
    let mut feed = loaded_feed(numbered(7)).await;
    feed.set_page(2);
    let last = feed.view().jobs[0].id.clone();
    assert_eq!(feed.view().total_pages, 2);

    feed.delete(&last).await.unwrap();

    let view = feed.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 2);
    assert!(view.jobs.is_empty());
    assert!(!view.is_empty_result());
    assert!(!view.has_next());
    assert!(feed.backend().jobs().await.iter().all(|j| j.id != last));
}

#[tokio::test]
async fn test_reset_filters_keeps_page_but_show_all_does_not() {
    let mut feed = loaded_feed(numbered(14)).await;

    let mut draft = feed.draft();
    draft.set_search("engineer").toggle_skill("React").set_experience("5");
    feed.apply_filters(draft).unwrap();
    feed.set_page(2);

    feed.reset_filters();
    assert!(feed.state().filters.is_default());
    assert_eq!(feed.state().current_page, 2);

    feed.set_page(3);
    feed.show_all();
    assert_eq!(feed.state().current_page, 1);
}

#[tokio::test]
async fn test_empty_result_and_show_all() {
    let mut feed = loaded_feed(numbered(3)).await;
    let mut draft = feed.draft();
    draft.set_search("astronaut");
    feed.apply_filters(draft).unwrap();

    let view = feed.view();
    assert!(view.is_empty_result());
    assert_eq!(feed.summary().range, "0");

    feed.show_all();
    assert_eq!(feed.view().filtered_count, 3);
}

#[tokio::test]
async fn test_create_appends_and_stamps_author() {
    let mut feed = JobFeed::new(MemoryJobBackend::new(), FeedConfig::default())
        .with_identity(Identity::authenticated("emp-9"), UserRole::Employer);
    feed.refresh().await.unwrap();
    assert!(feed.can_post_jobs());

    let job = assert_ok!(feed.create(form("Staff Engineer")).await);
    assert_eq!(job.posted_by, "emp-9");
    assert_eq!(job.skills, vec!["Rust", "Kubernetes"]);
    assert_eq!(feed.state().store.len(), 1);
    assert_eq!(feed.backend().jobs().await.len(), 1);
    assert_eq!(feed.view().jobs[0].id, job.id);
}

#[tokio::test]
async fn test_anonymous_create_uses_sentinel() {
    let mut feed = JobFeed::new(MemoryJobBackend::new(), FeedConfig::default());
    let job = feed.create(form("Intern")).await.unwrap();
    assert_eq!(job.posted_by, ANONYMOUS_UID);
    assert!(!feed.can_post_jobs());
}

#[tokio::test]
async fn test_failed_create_leaves_state_unchanged() {
    let mut feed = loaded_feed(numbered(2)).await;
    feed.backend().fail_next(BackendOp::Create).await;
    let before = feed.state().store.clone();

    let err = feed.create(form("Ghost")).await.unwrap_err();
    assert!(matches!(err, FeedError::Persistence { .. }));
    assert_eq!(feed.state().store, before);
    assert_eq!(feed.state().status, LoadStatus::Succeeded);
    assert!(feed.state().error.is_some());
}

#[tokio::test]
async fn test_invalid_form_never_reaches_backend() {
    let mut feed = loaded_feed(numbered(1)).await;
    let mut bad = form("Broken");
    bad.openings = 0;

    let err = feed.create(bad).await.unwrap_err();
    assert!(matches!(err, FeedError::Validation(_)));
    assert_eq!(feed.backend().jobs().await.len(), 1);
}

#[tokio::test]
async fn test_update_keeps_posting_metadata_and_clears_edit() {
    let original = job("a", 4, WorkMode::Remote);
    let mut feed = loaded_feed(vec![original.clone()]).await;

    let mut edit = feed.begin_edit(&original.id).unwrap();
    assert!(feed.state().edit_job.is_some());
    edit.title = "Principal Engineer".to_string();

    let updated = feed.update(&original.id, edit).await.unwrap();
    assert_eq!(updated.title, "Principal Engineer");
    assert_eq!(updated.posted_at, original.posted_at);
    assert_eq!(updated.posted_by, original.posted_by);
    assert_eq!(feed.state().store.get(&original.id), Some(&updated));
    assert!(feed.state().edit_job.is_none());
}

#[tokio::test]
async fn test_failed_update_leaves_store_unchanged() {
    let original = job("a", 1, WorkMode::Remote);
    let mut feed = loaded_feed(vec![original.clone()]).await;
    feed.backend().fail_next(BackendOp::Update).await;

    assert_err!(feed.update(&original.id, form("Changed")).await);
    assert_eq!(feed.state().store.get(&original.id), Some(&original));
}

#[tokio::test]
async fn test_update_of_job_missing_locally_still_writes() {
    let remote = job("remote-only", 1, WorkMode::Remote);
    let backend = MemoryJobBackend::with_jobs(vec![remote.clone()]);
    let mut feed = JobFeed::new(backend, FeedConfig::default());

    feed.update(&remote.id, form("Rewritten")).await.unwrap();
    assert!(feed.state().store.is_empty());
    assert_eq!(feed.backend().jobs().await[0].title, "Rewritten");
}

#[tokio::test]
async fn test_update_of_missing_job_rejected_by_policy() {
    let remote = job("remote-only", 1, WorkMode::Remote);
    let backend = MemoryJobBackend::with_jobs(vec![remote.clone()]);
    let config = FeedConfig::default().with_missing_update(MissingUpdatePolicy::Reject);
    let mut feed = JobFeed::new(backend, config);

    let err = feed.update(&remote.id, form("Rewritten")).await.unwrap_err();
    assert!(matches!(err, FeedError::NotFound(id) if id == remote.id));
    assert_eq!(feed.backend().jobs().await[0].title, remote.title);
}

#[tokio::test]
async fn test_failed_delete_keeps_job() {
    let mut feed = loaded_feed(numbered(2)).await;
    feed.backend().fail_next(BackendOp::Delete).await;
    let id = JobId::from("j00");

    assert_err!(feed.delete(&id).await);
    assert!(feed.state().store.contains(&id));
}

#[tokio::test]
async fn test_deleting_absent_job_is_ok() {
    let mut feed = loaded_feed(numbered(2)).await;
    assert_ok!(feed.delete(&JobId::from("nope")).await);
    assert_eq!(feed.state().store.len(), 2);
}

#[tokio::test]
async fn test_failed_refresh_sets_status_and_keeps_jobs() {
    let mut feed = loaded_feed(numbered(3)).await;
    feed.backend().fail_next(BackendOp::FetchAll).await;

    assert_err!(feed.refresh().await);
    assert_eq!(feed.state().status, LoadStatus::Failed);
    assert_eq!(feed.state().store.len(), 3);
    assert!(feed.state().error.as_deref().unwrap_or_default().contains("fetch jobs"));
}

#[tokio::test]
async fn test_refresh_picks_up_external_writes() {
    let mut feed = loaded_feed(numbered(1)).await;
    let input = job("x", 0, WorkMode::Hybrid).to_input();
    feed.backend().create(&input).await.unwrap();

    assert_eq!(feed.state().store.len(), 1);
    feed.refresh().await.unwrap();
    assert_eq!(feed.state().store.len(), 2);
}

#[tokio::test]
async fn test_inverted_salary_draft_is_rejected() {
    let mut feed = loaded_feed(numbered(2)).await;
    feed.set_page(2);
    let mut draft = feed.draft();
    draft.set_salary_min(50.0).set_salary_max(10.0);

    assert!(matches!(
        feed.apply_filters(draft),
        Err(FeedError::InvalidSalaryRange { .. })
    ));
    assert!(feed.state().filters.is_default());
    assert_eq!(feed.state().current_page, 2);
}

#[tokio::test]
async fn test_filter_options_follow_loaded_jobs() {
    let feed = loaded_feed(numbered(3)).await;
    let options = feed.filter_options();
    assert_eq!(options.locations, vec!["Hyderabad"]);
    assert_eq!(options.skills, vec!["React", "Node"]);
}
