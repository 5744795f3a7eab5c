//! Browse the job board from the terminal.
//!
//! Usage: `jobhub-browse [SEARCH] [PAGE]`

use anyhow::Context;
use chrono::Utc;
use tracing::info;

use jobhub_feed::{telemetry, FeedConfig, FirestoreJobBackend, JobFeed};
use jobhub_firestore::{FirestoreClient, UserRepository};
use jobhub_models::{Identity, UserRole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Ignored when another provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    dotenvy::dotenv().ok();
    telemetry::init().context("Failed to initialize logging")?;

    let mut args = std::env::args().skip(1);
    let search = args.next().filter(|s| !s.trim().is_empty());
    let page = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("PAGE must be a positive number, got {:?}", raw))?,
        None => 1,
    };

    let client = FirestoreClient::from_env()
        .await
        .context("Failed to create Firestore client")?;

    let identity = match std::env::var("JOBHUB_UID").ok().filter(|uid| !uid.is_empty()) {
        Some(uid) => Identity::authenticated(uid),
        None => Identity::Anonymous,
    };
    let role = match identity.uid() {
        Some(uid) => UserRepository::new(client.clone())
            .fetch_role(uid)
            .await
            .context("Failed to look up user role")?
            .unwrap_or_default(),
        None => UserRole::default(),
    };
    info!(role = %role, "Browsing job board");

    let config = FeedConfig::from_env();
    let mut feed = JobFeed::new(FirestoreJobBackend::new(client), config)
        .with_identity(identity, role);
    feed.refresh().await?;

    if let Some(search) = search {
        let mut draft = feed.draft();
        draft.set_search(search);
        feed.apply_filters(draft)?;
    }
    feed.set_page(page);

    let view = feed.view();
    println!("{}", feed.summary());

    if view.is_empty_result() {
        println!("No jobs found matching your filters.");
        return Ok(());
    }

    let now = Utc::now();
    for job in &view.jobs {
        println!();
        println!("{} at {} ({})", job.title, job.company_name, job.work_mode);
        println!("  {} | {} | {}", job.location, job.experience, job.salary);
        if !job.skills.is_empty() {
            println!("  Skills: {}", job.skills.join(", "));
        }
        println!("  Openings: {} | Posted {}", job.openings, job.posted_label(now));
    }

    if view.show_pagination() {
        println!();
        println!("Page {} of {}", view.current_page, view.total_pages);
    }

    Ok(())
}
