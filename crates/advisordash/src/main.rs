//! `AdvisorDash` - academic-advising email triage dashboard.
//!
//! Terminal rendering of the two triage queues and the metrics summary
//! over the bundled sample data. All ordering, filtering, and badge
//! logic lives in `advisordash-core`; this shell only draws rows.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisordash_core::{
    AssignmentBook, DashboardMetrics, DraftBook, EmailRecord, EmailSource, MemorySource,
    QuickFilter, SortField, SortOrder, SortSpec, compute_waiting, filter_emails, format_received,
    pending_by_day, sort_emails,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisordash=info,advisordash_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AdvisorDash");

    // The wall clock enters exactly once, at the shell edge; everything
    // below takes the instant as a parameter.
    let now = Utc::now();

    let source = MemorySource::sample();
    let emails = source.list()?;

    let assignments = demo_assignments(&emails);
    let drafts = demo_drafts(&emails);

    render_metrics(&emails, now);

    // Freshest waiting times first, the review queue's default posture.
    let spec = SortSpec::new(SortField::Waiting, SortOrder::Descending);

    let review = filter_emails(&emails, "", QuickFilter::Review, now);
    render_queue("Needs Review", &review, spec, &assignments, &drafts, now)?;

    let auto = filter_emails(&emails, "", QuickFilter::Auto, now);
    render_queue("Auto-Sent", &auto, spec, &assignments, &drafts, now)?;

    Ok(())
}

/// Seed a couple of assignments so the Assigned column has content.
fn demo_assignments(emails: &[EmailRecord]) -> AssignmentBook {
    let mut assignments = AssignmentBook::new();
    if let Some(first) = emails.first() {
        assignments.assign(first.id, "Kelly");
    }
    if let Some(third) = emails.get(2) {
        assignments.assign(third.id, "Winsor");
    }
    assignments
}

/// Seed one saved draft so the draft indicator shows up.
fn demo_drafts(emails: &[EmailRecord]) -> DraftBook {
    let mut drafts = DraftBook::new();
    if let Some(first) = emails.first() {
        drafts.save(first.id, "Dear student,\n\nThanks for reaching out...");
    }
    drafts
}

fn render_metrics(emails: &[EmailRecord], now: DateTime<Utc>) {
    let metrics = DashboardMetrics::compute(emails, now);

    println!();
    println!("  Emails Today    Auto-Sent       Manual Review   Avg Confidence");
    println!(
        "  {:<15} {:<15} {:<15} {:.0}%",
        metrics.emails_today,
        format!("{} ({:.0}%)", metrics.auto_sent, metrics.auto_sent_percent()),
        format!("{} ({:.0}%)", metrics.manual_review, metrics.manual_review_percent()),
        metrics.avg_confidence * 100.0,
    );

    println!();
    println!("  Pending responses, last 7 days:");
    for (day, count) in pending_by_day(emails, now, 7) {
        println!("    {}  {}", day.format("%a %m/%d"), "#".repeat(count));
    }
}

fn render_queue(
    title: &str,
    emails: &[EmailRecord],
    spec: SortSpec,
    assignments: &AssignmentBook,
    drafts: &DraftBook,
    now: DateTime<Utc>,
) -> Result<()> {
    let sorted = sort_emails(emails, spec, assignments, now);

    println!();
    println!("== {title} ({}) ==", sorted.len());
    println!(
        "  {:<18} {:<8} {:<34} {:<12} {:>5}  {:<10} {}",
        "Student", "UNI", "Subject", "Assigned", "Conf", "Waiting", "Received"
    );

    for email in &sorted {
        let waiting = compute_waiting(&email.received_at, now)?;
        let received = format_received(&email.received_at)?;
        let student = email.student_name.as_deref().unwrap_or("Unknown");
        let draft_mark = if drafts.has_draft(email.id) { "*" } else { "" };

        println!(
            "  {:<18} {:<8} {:<34} {:<12} {:>4.0}%  {:<10} {}",
            format!("{student}{draft_mark}"),
            email.uni.as_deref().unwrap_or("—"),
            truncate(&email.subject, 32),
            assignments.get(email.id).unwrap_or("—"),
            email.confidence * 100.0,
            format!("{} [{}]", waiting.label, waiting.severity.as_str()),
            received,
        );
    }

    Ok(())
}

/// Clip a subject to the column width, marking the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}
