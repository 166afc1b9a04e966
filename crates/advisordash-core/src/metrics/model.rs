//! Dashboard summary metrics.

use std::collections::HashMap;

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::email::{ConfidenceTier, EmailRecord, QueueStatus};
use crate::waiting::parse_received;

/// Headline numbers for the dashboard's metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardMetrics {
    /// Emails received in the 24 hours before the computation instant.
    pub emails_today: usize,
    /// Emails routed to the auto-sent queue.
    pub auto_sent: usize,
    /// Emails held for manual review.
    pub manual_review: usize,
    /// Mean classifier confidence over auto-sent emails, 0 when none.
    pub avg_confidence: f64,
}

impl DashboardMetrics {
    /// Computes the metric cards from a record set as of `now`.
    ///
    /// Records whose timestamp does not parse are excluded from the
    /// received-today count but still contribute to the queue counts and
    /// confidence average.
    #[must_use]
    pub fn compute(emails: &[EmailRecord], now: DateTime<Utc>) -> Self {
        let emails_today = emails
            .iter()
            .filter(|email| {
                parse_received(&email.received_at).is_ok_and(|received| {
                    now.signed_duration_since(received) <= Duration::hours(24)
                })
            })
            .count();

        let auto_sent = emails
            .iter()
            .filter(|email| email.status == QueueStatus::Auto)
            .count();
        let manual_review = emails.len() - auto_sent;

        let avg_confidence = if auto_sent == 0 {
            0.0
        } else {
            let total: f64 = emails
                .iter()
                .filter(|email| email.status == QueueStatus::Auto)
                .map(|email| email.confidence)
                .sum();
            total / to_f64(auto_sent)
        };

        debug!(emails_today, auto_sent, manual_review, "computed dashboard metrics");

        Self {
            emails_today,
            auto_sent,
            manual_review,
            avg_confidence,
        }
    }

    /// Share of all emails that were auto-sent, as a percentage.
    #[must_use]
    pub fn auto_sent_percent(&self) -> f64 {
        percent(self.auto_sent, self.auto_sent + self.manual_review)
    }

    /// Share of all emails still pending review, as a percentage.
    #[must_use]
    pub fn manual_review_percent(&self) -> f64 {
        percent(self.manual_review, self.auto_sent + self.manual_review)
    }
}

/// Daily counts of still-pending review emails over the trailing window.
///
/// Covers the last `days` UTC calendar days including today, oldest
/// first. Only review-queue records count; records whose timestamp does
/// not parse, or falls outside the window, are skipped.
#[must_use]
pub fn pending_by_day(
    emails: &[EmailRecord],
    now: DateTime<Utc>,
    days: u64,
) -> Vec<(NaiveDate, usize)> {
    let today = now.date_naive();
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();

    for email in emails {
        if email.status != QueueStatus::Review {
            continue;
        }
        if let Ok(received) = parse_received(&email.received_at) {
            *counts.entry(received.date_naive()).or_default() += 1;
        }
    }

    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|day| (day, counts.get(&day).copied().unwrap_or(0)))
        .collect()
}

/// Counts records per confidence bracket, lowest bracket first.
///
/// The data behind the analytics distribution chart.
#[must_use]
pub fn confidence_histogram(emails: &[EmailRecord]) -> Vec<(ConfidenceTier, usize)> {
    ConfidenceTier::ALL
        .into_iter()
        .map(|tier| {
            let count = emails
                .iter()
                .filter(|email| email.confidence_tier() == tier)
                .count();
            (tier, count)
        })
        .collect()
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        to_f64(part) / to_f64(whole) * 100.0
    }
}

// Counts here are small enough that the f64 conversion is exact.
#[allow(clippy::cast_precision_loss)]
const fn to_f64(count: usize) -> f64 {
    count as f64
}
