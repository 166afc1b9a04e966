//! Search and quick-filter narrowing for the email worklist.

use chrono::{DateTime, Duration, Utc};

use crate::email::{EmailRecord, QueueStatus};
use crate::waiting::parse_received;

/// One of the quick-filter chips above the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickFilter {
    /// Show all emails.
    #[default]
    All,
    /// Pending manual review.
    Review,
    /// Already sent automatically.
    Auto,
    /// Received in the last 24 hours.
    Today,
    /// Confidence of 90% or more.
    HighConfidence,
    /// Confidence below 80%.
    LowConfidence,
}

impl QuickFilter {
    /// Every chip, in display order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Review,
        Self::Auto,
        Self::Today,
        Self::HighConfidence,
        Self::LowConfidence,
    ];

    /// Chip label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Review => "Needs Review",
            Self::Auto => "Auto-Sent",
            Self::Today => "Sent Today",
            Self::HighConfidence => "High Confidence",
            Self::LowConfidence => "Low Confidence",
        }
    }

    /// Chip tooltip description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::All => "Show all emails",
            Self::Review => "Pending manual review",
            Self::Auto => "Already sent",
            Self::Today => "Sent in last 24 hours",
            Self::HighConfidence => "90%+ confidence",
            Self::LowConfidence => "Below 80% confidence",
        }
    }

    /// Whether the record passes this filter as of `now`.
    ///
    /// Time-based filters drop records whose timestamp does not parse;
    /// the other filters keep them. A future-dated record counts as
    /// just-received, consistent with the waiting-time clamp.
    #[must_use]
    pub fn matches(&self, email: &EmailRecord, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Review => email.status == QueueStatus::Review,
            Self::Auto => email.status == QueueStatus::Auto,
            Self::Today => parse_received(&email.received_at).is_ok_and(|received| {
                now.signed_duration_since(received) <= Duration::hours(24)
            }),
            Self::HighConfidence => email.confidence >= 0.90,
            Self::LowConfidence => email.confidence < 0.80,
        }
    }
}

/// Narrows a worklist by search query, then quick filter.
///
/// Returns a new sequence in the input order; narrowing never reorders.
#[must_use]
pub fn filter_emails(
    emails: &[EmailRecord],
    query: &str,
    filter: QuickFilter,
    now: DateTime<Utc>,
) -> Vec<EmailRecord> {
    emails
        .iter()
        .filter(|email| email.matches_search(query) && filter.matches(email, now))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::email::EmailId;
    use chrono::TimeZone;

    fn email(id: i64, subject: &str, confidence: f64, status: QueueStatus, received_at: &str) -> EmailRecord {
        EmailRecord::new(EmailId::new(id), subject, confidence, status, received_at)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 18, 0, 0).unwrap()
    }

    fn fixtures() -> Vec<EmailRecord> {
        vec![
            email(1, "Withdraw from course", 0.87, QueueStatus::Review, "2024-11-02T10:15:00"),
            email(2, "Transcript request", 0.98, QueueStatus::Auto, "2024-11-01T08:30:00"),
            email(3, "Grade dispute", 0.76, QueueStatus::Review, "2024-11-02T14:40:00Z"),
            email(4, "Password reset", 0.95, QueueStatus::Auto, "not a timestamp"),
        ]
    }

    fn ids(records: &[EmailRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let sorted = filter_emails(&fixtures(), "", QuickFilter::All, now());
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_queue_filters() {
        let review = filter_emails(&fixtures(), "", QuickFilter::Review, now());
        assert_eq!(ids(&review), vec![1, 3]);

        let auto = filter_emails(&fixtures(), "", QuickFilter::Auto, now());
        assert_eq!(ids(&auto), vec![2, 4]);
    }

    #[test]
    fn test_today_drops_old_and_unparseable() {
        // Email 2 arrived 33.5 hours ago; email 4 never parses.
        let today = filter_emails(&fixtures(), "", QuickFilter::Today, now());
        assert_eq!(ids(&today), vec![1, 3]);
    }

    #[test]
    fn test_today_boundary_and_future() {
        let boundary = email(5, "x", 0.9, QueueStatus::Review, "2024-11-01T18:00:00");
        let future = email(6, "y", 0.9, QueueStatus::Review, "2024-11-03T00:00:00");
        assert!(QuickFilter::Today.matches(&boundary, now()));
        assert!(QuickFilter::Today.matches(&future, now()));
    }

    #[test]
    fn test_confidence_filters() {
        let high = filter_emails(&fixtures(), "", QuickFilter::HighConfidence, now());
        assert_eq!(ids(&high), vec![2, 4]);

        let low = filter_emails(&fixtures(), "", QuickFilter::LowConfidence, now());
        assert_eq!(ids(&low), vec![3]);
    }

    #[test]
    fn test_search_composes_with_filter() {
        let narrowed = filter_emails(&fixtures(), "re", QuickFilter::Auto, now());
        // "Transcript request" and "Password reset" both contain "re".
        assert_eq!(ids(&narrowed), vec![2, 4]);

        let narrowed = filter_emails(&fixtures(), "transcript", QuickFilter::Auto, now());
        assert_eq!(ids(&narrowed), vec![2]);

        let narrowed = filter_emails(&fixtures(), "transcript", QuickFilter::Review, now());
        assert!(narrowed.is_empty());
    }
}
