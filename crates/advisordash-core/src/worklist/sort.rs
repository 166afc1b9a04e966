//! Multi-key sorting for the triage tables.
//!
//! One sorter serves both the review and auto-sent views; the two tables
//! differ only in which action buttons they render, not in ordering
//! behavior.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::assignment::AssignmentBook;
use crate::email::EmailRecord;
use crate::waiting::{compute_waiting, parse_received};

/// Sortable columns of the triage tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Student display name.
    Student,
    /// University-issued student identifier.
    Uni,
    /// Subject line.
    Subject,
    /// Assigned advisor.
    Assigned,
    /// Classifier confidence.
    Confidence,
    /// Elapsed waiting time.
    Waiting,
    /// Received timestamp.
    Received,
}

impl SortField {
    /// Column header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Uni => "UNI",
            Self::Subject => "Subject",
            Self::Assigned => "Assigned",
            Self::Confidence => "Confidence",
            Self::Waiting => "Waiting",
            Self::Received => "Received",
        }
    }
}

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// The caller's current sort selection.
///
/// Both fields are `None` in the unsorted state, which leaves the
/// upstream order untouched. The two are always set or cleared together;
/// [`SortSpec::advance`] is the only transition the header clicks use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    /// Column currently sorted by, if any.
    pub field: Option<SortField>,
    /// Direction for `field`, if any.
    pub order: Option<SortOrder>,
}

impl SortSpec {
    /// The unsorted state.
    #[must_use]
    pub const fn unsorted() -> Self {
        Self {
            field: None,
            order: None,
        }
    }

    /// An active sort on `field` in `order`.
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self {
            field: Some(field),
            order: Some(order),
        }
    }

    /// Whether a sort is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.field.is_some() && self.order.is_some()
    }

    /// Advances the selection for a click on a column header.
    ///
    /// Clicking the active column cycles ascending, descending, unsorted;
    /// reaching unsorted clears the field too. Clicking any other column
    /// re-enters at ascending.
    #[must_use]
    pub fn advance(self, clicked: SortField) -> Self {
        match (self.field, self.order) {
            (Some(field), Some(SortOrder::Ascending)) if field == clicked => {
                Self::new(field, SortOrder::Descending)
            }
            (Some(field), Some(SortOrder::Descending)) if field == clicked => Self::unsorted(),
            _ => Self::new(clicked, SortOrder::Ascending),
        }
    }
}

/// Sorts email records for display.
///
/// Returns a new sequence; the input is never mutated. With no active
/// sort the upstream order is returned unchanged. The sort is stable, so
/// equal keys keep their relative order and repeated sorts are
/// idempotent.
///
/// `now` feeds the waiting-time key, which is re-evaluated on every call
/// rather than cached; two calls at different instants can legitimately
/// order the same data differently.
#[must_use]
pub fn sort_emails(
    emails: &[EmailRecord],
    spec: SortSpec,
    assignments: &AssignmentBook,
    now: DateTime<Utc>,
) -> Vec<EmailRecord> {
    let mut sorted = emails.to_vec();
    let (Some(field), Some(order)) = (spec.field, spec.order) else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_by(field, a, b, assignments, now);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(
    field: SortField,
    a: &EmailRecord,
    b: &EmailRecord,
    assignments: &AssignmentBook,
    now: DateTime<Utc>,
) -> Ordering {
    match field {
        SortField::Student => {
            text_key(a.student_name.as_deref()).cmp(&text_key(b.student_name.as_deref()))
        }
        SortField::Uni => text_key(a.uni.as_deref()).cmp(&text_key(b.uni.as_deref())),
        SortField::Subject => {
            text_key(Some(a.subject.as_str())).cmp(&text_key(Some(b.subject.as_str())))
        }
        SortField::Assigned => {
            text_key(assignments.get(a.id)).cmp(&text_key(assignments.get(b.id)))
        }
        SortField::Confidence => a.confidence.total_cmp(&b.confidence),
        SortField::Waiting => waiting_key(a, now).cmp(&waiting_key(b, now)),
        SortField::Received => received_key(a).cmp(&received_key(b)),
    }
}

/// Case-insensitized text key; missing values compare as empty.
fn text_key(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

/// Unparseable timestamps take the zero key so the comparator stays
/// total; the parse error itself surfaces through `compute_waiting` and
/// `format_received` where callers inspect individual rows.
fn waiting_key(email: &EmailRecord, now: DateTime<Utc>) -> u64 {
    compute_waiting(&email.received_at, now)
        .map(|info| info.minutes)
        .unwrap_or(0)
}

fn received_key(email: &EmailRecord) -> i64 {
    parse_received(&email.received_at)
        .map(|instant| instant.timestamp_millis())
        .unwrap_or(0)
}
