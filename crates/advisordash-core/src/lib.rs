//! # advisordash-core
//!
//! Core triage logic for `AdvisorDash`, the academic-advising email
//! dashboard.
//!
//! This crate provides:
//! - Email record model and data-source abstraction
//! - Waiting-time classification with severity bucketing
//! - Fixed-zone (Eastern) timestamp rendering
//! - Multi-key worklist sorting with a tri-state column toggle
//! - Search and quick filters
//! - Advisor assignment and draft bookkeeping
//! - Dashboard metrics
//!
//! Everything is synchronous and pure: "now" is an explicit parameter
//! wherever time enters, confidence scores are injected by the upstream
//! classifier, and no function here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod assignment;
pub mod email;
mod error;
pub mod metrics;
pub mod waiting;
pub mod worklist;

pub use assignment::{ADVISORS, AssignmentBook, DraftBook};
pub use email::{ConfidenceTier, EmailId, EmailRecord, EmailSource, MemorySource, QueueStatus};
pub use error::{Error, Result};
pub use metrics::{DashboardMetrics, confidence_histogram, pending_by_day};
pub use waiting::{
    NO_TIMESTAMP, Severity, WaitingTime, compute_waiting, format_received, parse_received,
};
pub use worklist::{QuickFilter, SortField, SortOrder, SortSpec, filter_emails, sort_emails};
