//! Dashboard metrics: headline cards, pending-over-time series, and the
//! confidence distribution.

mod model;

pub use model::{DashboardMetrics, confidence_histogram, pending_by_day};
