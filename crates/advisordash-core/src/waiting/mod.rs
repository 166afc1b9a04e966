//! Waiting-time classification and fixed-zone timestamp rendering.
//!
//! Waiting time is a function of the supplied "now" and must be
//! recomputed on every render or sort; caching it goes stale by
//! construction.

mod classify;
mod model;

pub use classify::{compute_waiting, format_received, parse_received};
pub use model::{NO_TIMESTAMP, Severity, WaitingTime};
