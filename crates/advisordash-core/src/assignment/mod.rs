//! Advisor assignment and draft bookkeeping for the review table.

mod model;

pub use model::{ADVISORS, AssignmentBook, DraftBook};
