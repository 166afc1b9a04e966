//! Worklist shaping: sorting, tri-state sort toggling, search and quick
//! filters.
//!
//! Both triage tables share this logic; they differ only in which action
//! buttons the view renders.

mod filter;
mod sort;

pub use filter::{QuickFilter, filter_emails};
pub use sort::{SortField, SortOrder, SortSpec, sort_emails};
