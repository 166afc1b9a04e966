//! Email record model and data-source abstraction.

mod model;
mod source;

pub use model::{ConfidenceTier, EmailId, EmailRecord, QueueStatus};
pub use source::{EmailSource, MemorySource};
