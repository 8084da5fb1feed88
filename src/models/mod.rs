//! Core data structures for resolved paper records.

mod record;

pub use record::{ExternalId, PaperRecord};
