//! Structured logging with ingest context.
//!
//! Log lines are prefixed with the ingest id and, for tuple-level events,
//! the record, ACL and rule the tuple came from.

pub mod structured;

pub use structured::*;
