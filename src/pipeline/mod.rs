//! Pipeline orchestration module.
//!
//! Flow log ingestion that coordinates:
//! - Document size limits
//! - JSON loading
//! - Tuple decoding and rejection accounting

pub mod context;
pub mod ingestion;

pub use context::*;
pub use ingestion::*;
