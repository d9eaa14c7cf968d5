//! Pipeline context management.
//!
//! Provides the per-document ingest context used for logging.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::extraction::flatten::RawTuple;
use crate::logging::structured::LogContext;

/// Context for one ingested flow log document.
#[derive(Debug, Clone)]
pub struct IngestContext {
    pub ingest_id: String,
    pub received_at: DateTime<Utc>,
    /// Where the document came from (blob path, file name), if known.
    pub source: Option<String>,
}

impl IngestContext {
    pub fn new(source: Option<&str>) -> Self {
        let ingest_id = format!("ingest-{}", &Uuid::new_v4().simple().to_string()[..8]);

        Self {
            ingest_id,
            received_at: Utc::now(),
            source: source.map(|s| s.to_string()),
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::for_ingest(&self.ingest_id)
    }

    /// Log context for one raw tuple of the document.
    pub fn tuple_context(&self, raw: &RawTuple<'_>) -> LogContext {
        raw.log_context().with_ingest(&self.ingest_id)
    }
}
