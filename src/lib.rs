//! VnetFlow Core - flow log tuple extraction
//!
//! This crate decodes virtual-network flow log documents into individual
//! flow tuples. The implementation prioritizes:
//!
//! 1. **Validation** - A `FlowTuple` only exists if all 13 fields decoded
//! 2. **Logging** - Rejections and document summaries logged with context
//! 3. **Laziness** - Tuples are decoded on demand while walking the document
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `model` - Document tree and the validated `FlowTuple`
//! - `extraction` - Document-order flattening into decoded tuples
//! - `pipeline` - Per-document ingestion with rejection accounting
//! - `logging` - Structured logging with ingest context
//! - `error` - Typed errors

pub mod error;
pub mod extraction;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use error::{LoadError, TupleError};
pub use extraction::flatten::{flatten, flatten_with_origin, raw_tuples, RawTuple};
pub use model::{Document, Flow, FlowGroup, FlowRecords, FlowTuple, Record};

use pipeline::context::IngestContext;
use pipeline::ingestion::{process_document, IngestResult};

/// Initialize the crate-level logger.
///
/// Safe to call more than once; `RUST_LOG` overrides the default level.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Ingest one JSON flow log document.
///
/// This is the main entry point. It handles:
/// - Logger setup
/// - Document size limits and JSON loading
/// - Tuple decoding with rejection accounting
///
/// # Arguments
/// * `json` - The flow log document
/// * `source` - Optional origin of the document, for log lines
pub fn ingest_document(json: &str, source: Option<&str>) -> Result<IngestResult, LoadError> {
    init_logger();

    let ctx = IngestContext::new(source);

    log::info!(
        "DOCUMENT_RECEIVED ingest_id={} bytes={} source={:?}",
        ctx.ingest_id,
        json.len(),
        source
    );

    process_document(&ctx, json)
}
