//! Flow log ingestion pipeline.
//!
//! Coordinates the document workflow:
//! 1. Size check
//! 2. JSON loading
//! 3. Tuple decoding in document order
//! 4. Accepted/rejected accounting and logging

use crate::error::LoadError;
use crate::extraction::flatten::raw_tuples;
use crate::model::{Document, FlowTuple};

use super::context::IngestContext;

/// Size limit for a single flow log document (10MB).
pub const MAX_DOCUMENT_SIZE: usize = 10_000_000;

/// Result of ingesting one document.
#[derive(Debug)]
pub struct IngestResult {
    pub ingest_id: String,
    pub record_count: usize,
    pub received_count: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
    /// Accepted tuples, in document order.
    pub tuples: Vec<FlowTuple>,
}

/// Ingest a JSON flow log document.
///
/// Document-level failures are returned as errors; malformed tuples are
/// counted and logged but never fail the document.
pub fn process_document(ctx: &IngestContext, json: &str) -> Result<IngestResult, LoadError> {
    let log_ctx = ctx.log_context();

    if json.len() > MAX_DOCUMENT_SIZE {
        log::warn!(
            "{} SIZE_LIMIT_EXCEEDED size={} limit={}",
            log_ctx,
            json.len(),
            MAX_DOCUMENT_SIZE
        );
        return Err(LoadError::TooLarge {
            size: json.len(),
            limit: MAX_DOCUMENT_SIZE,
        });
    }

    let document = match Document::from_json(json) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{} DOCUMENT_PARSE_FAILED error={}", log_ctx, e);
            return Err(e);
        }
    };

    log::debug!(
        "{} DOCUMENT_LOADED source={:?} records={}",
        log_ctx,
        ctx.source,
        document.records.len()
    );

    Ok(process_loaded(ctx, &document))
}

/// Decode every tuple of an already loaded document.
pub fn process_loaded(ctx: &IngestContext, document: &Document) -> IngestResult {
    let mut tuples = Vec::new();
    let mut received = 0;
    let mut rejected = 0;

    for raw in raw_tuples(document) {
        received += 1;

        match raw.decode() {
            Ok(tuple) => tuples.push(tuple),
            Err(e) => {
                rejected += 1;
                log::warn!("{} TUPLE_REJECTED reason={}", ctx.tuple_context(&raw), e);
            }
        }
    }

    log::info!(
        "{} INGEST_COMPLETE records={} received={} accepted={} rejected={}",
        ctx.log_context(),
        document.records.len(),
        received,
        tuples.len(),
        rejected
    );

    IngestResult {
        ingest_id: ctx.ingest_id.clone(),
        record_count: document.records.len(),
        received_count: received,
        accepted_count: tuples.len(),
        rejected_count: rejected,
        tuples,
    }
}
