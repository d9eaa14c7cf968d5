//! Flow tuple flattening.
//!
//! Walks `records -> flows -> flow groups -> raw tuples` in document order and
//! decodes each raw tuple. Malformed tuples are dropped without surfacing an
//! error; callers that need rejection counts use [`raw_tuples`] directly (as
//! the ingestion pipeline does).

use crate::error::TupleError;
use crate::logging::structured::LogContext;
use crate::model::{Document, Flow, FlowGroup, FlowTuple, Record};

/// A raw tuple entry together with where it sits in the document.
#[derive(Debug, Clone, Copy)]
pub struct RawTuple<'a> {
    pub record: &'a Record,
    pub flow: &'a Flow,
    pub group: &'a FlowGroup,
    /// `None` for a `null` entry.
    pub text: Option<&'a str>,
}

impl<'a> RawTuple<'a> {
    /// Decode this entry, reporting why it was rejected.
    pub fn decode(&self) -> Result<FlowTuple, TupleError> {
        self.text.ok_or(TupleError::Absent).and_then(FlowTuple::parse)
    }

    /// Decode this entry, logging rejections at debug level.
    pub fn parse(&self) -> Option<FlowTuple> {
        self.decode()
            .map_err(|e| log::debug!("{} TUPLE_REJECTED reason={}", self.log_context(), e))
            .ok()
    }

    /// Record, ACL and rule of this entry.
    pub fn log_context(&self) -> LogContext {
        LogContext::for_group(
            &self.record.flow_log_guid,
            &self.flow.acl_id,
            &self.group.rule,
        )
    }
}

/// Every raw tuple entry in document order, valid, malformed or `null`.
pub fn raw_tuples(document: &Document) -> impl Iterator<Item = RawTuple<'_>> + '_ {
    document.records.iter().flat_map(|record| {
        record.flow_records.flows.iter().flat_map(move |flow| {
            flow.flow_groups.iter().flat_map(move |group| {
                group.flow_tuples.iter().map(move |text| RawTuple {
                    record,
                    flow,
                    group,
                    text: text.as_deref(),
                })
            })
        })
    })
}

/// Valid flow tuples in document order.
///
/// The iterator is lazy; calling this again on the same document yields the
/// same sequence.
pub fn flatten(document: &Document) -> impl Iterator<Item = FlowTuple> + '_ {
    raw_tuples(document).filter_map(|raw| raw.parse())
}

/// Like [`flatten`], but keeps the origin of each tuple.
pub fn flatten_with_origin(
    document: &Document,
) -> impl Iterator<Item = (RawTuple<'_>, FlowTuple)> + '_ {
    raw_tuples(document).filter_map(|raw| raw.parse().map(|tuple| (raw, tuple)))
}
