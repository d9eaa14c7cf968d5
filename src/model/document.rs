//! Flow log document model.
//!
//! These types mirror the JSON layout of a virtual-network flow log blob:
//!
//! ```text
//! records[] -> flowRecords -> flows[] -> flowGroups[] -> flowTuples[]
//! ```
//!
//! Members missing from the JSON fall back to their defaults, so a sparse
//! record still loads and simply contributes no tuples. A `null` entry in
//! `flowTuples` loads as an absent tuple and is rejected at decode time.
//!
//! Member names match the documented casing. The `*Id` spellings some
//! producers emit (`aclId`, `flowLogGuid`, ...) are accepted as aliases;
//! other casings are not.

use std::io::Read;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::LoadError;
use crate::model::flow_tuple::FlowTuple;

/// Top-level flow log document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub records: Vec<Record>,
}

/// One flow logging event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: DateTime<Utc>,
    pub flow_log_version: i32,
    #[serde(rename = "flowLogGUID", alias = "flowLogGuid")]
    pub flow_log_guid: String,
    pub mac_address: String,
    pub category: String,
    #[serde(rename = "flowLogResourceID", alias = "flowLogResourceId")]
    pub flow_log_resource_id: String,
    #[serde(rename = "targetResourceID", alias = "targetResourceId")]
    pub target_resource_id: String,
    pub operation_name: String,
    pub flow_records: FlowRecords,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowRecords {
    pub flows: Vec<Flow>,
}

/// Flows evaluated against one access-control list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flow {
    #[serde(rename = "aclID", alias = "aclId")]
    pub acl_id: String,
    pub flow_groups: Vec<FlowGroup>,
}

/// Raw tuples that matched the same rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowGroup {
    pub rule: String,
    /// `None` for `null` entries.
    pub flow_tuples: Vec<Option<String>>,
}

/// Parse a record time.
///
/// RFC 3339 first; a timestamp without an offset is read as UTC.
pub fn parse_record_time(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_record_time(&raw).map_err(|e| de::Error::custom(format!("invalid time {:?}: {}", raw, e)))
}

impl Document {
    /// Load a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a document from a reader.
    ///
    /// The reader is drained into memory before decoding.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_slice(&buf)
    }

    /// Total number of raw tuple entries, including `null` ones.
    pub fn raw_tuple_count(&self) -> usize {
        self.records
            .iter()
            .flat_map(|r| &r.flow_records.flows)
            .flat_map(|f| &f.flow_groups)
            .map(|g| g.flow_tuples.len())
            .sum()
    }

    /// Valid flow tuples in document order.
    ///
    /// See [`crate::extraction::flatten`].
    pub fn flow_tuples(&self) -> impl Iterator<Item = FlowTuple> + '_ {
        crate::extraction::flatten(self)
    }
}
