//! Flow tuple decoding.
//!
//! A flow tuple is one comma-separated observation inside a flow group:
//!
//! ```text
//! timestamp_ms,src_ip,dst_ip,src_port,dst_port,protocol,direction,state,encryption,s2d_packets,s2d_bytes,d2s_packets,d2s_bytes
//! ```
//!
//! [`FlowTuple`] can only be obtained through [`FlowTuple::parse`] (or the
//! `try_parse`/`FromStr`/`TryFrom` wrappers around it), so every instance has
//! all 13 fields decoded.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TupleError;

/// Number of comma-separated fields in a flow tuple.
pub const FIELD_COUNT: usize = 13;

const DELIMITER: char = ',';

/// One decoded flow observation.
///
/// IP addresses and the direction/state/encryption codes are kept as the
/// text that appeared in the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTuple {
    unix_timestamp: i64,
    source_ip_address: String,
    destination_ip_address: String,
    source_port: i32,
    destination_port: i32,
    iana_protocol_number: i32,
    traffic_flow: String,
    flow_state: String,
    flow_encryption_status: String,
    source_to_destination_packet_count: i64,
    source_to_destination_bytes: i64,
    destination_to_source_packet_count: i64,
    destination_to_source_bytes: i64,
}

impl FlowTuple {
    /// Decode a raw tuple, returning `None` if it is absent or malformed.
    ///
    /// Accepts both `&str` and `Option<&str>`.
    pub fn try_parse<'a>(raw: impl Into<Option<&'a str>>) -> Option<Self> {
        raw.into().and_then(|s| Self::parse(s).ok())
    }

    /// Decode a raw tuple, reporting why it was rejected.
    pub fn parse(raw: &str) -> Result<Self, TupleError> {
        if raw.is_empty() {
            return Err(TupleError::Empty);
        }

        let parts: Vec<&str> = raw.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(TupleError::FieldCount {
                expected: FIELD_COUNT,
                actual: parts.len(),
            });
        }

        Ok(Self {
            unix_timestamp: parse_int(parts[0], "unix_timestamp")?,
            source_ip_address: parts[1].to_string(),
            destination_ip_address: parts[2].to_string(),
            source_port: parse_int(parts[3], "source_port")?,
            destination_port: parse_int(parts[4], "destination_port")?,
            iana_protocol_number: parse_int(parts[5], "iana_protocol_number")?,
            traffic_flow: parts[6].to_string(),
            flow_state: parts[7].to_string(),
            flow_encryption_status: parts[8].to_string(),
            source_to_destination_packet_count: parse_int(
                parts[9],
                "source_to_destination_packet_count",
            )?,
            source_to_destination_bytes: parse_int(parts[10], "source_to_destination_bytes")?,
            destination_to_source_packet_count: parse_int(
                parts[11],
                "destination_to_source_packet_count",
            )?,
            destination_to_source_bytes: parse_int(parts[12], "destination_to_source_bytes")?,
        })
    }

    /// Flow start time in milliseconds since the Unix epoch.
    pub fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }

    pub fn source_ip_address(&self) -> &str {
        &self.source_ip_address
    }

    pub fn destination_ip_address(&self) -> &str {
        &self.destination_ip_address
    }

    pub fn source_port(&self) -> i32 {
        self.source_port
    }

    pub fn destination_port(&self) -> i32 {
        self.destination_port
    }

    /// IANA protocol number (6 = TCP, 17 = UDP).
    pub fn iana_protocol_number(&self) -> i32 {
        self.iana_protocol_number
    }

    /// Direction code, `I` (inbound) or `O` (outbound) in practice.
    pub fn traffic_flow(&self) -> &str {
        &self.traffic_flow
    }

    /// Flow state code (`B`egin, `C`ontinuing, `E`nd, `D`enied).
    pub fn flow_state(&self) -> &str {
        &self.flow_state
    }

    pub fn flow_encryption_status(&self) -> &str {
        &self.flow_encryption_status
    }

    pub fn source_to_destination_packet_count(&self) -> i64 {
        self.source_to_destination_packet_count
    }

    pub fn source_to_destination_bytes(&self) -> i64 {
        self.source_to_destination_bytes
    }

    pub fn destination_to_source_packet_count(&self) -> i64 {
        self.destination_to_source_packet_count
    }

    pub fn destination_to_source_bytes(&self) -> i64 {
        self.destination_to_source_bytes
    }
}

/// Parse a base-10 integer field.
///
/// Surrounding ASCII whitespace and a leading sign are accepted, like the
/// integer parser of the flow log producer.
fn parse_int<T: FromStr>(value: &str, field: &'static str) -> Result<T, TupleError> {
    value
        .trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
        .parse::<T>()
        .map_err(|_| TupleError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl FromStr for FlowTuple {
    type Err = TupleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FlowTuple {
    type Error = TupleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Renders the comma-separated wire form.
impl fmt::Display for FlowTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.unix_timestamp,
            self.source_ip_address,
            self.destination_ip_address,
            self.source_port,
            self.destination_port,
            self.iana_protocol_number,
            self.traffic_flow,
            self.flow_state,
            self.flow_encryption_status,
            self.source_to_destination_packet_count,
            self.source_to_destination_bytes,
            self.destination_to_source_packet_count,
            self.destination_to_source_bytes
        )
    }
}
