//! Structured logging utilities.
//!
//! A [`LogContext`] collects the coordinates of whatever a log line is about
//! (ingest, record, ACL, rule) and renders the known ones as `key=value`
//! pairs in a fixed order, ahead of the event name.

use std::fmt;

/// Where in the ingest a log line points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    pub ingest_id: Option<String>,
    pub record_id: Option<String>,
    pub acl_id: Option<String>,
    pub rule: Option<String>,
}

impl LogContext {
    /// Context for one ingested document.
    pub fn for_ingest(ingest_id: &str) -> Self {
        Self {
            ingest_id: Some(ingest_id.to_string()),
            ..Self::default()
        }
    }

    /// Context for one flow group, without an ingest.
    pub fn for_group(record_id: &str, acl_id: &str, rule: &str) -> Self {
        Self {
            ingest_id: None,
            record_id: Some(record_id.to_string()),
            acl_id: Some(acl_id.to_string()),
            rule: Some(rule.to_string()),
        }
    }

    pub fn with_ingest(mut self, ingest_id: &str) -> Self {
        self.ingest_id = Some(ingest_id.to_string());
        self
    }

    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("ingest", &self.ingest_id),
            ("record", &self.record_id),
            ("acl", &self.acl_id),
            ("rule", &self.rule),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // Empty ids are common in sparse records; keep the key visible.
            if value.is_empty() {
                write!(f, "{}=\"\"", key)?;
            } else {
                write!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}
