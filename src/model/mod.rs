//! Flow log data model.
//!
//! - `document` - the nested record/flow/group tree loaded from JSON
//! - `flow_tuple` - the validated, immutable decoded tuple

pub mod document;
pub mod flow_tuple;

pub use document::*;
pub use flow_tuple::*;
