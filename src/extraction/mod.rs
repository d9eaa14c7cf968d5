//! Flow tuple extraction module.
//!
//! Flattens the nested flow log document into a sequence of decoded tuples.

pub mod flatten;

pub use flatten::*;
