//! Vendor-neutral catalog metadata records for dataset assertions.
//!
//! This crate provides:
//! - Assertion aspect records (`AssertionInfo` and the freshness sub-records)
//! - The change-proposal wrapper addressed to a catalog entity URN
//!
//! Records serialize to the catalog wire format: camelCase field names and
//! SCREAMING_SNAKE_CASE enum values. Emission/transport of proposals is the
//! caller's concern; nothing in this crate performs I/O.

pub mod assertion;
pub mod mcp;

pub use assertion::*;
pub use mcp::*;
