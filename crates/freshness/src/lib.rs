//! Freshness assertion YAML/JSON schema and change-proposal generation.
//!
//! This crate provides:
//! - Declarative freshness rules with serde deserialization (cron or
//!   fixed-interval cadence, discriminated by a `type` field)
//! - Compact duration strings ("1h30m", "90s", "250ms") for intervals
//! - Conversion into catalog change proposals (`cadence-catalog` records)
//! - Advisory lint checks for cron expressions, timezones, and intervals
//!
//! Parsing, linting, and conversion are pure: no I/O, no shared state, and
//! instances are immutable after construction.

pub mod duration;
pub mod error;
pub mod lint;
pub mod proposal;
pub mod schema;

pub use error::{Result, ValidationError};
pub use schema::{
    CronFreshnessAssertion, FixedIntervalFreshnessAssertion, FreshnessAssertion,
    FreshnessScheduleKind,
};
