//! Assertion aspect records.
//!
//! These mirror the catalog's assertion schema closely enough that a
//! serialized proposal is accepted verbatim. Only the freshness sub-records
//! are populated by this workspace; the surrounding enums carry the full
//! catalog value sets so new assertion kinds slot in as enum variants.

use serde::{Deserialize, Serialize};

// ── Assertion kind enums ────────────────────────────────────────────

/// Top-level assertion categories known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssertionType {
    Dataset,
    Freshness,
    Volume,
    Sql,
    Field,
    DataSchema,
    Custom,
}

/// What a freshness assertion watches for on the target entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreshnessAssertionType {
    DatasetChange,
    DataJobRun,
}

/// How a freshness schedule is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreshnessAssertionScheduleType {
    Cron,
    FixedInterval,
}

/// Calendar units for fixed-interval schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarInterval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

// ── Schedule records ────────────────────────────────────────────────

/// A cron-based schedule: expression plus IANA timezone, both verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessCronSchedule {
    pub cron: String,
    pub timezone: String,
}

/// A repeating fixed-duration schedule: `multiple` units of `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIntervalSchedule {
    pub unit: CalendarInterval,
    pub multiple: u64,
}

/// Discriminated schedule record: exactly one sub-record is populated,
/// matching `type`. Use the constructors to keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessAssertionSchedule {
    #[serde(rename = "type")]
    pub schedule_type: FreshnessAssertionScheduleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<FreshnessCronSchedule>,
    #[serde(
        default,
        rename = "fixedInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub fixed_interval: Option<FixedIntervalSchedule>,
}

impl FreshnessAssertionSchedule {
    /// Build a `CRON`-tagged schedule.
    pub fn cron(cron: FreshnessCronSchedule) -> Self {
        Self {
            schedule_type: FreshnessAssertionScheduleType::Cron,
            cron: Some(cron),
            fixed_interval: None,
        }
    }

    /// Build a `FIXED_INTERVAL`-tagged schedule.
    pub fn fixed_interval(interval: FixedIntervalSchedule) -> Self {
        Self {
            schedule_type: FreshnessAssertionScheduleType::FixedInterval,
            cron: None,
            fixed_interval: Some(interval),
        }
    }
}

// ── Assertion info records ──────────────────────────────────────────

/// Freshness-specific assertion details addressed at a dataset entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessAssertionInfo {
    #[serde(rename = "type")]
    pub freshness_type: FreshnessAssertionType,
    /// URN of the entity the assertion watches.
    pub entity: String,
    pub schedule: FreshnessAssertionSchedule,
}

/// The assertion aspect attached to an assertion entity.
///
/// One sub-record per assertion category; only `freshnessAssertion` is
/// produced by this workspace today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionInfo {
    #[serde(rename = "type")]
    pub assertion_type: AssertionType,
    #[serde(
        default,
        rename = "freshnessAssertion",
        skip_serializing_if = "Option::is_none"
    )]
    pub freshness_assertion: Option<FreshnessAssertionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
