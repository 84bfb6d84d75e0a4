//! Freshness rule schema with serde deserialization.
//!
//! A rule is a small mapping discriminated by its `type` field:
//!
//! ```yaml
//! type: cron
//! cron: "0 0 * * *"
//! timezone: UTC
//! description: nightly load must have landed
//! ```
//!
//! ```yaml
//! type: interval
//! interval: 1h30m
//! ```
//!
//! Construction goes through the explicit `from_*` functions, which surface
//! every deserialization failure as a [`ValidationError`]. A successfully
//! constructed assertion is immutable and cannot fail downstream conversion.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ValidationError};

// ── Schedule kind ───────────────────────────────────────────────────

/// The two supported schedule representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessScheduleKind {
    Cron,
    Interval,
}

impl FreshnessScheduleKind {
    /// The literal discriminator value used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessScheduleKind::Cron => "cron",
            FreshnessScheduleKind::Interval => "interval",
        }
    }
}

impl fmt::Display for FreshnessScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Variant types ───────────────────────────────────────────────────

/// Dataset is fresh when it has been updated per the cron cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CronFreshnessAssertion {
    /// Cron expression, accepted verbatim. See <https://crontab.guru/>.
    pub cron: String,
    /// IANA timezone for the cron schedule. Defaults to UTC.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Dataset is fresh when it has been updated within the repeating interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedIntervalFreshnessAssertion {
    /// Expected update interval. Sub-second precision is kept here and
    /// truncated to whole seconds when the schedule record is generated.
    #[serde(with = "crate::duration")]
    pub interval: Duration,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Discriminated union ─────────────────────────────────────────────

/// A freshness rule: exactly one schedule variant, selected by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FreshnessAssertion {
    Cron(CronFreshnessAssertion),
    Interval(FixedIntervalFreshnessAssertion),
}

impl FreshnessAssertion {
    /// Parse a rule from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let assertion: Self = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::new("assertion", e.to_string()))?;
        debug!(kind = %assertion.kind(), "parsed freshness assertion");
        Ok(assertion)
    }

    /// Parse a rule from an already-loaded YAML value.
    pub fn from_yaml_value(value: serde_yaml::Value) -> Result<Self> {
        let assertion: Self = serde_yaml::from_value(value)
            .map_err(|e| ValidationError::new("assertion", e.to_string()))?;
        debug!(kind = %assertion.kind(), "parsed freshness assertion");
        Ok(assertion)
    }

    /// Parse a rule from an already-loaded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let assertion: Self = serde_json::from_value(value)
            .map_err(|e| ValidationError::new("assertion", e.to_string()))?;
        debug!(kind = %assertion.kind(), "parsed freshness assertion");
        Ok(assertion)
    }

    /// The schedule kind of the active variant.
    pub fn kind(&self) -> FreshnessScheduleKind {
        match self {
            FreshnessAssertion::Cron(_) => FreshnessScheduleKind::Cron,
            FreshnessAssertion::Interval(_) => FreshnessScheduleKind::Interval,
        }
    }

    /// The literal discriminator supplied at construction.
    pub fn id(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The rule's optional description, regardless of variant.
    pub fn description(&self) -> Option<&str> {
        match self {
            FreshnessAssertion::Cron(c) => c.description.as_deref(),
            FreshnessAssertion::Interval(i) => i.description.as_deref(),
        }
    }

    /// Try to extract as a `CronFreshnessAssertion` reference.
    pub fn as_cron(&self) -> Option<&CronFreshnessAssertion> {
        match self {
            FreshnessAssertion::Cron(c) => Some(c),
            _ => None,
        }
    }

    /// Try to extract as a `FixedIntervalFreshnessAssertion` reference.
    pub fn as_interval(&self) -> Option<&FixedIntervalFreshnessAssertion> {
        match self {
            FreshnessAssertion::Interval(i) => Some(i),
            _ => None,
        }
    }
}
