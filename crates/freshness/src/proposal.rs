//! Conversion of parsed rules into catalog change proposals.
//!
//! Pure construction: the caller hands the proposals to whatever transport
//! it uses to reach the catalog.

use cadence_catalog::{
    Aspect, AssertionInfo, AssertionType, CalendarInterval, FixedIntervalSchedule,
    FreshnessAssertionInfo, FreshnessAssertionSchedule, FreshnessAssertionType,
    FreshnessCronSchedule, MetadataChangeProposal,
};
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::schema::FreshnessAssertion;

impl FreshnessAssertion {
    /// Map the active variant onto a catalog schedule record.
    ///
    /// Cron rules pass the expression and timezone through verbatim.
    /// Interval rules emit whole seconds; fractional seconds are truncated,
    /// never rounded, so existing consumers see stable values.
    pub fn generate_schedule(&self) -> FreshnessAssertionSchedule {
        match self {
            FreshnessAssertion::Cron(c) => {
                FreshnessAssertionSchedule::cron(FreshnessCronSchedule {
                    cron: c.cron.clone(),
                    timezone: c.timezone.clone(),
                })
            }
            FreshnessAssertion::Interval(i) => {
                FreshnessAssertionSchedule::fixed_interval(FixedIntervalSchedule {
                    unit: CalendarInterval::Second,
                    multiple: i.interval.as_secs(),
                })
            }
        }
    }

    /// Build the change proposals declaring this rule in the catalog.
    ///
    /// `assertion_urn` addresses the assertion entity the aspect lands on;
    /// `entity_urn` is the dataset the assertion watches. Both must be
    /// non-empty. Returns a single proposal today; the sequence form leaves
    /// room for rules that expand into several aspects.
    pub fn generate_mcp(
        &self,
        assertion_urn: &str,
        entity_urn: &str,
    ) -> Result<Vec<MetadataChangeProposal>> {
        let assertion_urn = required_urn(assertion_urn, "assertionUrn")?;
        let entity_urn = required_urn(entity_urn, "entityUrn")?;

        let aspect = AssertionInfo {
            assertion_type: AssertionType::Freshness,
            freshness_assertion: Some(FreshnessAssertionInfo {
                freshness_type: FreshnessAssertionType::DatasetChange,
                entity: entity_urn.to_string(),
                schedule: self.generate_schedule(),
            }),
            description: self.description().map(String::from),
        };

        debug!(
            kind = %self.kind(),
            assertion_urn = %assertion_urn,
            entity_urn = %entity_urn,
            "generated freshness assertion proposal"
        );
        Ok(vec![MetadataChangeProposal::upsert(
            assertion_urn,
            Aspect::AssertionInfo(aspect),
        )])
    }
}

fn required_urn<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "URN must be non-empty"));
    }
    Ok(value)
}
