//! Change-proposal wrapper.
//!
//! A proposal addresses one aspect of one entity, identified by URN. The
//! aspect payload is a closed enum so the wrapper stays self-describing
//! without open-ended dynamic dispatch.

use serde::{Deserialize, Serialize};

use crate::assertion::AssertionInfo;

/// How the catalog should apply the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Upsert,
    Create,
    Update,
    Delete,
}

/// Aspect payloads a proposal can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Aspect {
    AssertionInfo(AssertionInfo),
}

impl Aspect {
    /// The catalog aspect name for this payload.
    pub fn name(&self) -> &'static str {
        match self {
            Aspect::AssertionInfo(_) => "assertionInfo",
        }
    }
}

/// A unit of metadata change submitted to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataChangeProposal {
    /// URN of the entity the proposal addresses.
    pub entity_urn: String,
    pub change_type: ChangeType,
    pub aspect_name: String,
    pub aspect: Aspect,
}

impl MetadataChangeProposal {
    /// Build an `UPSERT` proposal; the aspect name is derived from the payload.
    pub fn upsert(entity_urn: impl Into<String>, aspect: Aspect) -> Self {
        Self {
            entity_urn: entity_urn.into(),
            change_type: ChangeType::Upsert,
            aspect_name: aspect.name().to_string(),
            aspect,
        }
    }
}
