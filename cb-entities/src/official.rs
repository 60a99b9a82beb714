use crate::{id::Id, time::Timestamp};

/// The subject of an official-status submission.
///
/// Exactly one organization or one event, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficialTarget {
    Organization(Id),
    Event(Id),
}

impl OfficialTarget {
    /// Builds a target from a pair of optional identifiers, enforcing
    /// the exactly-one invariant.
    pub fn from_optional_ids(org_id: Option<Id>, event_id: Option<Id>) -> Option<Self> {
        match (org_id, event_id) {
            (Some(id), None) => Some(Self::Organization(id)),
            (None, Some(id)) => Some(Self::Event(id)),
            _ => None,
        }
    }

    pub fn org_id(&self) -> Option<&Id> {
        match self {
            Self::Organization(id) => Some(id),
            Self::Event(_) => None,
        }
    }

    pub fn event_id(&self) -> Option<&Id> {
        match self {
            Self::Organization(_) => None,
            Self::Event(id) => Some(id),
        }
    }
}

/// A submission awaiting staff review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub target: OfficialTarget,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingCounts {
    pub org_count: u64,
    pub event_count: u64,
}
