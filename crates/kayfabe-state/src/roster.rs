//! # Roster Entities
//!
//! The six entity variants the promotion manages. Each owns its
//! [`Condition`] (the period bookkeeping across its dimensions) and a
//! soft-delete marker. Deletion is orthogonal to status: a deleted
//! entity keeps its full period history and can be restored.
//!
//! Cascade targets (a wrestler's managers, a team's wrestlers) are
//! referenced by id, never owned — the membership joins live in the
//! repository, and a cascade mutates the referenced entity's own
//! condition, not the triggering entity's.

use serde::{Deserialize, Serialize};

use kayfabe_core::{
    EntityType, ManagerId, RefereeId, StableId, TagTeamId, Timestamp, TitleId, WrestlerId,
};

use crate::condition::Condition;
use crate::status::{roster_status, title_status, RosterStatus, TitleStatus};

/// An individual wrestler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrestler {
    /// Unique identifier.
    pub id: WrestlerId,
    /// Ring name.
    pub name: String,
    /// Billed hometown, if announced.
    pub hometown: Option<String>,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across employment, injury, suspension, retirement.
    pub condition: Condition,
}

impl Wrestler {
    /// Create an unemployed wrestler.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WrestlerId::new(),
            name: name.into(),
            hometown: None,
            deleted_at: None,
            condition: Condition::for_entity(EntityType::Wrestler),
        }
    }

    /// Whether the wrestler is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> RosterStatus {
        roster_status(&self.condition, at)
    }
}

/// A manager accompanying wrestlers or tag teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    /// Unique identifier.
    pub id: ManagerId,
    /// Ring name.
    pub name: String,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across employment, injury, suspension, retirement.
    pub condition: Condition,
}

impl Manager {
    /// Create an unemployed manager.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ManagerId::new(),
            name: name.into(),
            deleted_at: None,
            condition: Condition::for_entity(EntityType::Manager),
        }
    }

    /// Whether the manager is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> RosterStatus {
        roster_status(&self.condition, at)
    }
}

/// A match official.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referee {
    /// Unique identifier.
    pub id: RefereeId,
    /// Name.
    pub name: String,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across employment, injury, suspension, retirement.
    pub condition: Condition,
}

impl Referee {
    /// Create an unemployed referee.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RefereeId::new(),
            name: name.into(),
            deleted_at: None,
            condition: Condition::for_entity(EntityType::Referee),
        }
    }

    /// Whether the referee is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> RosterStatus {
        roster_status(&self.condition, at)
    }
}

/// A two-wrestler tag team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTeam {
    /// Unique identifier.
    pub id: TagTeamId,
    /// Team name.
    pub name: String,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across employment, suspension, retirement.
    pub condition: Condition,
}

impl TagTeam {
    /// Create an unemployed tag team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TagTeamId::new(),
            name: name.into(),
            deleted_at: None,
            condition: Condition::for_entity(EntityType::TagTeam),
        }
    }

    /// Whether the team is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> RosterStatus {
        roster_status(&self.condition, at)
    }
}

/// A faction of wrestlers, tag teams, and managers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stable {
    /// Unique identifier.
    pub id: StableId,
    /// Faction name.
    pub name: String,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across employment, suspension, retirement.
    pub condition: Condition,
}

impl Stable {
    /// Create an unemployed stable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StableId::new(),
            name: name.into(),
            deleted_at: None,
            condition: Condition::for_entity(EntityType::Stable),
        }
    }

    /// Whether the stable is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> RosterStatus {
        roster_status(&self.condition, at)
    }
}

/// A championship title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Unique identifier.
    pub id: TitleId,
    /// Title name.
    pub name: String,
    /// Soft-delete marker.
    pub deleted_at: Option<Timestamp>,
    /// Period bookkeeping across activity and retirement.
    pub condition: Condition,
}

impl Title {
    /// Create an undebuted title.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TitleId::new(),
            name: name.into(),
            deleted_at: None,
            condition: Condition::for_entity(EntityType::Title),
        }
    }

    /// Whether the title is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Derived status at `at`.
    pub fn status_at(&self, at: Timestamp) -> TitleStatus {
        title_status(&self.condition, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kayfabe_core::Dimension;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    #[test]
    fn test_new_wrestler_is_unemployed() {
        let wrestler = Wrestler::new("Rico Carter");
        assert_eq!(wrestler.status_at(ts(100)), RosterStatus::Unemployed);
        assert!(!wrestler.is_deleted());
    }

    #[test]
    fn test_new_title_is_undebuted() {
        let title = Title::new("World Heavyweight Title");
        assert_eq!(title.status_at(ts(100)), TitleStatus::Undebuted);
    }

    #[test]
    fn test_deleted_entity_keeps_history() {
        let mut wrestler = Wrestler::new("Rico Carter");
        wrestler
            .condition
            .open(Dimension::Employment, ts(100))
            .unwrap();
        wrestler.condition.close(Dimension::Employment, ts(200)).unwrap();
        wrestler.deleted_at = Some(ts(200));
        assert!(wrestler.is_deleted());
        assert_eq!(wrestler.condition.history(Dimension::Employment).unwrap().len(), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let wrestler = Wrestler::new("Rico Carter");
        let json = serde_json::to_string(&wrestler).unwrap();
        let parsed: Wrestler = serde_json::from_str(&json).unwrap();
        assert_eq!(wrestler, parsed);
    }
}
