//! # Transition Requests
//!
//! The twelve transition kinds the booking office executes, their
//! per-entity-type applicability, and the request shape every adapter
//! (HTTP route, CLI subcommand) translates into.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use kayfabe_core::{EntityRef, EntityType, KayfabeError, Timestamp};

/// A requested status transition.
///
/// One enum, exhaustive `match` everywhere — the guard table, the
/// pre-step table, and the cascade registry all key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Put the entity under contract.
    Employ,
    /// End the entity's contract.
    Release,
    /// Bar the entity from performing.
    Suspend,
    /// End a suspension (or an injury, where injuries are tracked).
    Reinstate,
    /// Record the entity as unable to perform.
    Injure,
    /// End an injury.
    ClearInjury,
    /// Withdraw the entity from performing.
    Retire,
    /// Reverse a retirement.
    Unretire,
    /// Introduce a title into rotation.
    Debut,
    /// Pull a title from rotation.
    Pull,
    /// Soft-delete the entity.
    Delete,
    /// Reverse a soft delete.
    Restore,
}

impl TransitionKind {
    /// All transition kinds, in canonical order.
    pub fn all() -> &'static [TransitionKind] {
        &[
            Self::Employ,
            Self::Release,
            Self::Suspend,
            Self::Reinstate,
            Self::Injure,
            Self::ClearInjury,
            Self::Retire,
            Self::Unretire,
            Self::Debut,
            Self::Pull,
            Self::Delete,
            Self::Restore,
        ]
    }

    /// The canonical snake_case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employ => "employ",
            Self::Release => "release",
            Self::Suspend => "suspend",
            Self::Reinstate => "reinstate",
            Self::Injure => "injure",
            Self::ClearInjury => "clear_injury",
            Self::Retire => "retire",
            Self::Unretire => "unretire",
            Self::Debut => "debut",
            Self::Pull => "pull",
            Self::Delete => "delete",
            Self::Restore => "restore",
        }
    }

    /// The verb used in refusal messages ("cannot heal ...").
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Employ => "employ",
            Self::Release => "release",
            Self::Suspend => "suspend",
            Self::Reinstate => "reinstate",
            Self::Injure => "injure",
            Self::ClearInjury => "heal",
            Self::Retire => "retire",
            Self::Unretire => "unretire",
            Self::Debut => "debut",
            Self::Pull => "pull",
            Self::Delete => "delete",
            Self::Restore => "restore",
        }
    }

    /// The past-tense suffix of the domain event name
    /// (`WrestlerEmployed`, `TitleDebuted`).
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Employ => "Employed",
            Self::Release => "Released",
            Self::Suspend => "Suspended",
            Self::Reinstate => "Reinstated",
            Self::Injure => "Injured",
            Self::ClearInjury => "Healed",
            Self::Retire => "Retired",
            Self::Unretire => "Unretired",
            Self::Debut => "Debuted",
            Self::Pull => "Pulled",
            Self::Delete => "Deleted",
            Self::Restore => "Restored",
        }
    }

    /// Whether this transition exists for the given entity type.
    ///
    /// Injuries are tracked for individuals only; debut/pull exist for
    /// titles only; titles are never employed.
    pub fn applies_to(&self, entity_type: EntityType) -> bool {
        match entity_type {
            EntityType::Wrestler | EntityType::Manager | EntityType::Referee => {
                !matches!(self, Self::Debut | Self::Pull)
            }
            EntityType::TagTeam | EntityType::Stable => !matches!(
                self,
                Self::Debut | Self::Pull | Self::Injure | Self::ClearInjury
            ),
            EntityType::Title => matches!(
                self,
                Self::Debut | Self::Pull | Self::Retire | Self::Unretire | Self::Delete | Self::Restore
            ),
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for TransitionKind {
    type Err = KayfabeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransitionKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| KayfabeError::Serialization(format!("unknown transition: {s:?}")))
    }
}

/// The request shape every outer surface translates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The entity to transition.
    pub target: EntityRef,
    /// The requested transition.
    pub kind: TransitionKind,
    /// Effective date; defaults to the booker's clock when omitted.
    pub effective_at: Option<Timestamp>,
}

impl TransitionRequest {
    /// Request a transition effective now.
    pub fn new(target: impl Into<EntityRef>, kind: TransitionKind) -> Self {
        Self {
            target: target.into(),
            kind,
            effective_at: None,
        }
    }

    /// Set an explicit effective date (backdated and future-dated are
    /// both legal).
    pub fn effective_at(mut self, at: Timestamp) -> Self {
        self.effective_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_have_no_employment_transitions() {
        assert!(!TransitionKind::Employ.applies_to(EntityType::Title));
        assert!(!TransitionKind::Suspend.applies_to(EntityType::Title));
        assert!(TransitionKind::Debut.applies_to(EntityType::Title));
        assert!(TransitionKind::Retire.applies_to(EntityType::Title));
    }

    #[test]
    fn test_groups_cannot_be_injured() {
        assert!(!TransitionKind::Injure.applies_to(EntityType::TagTeam));
        assert!(!TransitionKind::ClearInjury.applies_to(EntityType::Stable));
        assert!(TransitionKind::Injure.applies_to(EntityType::Referee));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for kind in TransitionKind::all() {
            assert_eq!(kind.as_str().parse::<TransitionKind>().unwrap(), *kind);
        }
        assert!("promote".parse::<TransitionKind>().is_err());
    }
}
