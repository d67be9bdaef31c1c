//! # Read-Time Derivations
//!
//! Projections computed from current state at query time, never stored
//! and never written back: a tag team's bookability and a stable's
//! composition. Membership changes do not trigger writes for these —
//! a team that drops to one active wrestler is *derived* as seeking a
//! partner, and a stable below the minimum weight is *flagged*, not
//! automatically disbanded.

use serde::{Deserialize, Serialize};

use kayfabe_core::{EntityRef, StableId, TagTeamId, Timestamp};
use kayfabe_state::{roster_status, stable_weight, RosterStatus, STABLE_MIN_WEIGHT};

use crate::error::TransitionError;
use crate::memory::InMemoryRoster;
use crate::repository::RosterRepository;

/// Derived bookability of a tag team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bookability {
    /// No active wrestlers remain.
    Dissolved,
    /// One active wrestler; not bookable until a partner is found.
    SeekingPartner,
    /// Two or more active wrestlers.
    Bookable,
}

impl std::fmt::Display for Bookability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Dissolved => "DISSOLVED",
            Self::SeekingPartner => "SEEKING_PARTNER",
            Self::Bookable => "BOOKABLE",
        };
        f.write_str(s)
    }
}

/// Derived composition of a stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableComposition {
    /// Weighted member count (tag team = 2, wrestler or manager = 1).
    pub weight: u32,
    /// Whether the weight is under the formation minimum.
    pub below_minimum: bool,
}

/// Derive a tag team's bookability at `at`.
///
/// An active wrestler is a current member that is not deleted and whose
/// derived status is Employed.
pub fn tag_team_bookability(
    roster: &InMemoryRoster,
    tag_team: TagTeamId,
    at: Timestamp,
) -> Result<Bookability, TransitionError> {
    // Resolve the team first so an unknown id is an error, not Dissolved.
    roster.view(&tag_team.into())?;
    let active = roster
        .current_wrestlers_of(tag_team)
        .into_iter()
        .filter(|id| roster.wrestler_is_active(*id, at))
        .count();
    Ok(match active {
        0 => Bookability::Dissolved,
        1 => Bookability::SeekingPartner,
        _ => Bookability::Bookable,
    })
}

/// Derive a stable's weighted composition at query time.
pub fn stable_composition(
    roster: &InMemoryRoster,
    stable: StableId,
) -> Result<StableComposition, TransitionError> {
    roster.view(&stable.into())?;
    let members = roster.current_stable_members(stable);
    let weight = stable_weight(members.iter());
    Ok(StableComposition {
        weight,
        below_minimum: weight < STABLE_MIN_WEIGHT,
    })
}

/// Derive a roster member's status through the repository, for adapters
/// that only hold an [`crate::repository::RosterRepository`].
pub fn roster_member_status<R>(
    repo: &R,
    target: &EntityRef,
    at: Timestamp,
) -> Result<RosterStatus, TransitionError>
where
    R: RosterRepository + ?Sized,
{
    let view = repo.view(target)?;
    Ok(roster_status(&view.condition, at))
}
