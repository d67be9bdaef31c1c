//! # Membership Stints
//!
//! Tag-team, stable, and management relationships are period-like joins:
//! a [`Stint`] records when a member belonged to a group, with the same
//! non-overlap invariant periods have — per (member, group) pair, stints
//! never overlap and at most one is current.
//!
//! Membership history is never deleted. When a member or group changes
//! status, the transition executor *closes* the current stints; the
//! record of who was where stays intact.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kayfabe_core::{ManagerId, StableId, TagTeamId, Timestamp, WrestlerId};

/// Exact number of wrestlers a tag team is formed with.
pub const TAG_TEAM_SIZE: usize = 2;

/// Minimum weighted member count a stable is formed with.
///
/// A tag team weighs 2, a wrestler or manager weighs 1.
pub const STABLE_MIN_WEIGHT: u32 = 3;

/// A bounded-or-open membership interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stint {
    /// When the member joined.
    pub joined_at: Timestamp,
    /// When the member left, or `None` while current.
    pub left_at: Option<Timestamp>,
}

impl Stint {
    /// Begin a stint at `at`.
    pub fn begin(at: Timestamp) -> Self {
        Self {
            joined_at: at,
            left_at: None,
        }
    }

    /// Whether the stint is still current.
    pub fn is_current(&self) -> bool {
        self.left_at.is_none()
    }

    /// Whether the stint is in effect at `at` (half-open interval).
    pub fn contains(&self, at: Timestamp) -> bool {
        self.joined_at <= at && self.left_at.map_or(true, |end| at < end)
    }

    /// End the stint at `at`.
    pub fn end(&mut self, at: Timestamp) -> Result<(), MembershipError> {
        if at < self.joined_at {
            return Err(MembershipError::EndsBeforeStart {
                start: self.joined_at,
                end: at,
            });
        }
        self.left_at = Some(at);
        Ok(())
    }
}

/// Errors raised by membership bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// The member already has a current membership that conflicts.
    #[error("{member} already has a current {group}")]
    Conflict {
        /// The conflicted member.
        member: String,
        /// What kind of group the conflict is about ("tag team", "stable", ...).
        group: &'static str,
    },

    /// A structural minimum or exact size would be violated.
    #[error("a {group} requires {required} members, got {actual}")]
    NotEnoughMembers {
        /// The group kind.
        group: &'static str,
        /// Required (weighted) member count.
        required: u32,
        /// Actual (weighted) member count.
        actual: u32,
    },

    /// The group already has its full complement of members.
    #[error("{group} already has its full complement of {size} members")]
    RosterFull {
        /// The group.
        group: String,
        /// The structural maximum.
        size: usize,
    },

    /// The member has no current stint in the group.
    #[error("{member} is not a current member of {group}")]
    NotCurrentMember {
        /// The member.
        member: String,
        /// The group.
        group: String,
    },

    /// A stint cannot end before it began.
    #[error("stint cannot end at {end}: precedes start {start}")]
    EndsBeforeStart {
        /// The stint's start.
        start: Timestamp,
        /// The rejected end.
        end: Timestamp,
    },
}

// ─── Member References ───────────────────────────────────────────────

/// Anything that can belong to a stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StableMember {
    /// An individual wrestler.
    Wrestler(WrestlerId),
    /// A whole tag team.
    TagTeam(TagTeamId),
    /// A manager aligned with the stable.
    Manager(ManagerId),
}

impl StableMember {
    /// Weighted contribution toward [`STABLE_MIN_WEIGHT`].
    pub fn weight(&self) -> u32 {
        match self {
            Self::TagTeam(_) => 2,
            Self::Wrestler(_) | Self::Manager(_) => 1,
        }
    }
}

impl std::fmt::Display for StableMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrestler(id) => id.fmt(f),
            Self::TagTeam(id) => id.fmt(f),
            Self::Manager(id) => id.fmt(f),
        }
    }
}

/// Anything a manager can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Client {
    /// An individual wrestler.
    Wrestler(WrestlerId),
    /// A whole tag team.
    TagTeam(TagTeamId),
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrestler(id) => id.fmt(f),
            Self::TagTeam(id) => id.fmt(f),
        }
    }
}

// ─── Join Records ────────────────────────────────────────────────────

/// One wrestler's stint on one tag team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTeamMembership {
    /// The wrestler.
    pub wrestler: WrestlerId,
    /// The tag team.
    pub tag_team: TagTeamId,
    /// The interval of membership.
    pub stint: Stint,
}

/// One member's stint in one stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableMembership {
    /// The member (wrestler, tag team, or manager).
    pub member: StableMember,
    /// The stable.
    pub stable: StableId,
    /// The interval of membership.
    pub stint: Stint,
}

/// One manager's engagement with one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Management {
    /// The managed wrestler or tag team.
    pub client: Client,
    /// The manager.
    pub manager: ManagerId,
    /// The interval of the engagement.
    pub stint: Stint,
}

/// Sum the weighted size of a stable member set.
pub fn stable_weight<'a>(members: impl IntoIterator<Item = &'a StableMember>) -> u32 {
    members.into_iter().map(StableMember::weight).sum()
}
