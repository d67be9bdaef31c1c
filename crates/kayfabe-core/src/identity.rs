//! # Roster Identity Newtypes
//!
//! Newtype wrappers for every identifier in the roster domain.
//! These prevent accidental identifier confusion — you cannot pass
//! a `WrestlerId` where a `TagTeamId` is expected.
//!
//! The polymorphic [`EntityRef`] carries a typed id per roster variant
//! and is the unit of addressing for transition requests, mutations,
//! and domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a wrestler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WrestlerId(pub Uuid);

/// Unique identifier for a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ManagerId(pub Uuid);

/// Unique identifier for a referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RefereeId(pub Uuid);

/// Unique identifier for a tag team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TagTeamId(pub Uuid);

/// Unique identifier for a stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StableId(pub Uuid);

/// Unique identifier for a championship title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TitleId(pub Uuid);

impl WrestlerId {
    /// Generate a new random wrestler identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ManagerId {
    /// Generate a new random manager identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl RefereeId {
    /// Generate a new random referee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TagTeamId {
    /// Generate a new random tag team identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl StableId {
    /// Generate a new random stable identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TitleId {
    /// Generate a new random title identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WrestlerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ManagerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RefereeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TagTeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for StableId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TitleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WrestlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wrestler:{}", self.0)
    }
}

impl std::fmt::Display for ManagerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "manager:{}", self.0)
    }
}

impl std::fmt::Display for RefereeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "referee:{}", self.0)
    }
}

impl std::fmt::Display for TagTeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tag-team:{}", self.0)
    }
}

impl std::fmt::Display for StableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stable:{}", self.0)
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "title:{}", self.0)
    }
}

// ─── Entity Type ─────────────────────────────────────────────────────

/// The six roster entity variants.
///
/// One enum, exhaustive `match` everywhere. Adding a variant forces
/// every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// An individual wrestler.
    Wrestler,
    /// A manager accompanying wrestlers or tag teams.
    Manager,
    /// A match official.
    Referee,
    /// A two-wrestler tag team.
    TagTeam,
    /// A faction of wrestlers, tag teams, and managers.
    Stable,
    /// A championship title.
    Title,
}

impl EntityType {
    /// The CamelCase name used as the prefix of domain event names
    /// (e.g. `TagTeamRetired`).
    pub fn event_prefix(&self) -> &'static str {
        match self {
            Self::Wrestler => "Wrestler",
            Self::Manager => "Manager",
            Self::Referee => "Referee",
            Self::TagTeam => "TagTeam",
            Self::Stable => "Stable",
            Self::Title => "Title",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Wrestler => "WRESTLER",
            Self::Manager => "MANAGER",
            Self::Referee => "REFEREE",
            Self::TagTeam => "TAG_TEAM",
            Self::Stable => "STABLE",
            Self::Title => "TITLE",
        };
        f.write_str(s)
    }
}

// ─── Entity Reference ────────────────────────────────────────────────

/// A typed reference to any roster entity.
///
/// The variant fixes the entity type and the payload is the typed id,
/// so a reference can never point at the wrong table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    /// Reference to a wrestler.
    Wrestler(WrestlerId),
    /// Reference to a manager.
    Manager(ManagerId),
    /// Reference to a referee.
    Referee(RefereeId),
    /// Reference to a tag team.
    TagTeam(TagTeamId),
    /// Reference to a stable.
    Stable(StableId),
    /// Reference to a title.
    Title(TitleId),
}

impl EntityRef {
    /// The entity type this reference points at.
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Wrestler(_) => EntityType::Wrestler,
            Self::Manager(_) => EntityType::Manager,
            Self::Referee(_) => EntityType::Referee,
            Self::TagTeam(_) => EntityType::TagTeam,
            Self::Stable(_) => EntityType::Stable,
            Self::Title(_) => EntityType::Title,
        }
    }

    /// The inner UUID, untyped.
    pub fn as_uuid(&self) -> &Uuid {
        match self {
            Self::Wrestler(id) => id.as_uuid(),
            Self::Manager(id) => id.as_uuid(),
            Self::Referee(id) => id.as_uuid(),
            Self::TagTeam(id) => id.as_uuid(),
            Self::Stable(id) => id.as_uuid(),
            Self::Title(id) => id.as_uuid(),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrestler(id) => id.fmt(f),
            Self::Manager(id) => id.fmt(f),
            Self::Referee(id) => id.fmt(f),
            Self::TagTeam(id) => id.fmt(f),
            Self::Stable(id) => id.fmt(f),
            Self::Title(id) => id.fmt(f),
        }
    }
}

impl From<WrestlerId> for EntityRef {
    fn from(id: WrestlerId) -> Self {
        Self::Wrestler(id)
    }
}

impl From<ManagerId> for EntityRef {
    fn from(id: ManagerId) -> Self {
        Self::Manager(id)
    }
}

impl From<RefereeId> for EntityRef {
    fn from(id: RefereeId) -> Self {
        Self::Referee(id)
    }
}

impl From<TagTeamId> for EntityRef {
    fn from(id: TagTeamId) -> Self {
        Self::TagTeam(id)
    }
}

impl From<StableId> for EntityRef {
    fn from(id: StableId) -> Self {
        Self::Stable(id)
    }
}

impl From<TitleId> for EntityRef {
    fn from(id: TitleId) -> Self {
        Self::Title(id)
    }
}
