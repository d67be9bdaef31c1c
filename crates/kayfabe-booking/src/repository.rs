//! # Roster Repository
//!
//! The persistence port the booker drives. The engine reads entity
//! snapshots and current membership links through it, then applies a
//! computed [`Mutation`](crate::plan::Mutation) list.
//!
//! `apply_all` carries the transaction contract: either every mutation
//! in the slice lands, or none do. A database-backed implementation
//! wraps the loop in its own transaction; the in-memory store in
//! [`crate::memory`] snapshots and restores. Concurrent transitions on
//! the same entity must be serialized by the implementation (row locks
//! or equivalent) for the duration of one `handle()` call.

use kayfabe_core::{EntityRef, ManagerId, StableId, TagTeamId, WrestlerId};
use kayfabe_state::{Client, Condition, StableMember};

use crate::error::TransitionError;
use crate::plan::Mutation;

/// A read-only snapshot of one entity, enough for guards and planning.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    /// The entity.
    pub entity: EntityRef,
    /// The entity's name, carried into refusals and events.
    pub name: String,
    /// Whether the entity is soft-deleted.
    pub deleted: bool,
    /// The entity's period bookkeeping.
    pub condition: Condition,
}

/// Storage port for the booking office.
pub trait RosterRepository {
    /// Snapshot one entity.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotFound`] if the entity does not exist.
    fn view(&self, target: &EntityRef) -> Result<EntityView, TransitionError>;

    /// The tag team a wrestler is currently on, if any.
    fn current_tag_team_of(&self, wrestler: WrestlerId) -> Option<TagTeamId>;

    /// The wrestlers currently on a tag team.
    fn current_wrestlers_of(&self, tag_team: TagTeamId) -> Vec<WrestlerId>;

    /// The stable a member currently belongs to, if any.
    fn current_stable_of(&self, member: StableMember) -> Option<StableId>;

    /// The current members of a stable.
    fn current_stable_members(&self, stable: StableId) -> Vec<StableMember>;

    /// The managers currently engaged with a client.
    fn current_managers_of(&self, client: Client) -> Vec<ManagerId>;

    /// The clients a manager is currently engaged with.
    fn current_clients_of(&self, manager: ManagerId) -> Vec<Client>;

    /// Apply a single mutation.
    fn apply(&mut self, mutation: &Mutation) -> Result<(), TransitionError>;

    /// Apply every mutation or none of them.
    fn apply_all(&mut self, mutations: &[Mutation]) -> Result<(), TransitionError>;
}
