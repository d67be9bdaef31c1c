//! # Transition Plans
//!
//! The booker separates *deciding* from *doing*: planning computes the
//! full ordered list of [`Mutation`]s a transition entails — pre-steps,
//! the primary mutation, cascades — against a read-only snapshot, and
//! only then hands the list to the repository to apply atomically.
//! A plan that fails validation is discarded before anything is written.

use serde::{Deserialize, Serialize};

use kayfabe_core::{Dimension, EntityRef, ManagerId, StableId, TagTeamId, Timestamp, WrestlerId};
use kayfabe_state::{Client, StableMember};

use crate::events::TransitionEvent;

/// One write against the repository.
///
/// Mutations are deliberately small and dumb; every decision about
/// whether they are legal *in sequence* was made at planning time, and
/// the period/stint bookkeeping still re-checks its own invariants at
/// apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Open a period for (entity, dimension) at the stamped time.
    OpenPeriod {
        /// The entity whose condition is mutated.
        target: EntityRef,
        /// The dimension to open.
        dimension: Dimension,
        /// Period start.
        at: Timestamp,
    },
    /// Close the open period for (entity, dimension) at the stamped time.
    ClosePeriod {
        /// The entity whose condition is mutated.
        target: EntityRef,
        /// The dimension to close.
        dimension: Dimension,
        /// Period end.
        at: Timestamp,
    },
    /// Move the open period's start for (entity, dimension).
    ReschedulePeriod {
        /// The entity whose condition is mutated.
        target: EntityRef,
        /// The dimension to reschedule.
        dimension: Dimension,
        /// The revised start.
        at: Timestamp,
    },
    /// End a wrestler's current stint on a tag team.
    EndTagTeamMembership {
        /// The member.
        wrestler: WrestlerId,
        /// The team.
        tag_team: TagTeamId,
        /// Stint end.
        at: Timestamp,
    },
    /// End a member's current stint in a stable.
    EndStableMembership {
        /// The member.
        member: StableMember,
        /// The stable.
        stable: StableId,
        /// Stint end.
        at: Timestamp,
    },
    /// End a manager's current engagement with a client.
    EndManagement {
        /// The managed wrestler or tag team.
        client: Client,
        /// The manager.
        manager: ManagerId,
        /// Stint end.
        at: Timestamp,
    },
    /// Set the entity's soft-delete marker.
    SoftDelete {
        /// The entity to mark.
        target: EntityRef,
        /// Deletion time.
        at: Timestamp,
    },
    /// Clear the entity's soft-delete marker.
    Restore {
        /// The entity to restore.
        target: EntityRef,
    },
}

/// The ordered outcome of planning one transition request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionPlan {
    /// Mutations to apply, in order: pre-steps, primary, cascades.
    pub mutations: Vec<Mutation>,
    /// Events to publish after the plan commits.
    pub events: Vec<TransitionEvent>,
}

impl TransitionPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mutation.
    pub fn push(&mut self, mutation: Mutation) {
        self.mutations.push(mutation);
    }

    /// Append another plan's mutations and events, preserving order.
    pub fn absorb(&mut self, other: TransitionPlan) {
        self.mutations.extend(other.mutations);
        self.events.extend(other.events);
    }
}
