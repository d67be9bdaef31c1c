//! # Transition Errors
//!
//! Every way the booking office can refuse a request. All of these are
//! expected, recoverable domain errors — never crashes. The engine does
//! not log or swallow them; the calling layer maps each kind to a
//! user-facing message.
//!
//! A refusal always identifies the specific guard that failed
//! ([`Refusal`]) plus the entity it failed for, so adapters can render
//! "cannot suspend Rico Carter: is already suspended" without knowing
//! anything about the guard table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kayfabe_core::EntityRef;
use kayfabe_state::{MembershipError, PeriodError};

use crate::request::TransitionKind;

/// The specific guard condition a refused transition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Refusal {
    /// The entity is already employed.
    AlreadyEmployed,
    /// The entity has never been employed.
    Unemployed,
    /// The entity's contract has already ended.
    AlreadyReleased,
    /// The entity's employment has not started yet.
    HasFutureEmployment,
    /// The entity is retired.
    Retired,
    /// The entity is not retired.
    NotRetired,
    /// The entity is already suspended.
    AlreadySuspended,
    /// The entity is suspended.
    Suspended,
    /// The entity is neither suspended nor injured.
    NotSuspended,
    /// The entity is already injured.
    AlreadyInjured,
    /// The entity is injured.
    Injured,
    /// The entity is not injured.
    NotInjured,
    /// The title is already in rotation.
    AlreadyActive,
    /// The title is not in rotation.
    NotActive,
    /// The title has never been introduced.
    Undebuted,
    /// The title's debut has not happened yet.
    HasFutureDebut,
    /// The entity is soft-deleted.
    Deleted,
    /// The entity is not soft-deleted.
    NotDeleted,
    /// The entity type does not support this transition.
    UnsupportedTransition,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AlreadyEmployed => "is already employed",
            Self::Unemployed => "is unemployed",
            Self::AlreadyReleased => "is already released",
            Self::HasFutureEmployment => "has employment that has not started yet",
            Self::Retired => "is retired",
            Self::NotRetired => "is not retired",
            Self::AlreadySuspended => "is already suspended",
            Self::Suspended => "is suspended",
            Self::NotSuspended => "is neither suspended nor injured",
            Self::AlreadyInjured => "is already injured",
            Self::Injured => "is injured",
            Self::NotInjured => "is not injured",
            Self::AlreadyActive => "is already active",
            Self::NotActive => "is not active",
            Self::Undebuted => "has never debuted",
            Self::HasFutureDebut => "has a debut that has not happened yet",
            Self::Deleted => "is deleted",
            Self::NotDeleted => "is not deleted",
            Self::UnsupportedTransition => "does not support this transition",
        };
        f.write_str(s)
    }
}

/// Errors raised while planning or applying a transition.
///
/// A refused or failed transition leaves the roster untouched — the
/// repository applies a plan all-or-nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A guard rejected the transition.
    #[error("cannot {kind} {name}: {refusal}")]
    Refused {
        /// The entity the transition was requested for.
        entity: EntityRef,
        /// The entity's name, for user-facing messages.
        name: String,
        /// The refused transition.
        kind: TransitionKind,
        /// The specific guard that failed.
        refusal: Refusal,
    },

    /// Period bookkeeping rejected a mutation.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// Membership bookkeeping rejected a mutation.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// The referenced entity does not exist in the repository.
    #[error("{0} not found")]
    NotFound(EntityRef),
}

impl TransitionError {
    /// The refusal kind, if this error is a guard refusal.
    pub fn refusal(&self) -> Option<Refusal> {
        match self {
            Self::Refused { refusal, .. } => Some(*refusal),
            _ => None,
        }
    }
}
