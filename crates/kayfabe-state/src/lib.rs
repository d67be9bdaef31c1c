//! # kayfabe-state — Pure Roster State
//!
//! The temporal bookkeeping layer of the Kayfabe engine. Everything in
//! this crate is pure state: periods, per-entity condition aggregates,
//! derived statuses, and membership stints. There is no cascade logic,
//! no persistence, and no clock — higher layers decide *when* things
//! happen; this crate decides *whether* the bookkeeping is legal and
//! *what* the resulting status is.
//!
//! ## Modules
//!
//! - **Period** (`period.rs`): bounded-or-open intervals per
//!   (entity, dimension), append-only with non-overlap and
//!   at-most-one-open invariants.
//!
//! - **Condition** (`condition.rs`): the per-entity aggregate of period
//!   histories across its supported dimensions.
//!
//! - **Status** (`status.rs`): pure derivation of the composite status
//!   (precedence Retirement > Suspension > Injury > employment-state).
//!   Statuses are computed, never stored.
//!
//! - **Membership** (`membership.rs`): tag-team, stable, and management
//!   stints with the same non-overlap invariant, plus the structural
//!   constants (tag team size, stable minimum weight).
//!
//! - **Roster** (`roster.rs`): the six entity structs with soft-delete
//!   markers.

pub mod condition;
pub mod membership;
pub mod period;
pub mod roster;
pub mod status;

// ─── Period re-exports ──────────────────────────────────────────────

pub use period::{Period, PeriodError, PeriodHistory};

// ─── Condition / status re-exports ──────────────────────────────────

pub use condition::Condition;
pub use status::{roster_status, title_status, RosterStatus, TitleStatus};

// ─── Membership re-exports ──────────────────────────────────────────

pub use membership::{
    stable_weight, Client, Management, MembershipError, StableMember, StableMembership, Stint,
    TagTeamMembership, STABLE_MIN_WEIGHT, TAG_TEAM_SIZE,
};

// ─── Roster re-exports ──────────────────────────────────────────────

pub use roster::{Manager, Referee, Stable, TagTeam, Title, Wrestler};
