//! # kayfabe-booking — the Transition Engine
//!
//! The booking office of the Kayfabe roster engine: given an entity, a
//! requested transition, and an effective date, validate the guards,
//! compute the ordered mutation cascade, and apply it atomically
//! through a repository.
//!
//! ## Shape of a transition
//!
//! ```text
//! TransitionRequest ──▶ guards ──▶ pre-steps ──▶ primary ──▶ cascades
//!                         │                                      │
//!                      Refused                            TransitionPlan
//!                    (no mutation)                               │
//!                                                     repo.apply_all (atomic)
//!                                                                │
//!                                                       TransitionEvents
//!                                                        (post-commit)
//! ```
//!
//! ## Modules
//!
//! - **Request** (`request.rs`): the twelve transition kinds and the
//!   request shape every adapter translates into.
//! - **Guards** (`guards.rs`): ordered precondition checks, one
//!   specific [`Refusal`] kind per failure.
//! - **Executor** (`executor.rs`): the [`Booker`] — plan, then apply.
//! - **Cascades** (`cascade.rs`): per-(entity type, kind) secondary
//!   mutations, idempotent where the rules say so.
//! - **Repository** (`repository.rs`): the persistence port; `apply_all`
//!   is the transaction boundary.
//! - **Memory** (`memory.rs`): the in-memory store used by the CLI, the
//!   API default state, and the tests.
//! - **Clock / events** (`clock.rs`, `events.rs`): injected time source
//!   and post-commit domain events.
//! - **Queries** (`queries.rs`): read-time derivations (bookability,
//!   stable composition).

pub mod cascade;
pub mod clock;
pub mod error;
pub mod events;
pub mod executor;
pub mod guards;
pub mod memory;
pub mod plan;
pub mod queries;
pub mod repository;
pub mod request;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Refusal, TransitionError};
pub use events::{BufferSink, EventSink, NullSink, TransitionEvent};
pub use executor::Booker;
pub use plan::{Mutation, TransitionPlan};
pub use repository::{EntityView, RosterRepository};
pub use request::{TransitionKind, TransitionRequest};

// ─── Store re-exports ───────────────────────────────────────────────

pub use memory::InMemoryRoster;
pub use queries::{stable_composition, tag_team_bookability, Bookability, StableComposition};
