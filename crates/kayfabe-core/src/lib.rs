//! # kayfabe-core — Foundational Types for the Roster Engine
//!
//! This crate is the bedrock of the Kayfabe workspace. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `WrestlerId`,
//!    `ManagerId`, `TagTeamId`, `TitleId` — all newtypes over UUIDs.
//!    No bare strings or untyped ids for roster entities.
//!
//! 2. **Single `Dimension` enum.** One definition of the five status
//!    axes, exhaustive `match` everywhere, with the per-entity-type
//!    supported subsets defined next to it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision; every period boundary and effective date in the
//!    system is one of these.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kayfabe-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod dimension;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use dimension::{Dimension, DIMENSION_COUNT};
pub use error::KayfabeError;
pub use identity::{
    EntityRef, EntityType, ManagerId, RefereeId, StableId, TagTeamId, TitleId, WrestlerId,
};
pub use temporal::Timestamp;
