//! # kayfabe-cli — Roster Command-Line Interface
//!
//! A structured clap-based CLI over the booking engine, operating on
//! roster files (JSON or YAML serializations of the in-memory store).
//!
//! ## Subcommands
//!
//! - `validate` — re-check every stored invariant of a roster file
//! - `transition` — apply a transition to a named entity and save
//! - `status` — report derived statuses, bookability, and composition
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the engine crates — no guard or
//!   cascade logic here.

pub mod roster_file;
pub mod status;
pub mod transition;
pub mod validate;
