//! # `kayfabe transition`
//!
//! Applies one transition to a named entity in a roster file and saves
//! the file back. Prints the domain events the transition produced —
//! cascaded transitions included.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;

use kayfabe_booking::{Booker, SystemClock, TransitionKind, TransitionRequest};
use kayfabe_core::Timestamp;

use crate::roster_file;

/// Arguments for `kayfabe transition`.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Roster file to operate on (.json, .yaml, .yml).
    pub file: PathBuf,

    /// Entity name, e.g. "Rico Carter".
    pub name: String,

    /// Transition to apply: employ, release, suspend, reinstate,
    /// injure, clear_injury, retire, unretire, debut, pull, delete,
    /// restore.
    pub transition: String,

    /// RFC 3339 effective date; defaults to now.
    #[arg(long)]
    pub effective: Option<String>,
}

/// Apply the transition and save the roster.
pub fn run(args: &TransitionArgs) -> anyhow::Result<()> {
    let mut roster = roster_file::load(&args.file)?;

    let Some(target) = roster.find_by_name(&args.name) else {
        bail!("no entity named {:?} in {}", args.name, args.file.display());
    };
    let kind: TransitionKind = args
        .transition
        .parse()
        .with_context(|| format!("parsing transition {:?}", args.transition))?;
    let effective_at = args
        .effective
        .as_deref()
        .map(Timestamp::parse_lenient)
        .transpose()
        .context("parsing --effective")?;

    let booker = Booker::new(SystemClock);
    let request = TransitionRequest {
        target,
        kind,
        effective_at,
    };
    let events = booker.handle(&mut roster, &request)?;

    roster_file::save(&args.file, &roster)?;
    for event in &events {
        println!("{event}");
    }
    tracing::debug!(count = events.len(), "events published");
    Ok(())
}
