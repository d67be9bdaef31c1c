//! # `kayfabe validate`
//!
//! Re-checks every stored invariant of a roster file: period
//! non-overlap, at most one open period per dimension, suspension and
//! injury mutual exclusion, and single current memberships.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use crate::roster_file;

/// Arguments for `kayfabe validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Roster file to check (.json, .yaml, .yml).
    pub file: PathBuf,
}

/// Run the validation and report violations.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let roster = roster_file::load(&args.file)?;
    let violations = roster.check_invariants();
    if violations.is_empty() {
        println!("{}: ok", args.file.display());
        return Ok(());
    }
    for violation in &violations {
        println!("violation: {violation}");
    }
    bail!("{} invariant violation(s)", violations.len());
}
