//! # `kayfabe status`
//!
//! Reports the derived status of every entity in a roster file at the
//! current instant, plus tag-team bookability and stable composition.

use std::path::PathBuf;

use clap::Args;

use kayfabe_booking::{stable_composition, tag_team_bookability};
use kayfabe_core::Timestamp;

use crate::roster_file;

/// Arguments for `kayfabe status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Roster file to report on (.json, .yaml, .yml).
    pub file: PathBuf,
}

/// Print the derived statuses.
pub fn run(args: &StatusArgs) -> anyhow::Result<()> {
    let roster = roster_file::load(&args.file)?;
    let now = Timestamp::now();

    for wrestler in roster.wrestlers() {
        let deleted = if wrestler.is_deleted() { " (deleted)" } else { "" };
        println!("wrestler  {:<24} {}{}", wrestler.name, wrestler.status_at(now), deleted);
    }
    for manager in roster.managers() {
        let deleted = if manager.is_deleted() { " (deleted)" } else { "" };
        println!("manager   {:<24} {}{}", manager.name, manager.status_at(now), deleted);
    }
    for referee in roster.referees() {
        let deleted = if referee.is_deleted() { " (deleted)" } else { "" };
        println!("referee   {:<24} {}{}", referee.name, referee.status_at(now), deleted);
    }
    for team in roster.tag_teams() {
        let bookability = tag_team_bookability(&roster, team.id, now)?;
        println!(
            "tag team  {:<24} {} [{bookability}]",
            team.name,
            team.status_at(now)
        );
    }
    for stable in roster.stables() {
        let composition = stable_composition(&roster, stable.id)?;
        let flag = if composition.below_minimum {
            " [below minimum]"
        } else {
            ""
        };
        println!(
            "stable    {:<24} {} weight={}{flag}",
            stable.name,
            stable.status_at(now),
            composition.weight
        );
    }
    for title in roster.titles() {
        println!("title     {:<24} {}", title.name, title.status_at(now));
    }
    Ok(())
}
