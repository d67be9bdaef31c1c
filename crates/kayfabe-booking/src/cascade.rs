//! # Cascade Strategies
//!
//! Secondary mutations triggered by a primary transition, registered
//! per (entity type, transition kind) as a lookup — not inheritance.
//! A strategy reads the repository, appends mutations and events to the
//! plan, and may call back into the planner for related entities, which
//! runs the related entity's own guards and pre-steps.
//!
//! Cascades mutate the *referenced* entity's bookkeeping: employing a
//! wrestler opens the manager's employment period; deleting a wrestler
//! closes the wrestler's stint on the team, not the team's record of
//! other members.
//!
//! Any refusal inside a cascade aborts the entire transition; the only
//! tolerated condition is the idempotent skip (a manager who is already
//! employed is left untouched).

use kayfabe_core::{Dimension, EntityRef, Timestamp};
use kayfabe_state::{Client, StableMember};

use crate::error::TransitionError;
use crate::executor::plan_transition;
use crate::plan::{Mutation, TransitionPlan};
use crate::repository::{EntityView, RosterRepository};
use crate::request::TransitionKind;

/// Append the cascade for (entity type, kind) to the plan, if one is
/// registered.
pub(crate) fn extend_plan<R>(
    repo: &R,
    view: &EntityView,
    kind: TransitionKind,
    effective: Timestamp,
    now: Timestamp,
    plan: &mut TransitionPlan,
) -> Result<(), TransitionError>
where
    R: RosterRepository + ?Sized,
{
    match (view.entity, kind) {
        // Employing a wrestler employs every currently-assigned manager
        // that is not already employed.
        (EntityRef::Wrestler(id), TransitionKind::Employ) => {
            employ_current_managers(repo, Client::Wrestler(id), effective, now, plan)
        }
        (EntityRef::TagTeam(id), TransitionKind::Employ) => {
            employ_current_managers(repo, Client::TagTeam(id), effective, now, plan)
        }

        // Leaving active duty ends the entity's current relationships.
        (
            EntityRef::Wrestler(id),
            TransitionKind::Release | TransitionKind::Retire | TransitionKind::Delete,
        ) => {
            if let Some(team) = repo.current_tag_team_of(id) {
                plan.push(Mutation::EndTagTeamMembership {
                    wrestler: id,
                    tag_team: team,
                    at: effective,
                });
            }
            end_stable_membership(repo, StableMember::Wrestler(id), effective, plan);
            end_managements_of_client(repo, Client::Wrestler(id), effective, plan);
            Ok(())
        }
        (
            EntityRef::Manager(id),
            TransitionKind::Release | TransitionKind::Retire | TransitionKind::Delete,
        ) => {
            end_stable_membership(repo, StableMember::Manager(id), effective, plan);
            for client in repo.current_clients_of(id) {
                plan.push(Mutation::EndManagement {
                    client,
                    manager: id,
                    at: effective,
                });
            }
            Ok(())
        }
        (
            EntityRef::TagTeam(id),
            TransitionKind::Release | TransitionKind::Retire | TransitionKind::Delete,
        ) => {
            for wrestler in repo.current_wrestlers_of(id) {
                plan.push(Mutation::EndTagTeamMembership {
                    wrestler,
                    tag_team: id,
                    at: effective,
                });
            }
            end_stable_membership(repo, StableMember::TagTeam(id), effective, plan);
            end_managements_of_client(repo, Client::TagTeam(id), effective, plan);
            Ok(())
        }
        (
            EntityRef::Stable(id),
            TransitionKind::Release | TransitionKind::Retire | TransitionKind::Delete,
        ) => {
            for member in repo.current_stable_members(id) {
                plan.push(Mutation::EndStableMembership {
                    member,
                    stable: id,
                    at: effective,
                });
            }
            Ok(())
        }

        // Referees hold no memberships; titles never cascade; restores
        // never re-establish relationships.
        _ => Ok(()),
    }
}

/// Employ every currently-assigned manager of `client` that is not
/// already employed. Managers already in employment are skipped, never
/// re-opened — re-running the cascade is a no-op for them.
fn employ_current_managers<R>(
    repo: &R,
    client: Client,
    effective: Timestamp,
    now: Timestamp,
    plan: &mut TransitionPlan,
) -> Result<(), TransitionError>
where
    R: RosterRepository + ?Sized,
{
    for manager in repo.current_managers_of(client) {
        let manager_view = repo.view(&manager.into())?;
        if manager_view.condition.is_open_at(Dimension::Employment, now) {
            continue;
        }
        let sub_plan = plan_transition(&manager_view, TransitionKind::Employ, effective, now)?;
        plan.absorb(sub_plan);
    }
    Ok(())
}

/// End the member's current stable stint, if any.
fn end_stable_membership<R>(
    repo: &R,
    member: StableMember,
    effective: Timestamp,
    plan: &mut TransitionPlan,
) where
    R: RosterRepository + ?Sized,
{
    if let Some(stable) = repo.current_stable_of(member) {
        plan.push(Mutation::EndStableMembership {
            member,
            stable,
            at: effective,
        });
    }
}

/// End every current management engagement of `client`.
fn end_managements_of_client<R>(
    repo: &R,
    client: Client,
    effective: Timestamp,
    plan: &mut TransitionPlan,
) where
    R: RosterRepository + ?Sized,
{
    for manager in repo.current_managers_of(client) {
        plan.push(Mutation::EndManagement {
            client,
            manager,
            at: effective,
        });
    }
}
