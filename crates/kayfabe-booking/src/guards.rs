//! # Guard Rules
//!
//! Pure precondition checks per (entity type, transition), evaluated
//! against a read-only [`EntityView`] before anything is planned. The
//! checks short-circuit on the first failure and return the specific
//! [`Refusal`] for it — callers render the message, the engine never
//! guesses.
//!
//! Because the derived statuses are mutually exclusive, most guards are
//! a single exhaustive `match` over the status at "now". Soft deletion
//! is orthogonal: every transition except `restore` is refused for a
//! deleted entity, before any status check runs.

use kayfabe_core::{Dimension, EntityType, Timestamp};
use kayfabe_state::{roster_status, title_status, RosterStatus, TitleStatus};

use crate::error::{Refusal, TransitionError};
use crate::repository::EntityView;
use crate::request::TransitionKind;

/// Run the ordered guard checks for `kind` against the snapshot.
///
/// Guards are evaluated at `now`, not at the effective date: whether a
/// request is legal is judged against the present state; the effective
/// date only stamps the resulting mutations.
pub fn check(view: &EntityView, kind: TransitionKind, now: Timestamp) -> Result<(), TransitionError> {
    let refuse = |refusal: Refusal| TransitionError::Refused {
        entity: view.entity,
        name: view.name.clone(),
        kind,
        refusal,
    };

    let entity_type = view.entity.entity_type();
    if !kind.applies_to(entity_type) {
        return Err(refuse(Refusal::UnsupportedTransition));
    }

    // Deleted entities accept only `restore`.
    match kind {
        TransitionKind::Restore => {
            if !view.deleted {
                return Err(refuse(Refusal::NotDeleted));
            }
            return Ok(());
        }
        _ if view.deleted => return Err(refuse(Refusal::Deleted)),
        _ => {}
    }

    if entity_type == EntityType::Title {
        return check_title(view, kind, now).map_err(refuse);
    }
    check_roster(view, kind, now).map_err(refuse)
}

/// Guard table for wrestlers, managers, referees, tag teams, stables.
fn check_roster(view: &EntityView, kind: TransitionKind, now: Timestamp) -> Result<(), Refusal> {
    let status = roster_status(&view.condition, now);
    match kind {
        // Retirement is not a block: it is ended as a pre-step.
        TransitionKind::Employ => match status {
            RosterStatus::Employed | RosterStatus::Suspended | RosterStatus::Injured => {
                Err(Refusal::AlreadyEmployed)
            }
            _ => Ok(()),
        },
        TransitionKind::Release => match status {
            RosterStatus::Unemployed => Err(Refusal::Unemployed),
            RosterStatus::Released => Err(Refusal::AlreadyReleased),
            RosterStatus::FutureEmployment => Err(Refusal::HasFutureEmployment),
            RosterStatus::Retired => Err(Refusal::Retired),
            RosterStatus::Employed | RosterStatus::Suspended | RosterStatus::Injured => Ok(()),
        },
        // Suspension and injury guards work on *open* periods rather
        // than the status at now: a future-dated injury already owns
        // the dimension, and the mutual-exclusion invariant is about
        // simultaneously open periods.
        TransitionKind::Suspend => {
            if view.condition.has_open(Dimension::Suspension) {
                Err(Refusal::AlreadySuspended)
            } else if view.condition.has_open(Dimension::Injury) {
                Err(Refusal::Injured)
            } else {
                match status {
                    RosterStatus::Employed => Ok(()),
                    RosterStatus::Retired => Err(Refusal::Retired),
                    RosterStatus::FutureEmployment => Err(Refusal::HasFutureEmployment),
                    RosterStatus::Unemployed | RosterStatus::Released => Err(Refusal::Unemployed),
                    // Unreachable: both dimensions were just checked open-free.
                    RosterStatus::Suspended => Err(Refusal::AlreadySuspended),
                    RosterStatus::Injured => Err(Refusal::Injured),
                }
            }
        }
        TransitionKind::Reinstate => {
            if view.condition.has_open(Dimension::Suspension)
                || view.condition.has_open(Dimension::Injury)
            {
                Ok(())
            } else {
                Err(Refusal::NotSuspended)
            }
        }
        TransitionKind::Injure => {
            if view.condition.has_open(Dimension::Injury) {
                Err(Refusal::AlreadyInjured)
            } else if view.condition.has_open(Dimension::Suspension) {
                Err(Refusal::Suspended)
            } else {
                match status {
                    RosterStatus::Employed => Ok(()),
                    RosterStatus::Retired => Err(Refusal::Retired),
                    RosterStatus::FutureEmployment => Err(Refusal::HasFutureEmployment),
                    RosterStatus::Unemployed | RosterStatus::Released => Err(Refusal::Unemployed),
                    RosterStatus::Suspended => Err(Refusal::AlreadySuspended),
                    RosterStatus::Injured => Err(Refusal::AlreadyInjured),
                }
            }
        }
        TransitionKind::ClearInjury => {
            if view.condition.has_open(Dimension::Injury) {
                Ok(())
            } else {
                Err(Refusal::NotInjured)
            }
        }
        TransitionKind::Retire => match status {
            RosterStatus::Unemployed => Err(Refusal::Unemployed),
            RosterStatus::FutureEmployment => Err(Refusal::HasFutureEmployment),
            RosterStatus::Retired => Err(Refusal::Retired),
            RosterStatus::Employed
            | RosterStatus::Suspended
            | RosterStatus::Injured
            | RosterStatus::Released => Ok(()),
        },
        TransitionKind::Unretire => match status {
            RosterStatus::Retired => Ok(()),
            _ => Err(Refusal::NotRetired),
        },
        TransitionKind::Delete => Ok(()),
        // Handled before the status table.
        TransitionKind::Restore => Ok(()),
        // applies_to() already rejected these for roster entities.
        TransitionKind::Debut | TransitionKind::Pull => Err(Refusal::UnsupportedTransition),
    }
}

/// Guard table for titles.
fn check_title(view: &EntityView, kind: TransitionKind, now: Timestamp) -> Result<(), Refusal> {
    let status = title_status(&view.condition, now);
    match kind {
        // Retirement is ended as a pre-step, like employ-after-retirement.
        TransitionKind::Debut => match status {
            TitleStatus::Active => Err(Refusal::AlreadyActive),
            _ => Ok(()),
        },
        TransitionKind::Pull => match status {
            TitleStatus::Active => Ok(()),
            _ => Err(Refusal::NotActive),
        },
        TransitionKind::Retire => match status {
            TitleStatus::Undebuted => Err(Refusal::Undebuted),
            TitleStatus::FutureDebut => Err(Refusal::HasFutureDebut),
            TitleStatus::Retired => Err(Refusal::Retired),
            TitleStatus::Active | TitleStatus::Inactive => Ok(()),
        },
        TransitionKind::Unretire => match status {
            TitleStatus::Retired => Ok(()),
            _ => Err(Refusal::NotRetired),
        },
        TransitionKind::Delete => Ok(()),
        TransitionKind::Restore => Ok(()),
        _ => Err(Refusal::UnsupportedTransition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kayfabe_core::{Dimension, TitleId, WrestlerId};
    use kayfabe_state::Condition;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    fn wrestler_view(condition: Condition) -> EntityView {
        EntityView {
            entity: WrestlerId::new().into(),
            name: "Rico Carter".to_string(),
            deleted: false,
            condition,
        }
    }

    #[test]
    fn test_employ_unemployed_allowed() {
        let view = wrestler_view(Condition::for_entity(EntityType::Wrestler));
        assert!(check(&view, TransitionKind::Employ, ts(100)).is_ok());
    }

    #[test]
    fn test_suspend_unemployed_refused() {
        let view = wrestler_view(Condition::for_entity(EntityType::Wrestler));
        let err = check(&view, TransitionKind::Suspend, ts(100)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::Unemployed));
    }

    #[test]
    fn test_suspend_injured_refused_mutual_exclusion() {
        let mut condition = Condition::for_entity(EntityType::Wrestler);
        condition.open(Dimension::Employment, ts(100)).unwrap();
        condition.open(Dimension::Injury, ts(200)).unwrap();
        let view = wrestler_view(condition);
        let err = check(&view, TransitionKind::Suspend, ts(300)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::Injured));
    }

    #[test]
    fn test_release_future_employment_refused() {
        let mut condition = Condition::for_entity(EntityType::Wrestler);
        condition.open(Dimension::Employment, ts(500)).unwrap();
        let view = wrestler_view(condition);
        let err = check(&view, TransitionKind::Release, ts(100)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::HasFutureEmployment));
    }

    #[test]
    fn test_employ_retired_allowed_as_pre_step() {
        let mut condition = Condition::for_entity(EntityType::Wrestler);
        condition.open(Dimension::Employment, ts(100)).unwrap();
        condition.close(Dimension::Employment, ts(200)).unwrap();
        condition.open(Dimension::Retirement, ts(200)).unwrap();
        let view = wrestler_view(condition);
        assert!(check(&view, TransitionKind::Employ, ts(300)).is_ok());
    }

    #[test]
    fn test_retire_released_allowed() {
        let mut condition = Condition::for_entity(EntityType::Wrestler);
        condition.open(Dimension::Employment, ts(100)).unwrap();
        condition.close(Dimension::Employment, ts(200)).unwrap();
        let view = wrestler_view(condition);
        assert!(check(&view, TransitionKind::Retire, ts(300)).is_ok());
    }

    #[test]
    fn test_deleted_accepts_only_restore() {
        let mut view = wrestler_view(Condition::for_entity(EntityType::Wrestler));
        view.deleted = true;
        let err = check(&view, TransitionKind::Employ, ts(100)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::Deleted));
        assert!(check(&view, TransitionKind::Restore, ts(100)).is_ok());

        view.deleted = false;
        let err = check(&view, TransitionKind::Restore, ts(100)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::NotDeleted));
    }

    #[test]
    fn test_title_guards() {
        let mut condition = Condition::for_entity(EntityType::Title);
        let view = EntityView {
            entity: TitleId::new().into(),
            name: "World Heavyweight Title".to_string(),
            deleted: false,
            condition: condition.clone(),
        };
        // Undebuted: debut ok, pull and retire refused.
        assert!(check(&view, TransitionKind::Debut, ts(100)).is_ok());
        assert_eq!(
            check(&view, TransitionKind::Pull, ts(100)).unwrap_err().refusal(),
            Some(Refusal::NotActive)
        );
        assert_eq!(
            check(&view, TransitionKind::Retire, ts(100)).unwrap_err().refusal(),
            Some(Refusal::Undebuted)
        );

        condition.open(Dimension::Activity, ts(100)).unwrap();
        let view = EntityView {
            condition: condition.clone(),
            ..view
        };
        assert_eq!(
            check(&view, TransitionKind::Debut, ts(200)).unwrap_err().refusal(),
            Some(Refusal::AlreadyActive)
        );
        assert!(check(&view, TransitionKind::Retire, ts(200)).is_ok());
    }

    #[test]
    fn test_wrestler_cannot_debut() {
        let view = wrestler_view(Condition::for_entity(EntityType::Wrestler));
        let err = check(&view, TransitionKind::Debut, ts(100)).unwrap_err();
        assert_eq!(err.refusal(), Some(Refusal::UnsupportedTransition));
    }
}
