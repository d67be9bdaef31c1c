//! # Booker — the Transition Executor
//!
//! Given a [`TransitionRequest`], the booker validates the guards,
//! computes the ordered mutation plan (pre-steps, primary mutation,
//! cascades), and hands it to the repository to apply atomically.
//! Nothing is written when any step refuses — a failed transition is a
//! no-op, including every pre-step and cascade already planned.
//!
//! ## Pre-steps
//!
//! Some transitions implicitly end other open periods first, in fixed
//! order:
//!
//! - `release` / `retire` / `delete`: close Suspension → close Injury →
//!   close Employment (Activity for titles).
//! - `employ` / `unretire` / `debut`: close Retirement before opening
//!   the target dimension.
//!
//! Pre-step closes are clamped to the period's own start when the
//! effective date precedes it (a not-yet-started period closes as a
//! zero-length record rather than failing the whole transition).
//! The primary mutation is never clamped: releasing before the
//! employment started is a date-range error, not a silent fix-up.

use kayfabe_core::{Dimension, EntityType, Timestamp};

use crate::cascade;
use crate::clock::Clock;
use crate::error::TransitionError;
use crate::events::{EventSink, TransitionEvent};
use crate::guards;
use crate::plan::{Mutation, TransitionPlan};
use crate::repository::{EntityView, RosterRepository};
use crate::request::{TransitionKind, TransitionRequest};

/// The booking office: validates, plans, and applies transitions.
#[derive(Debug, Clone)]
pub struct Booker<C: Clock> {
    clock: C,
}

impl<C: Clock> Booker<C> {
    /// Create a booker over a time source.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Compute the full plan for a request without applying it.
    ///
    /// "Now" is read from the clock exactly once and reused for every
    /// guard and mutation in the call.
    pub fn plan<R>(&self, repo: &R, request: &TransitionRequest) -> Result<TransitionPlan, TransitionError>
    where
        R: RosterRepository + ?Sized,
    {
        let now = self.clock.now();
        let effective = request.effective_at.unwrap_or(now);
        let view = repo.view(&request.target)?;
        let mut plan = plan_transition(&view, request.kind, effective, now)?;
        cascade::extend_plan(repo, &view, request.kind, effective, now, &mut plan)?;
        Ok(plan)
    }

    /// Validate, plan, and atomically apply a transition.
    ///
    /// On success returns the domain events, which the caller forwards
    /// to its sink after its transaction commits. On error the
    /// repository is untouched.
    pub fn handle<R>(
        &self,
        repo: &mut R,
        request: &TransitionRequest,
    ) -> Result<Vec<TransitionEvent>, TransitionError>
    where
        R: RosterRepository + ?Sized,
    {
        let plan = self.plan(repo, request)?;
        repo.apply_all(&plan.mutations)?;
        Ok(plan.events)
    }

    /// [`handle`](Self::handle), then publish the events to `sink`.
    ///
    /// Publication happens only after `apply_all` returned, so the sink
    /// never sees a rolled-back transition.
    pub fn handle_and_publish<R, S>(
        &self,
        repo: &mut R,
        sink: &mut S,
        request: &TransitionRequest,
    ) -> Result<Vec<TransitionEvent>, TransitionError>
    where
        R: RosterRepository + ?Sized,
        S: EventSink + ?Sized,
    {
        let events = self.handle(repo, request)?;
        for event in &events {
            sink.publish(event);
        }
        Ok(events)
    }
}

/// Plan one entity's own transition: guards, pre-steps, primary
/// mutation, and its event — no cascades.
///
/// Cascade strategies call back into this for related entities, which
/// is how a wrestler's employ can employ a manager with the manager's
/// own guard set and pre-steps.
pub(crate) fn plan_transition(
    view: &EntityView,
    kind: TransitionKind,
    effective: Timestamp,
    now: Timestamp,
) -> Result<TransitionPlan, TransitionError> {
    guards::check(view, kind, now)?;

    let mut plan = TransitionPlan::new();
    let is_title = view.entity.entity_type() == EntityType::Title;

    match kind {
        TransitionKind::Employ => {
            close_open_clamped(view, Dimension::Retirement, effective, &mut plan);
            push_open_or_reschedule(view, Dimension::Employment, effective, &mut plan);
        }
        TransitionKind::Release => {
            close_open_clamped(view, Dimension::Suspension, effective, &mut plan);
            close_open_clamped(view, Dimension::Injury, effective, &mut plan);
            plan.push(Mutation::ClosePeriod {
                target: view.entity,
                dimension: Dimension::Employment,
                at: effective,
            });
        }
        TransitionKind::Suspend => {
            plan.push(Mutation::OpenPeriod {
                target: view.entity,
                dimension: Dimension::Suspension,
                at: effective,
            });
        }
        TransitionKind::Reinstate => {
            // Mutual exclusion means at most one of the two is open.
            let dimension = if view.condition.has_open(Dimension::Suspension) {
                Dimension::Suspension
            } else {
                Dimension::Injury
            };
            plan.push(Mutation::ClosePeriod {
                target: view.entity,
                dimension,
                at: effective,
            });
        }
        TransitionKind::Injure => {
            plan.push(Mutation::OpenPeriod {
                target: view.entity,
                dimension: Dimension::Injury,
                at: effective,
            });
        }
        TransitionKind::ClearInjury => {
            plan.push(Mutation::ClosePeriod {
                target: view.entity,
                dimension: Dimension::Injury,
                at: effective,
            });
        }
        TransitionKind::Retire => {
            close_open_clamped(view, Dimension::Suspension, effective, &mut plan);
            close_open_clamped(view, Dimension::Injury, effective, &mut plan);
            let working = if is_title {
                Dimension::Activity
            } else {
                Dimension::Employment
            };
            close_open_clamped(view, working, effective, &mut plan);
            plan.push(Mutation::OpenPeriod {
                target: view.entity,
                dimension: Dimension::Retirement,
                at: effective,
            });
        }
        TransitionKind::Unretire => {
            plan.push(Mutation::ClosePeriod {
                target: view.entity,
                dimension: Dimension::Retirement,
                at: effective,
            });
        }
        TransitionKind::Debut => {
            close_open_clamped(view, Dimension::Retirement, effective, &mut plan);
            push_open_or_reschedule(view, Dimension::Activity, effective, &mut plan);
        }
        TransitionKind::Pull => {
            plan.push(Mutation::ClosePeriod {
                target: view.entity,
                dimension: Dimension::Activity,
                at: effective,
            });
        }
        TransitionKind::Delete => {
            close_open_clamped(view, Dimension::Suspension, effective, &mut plan);
            close_open_clamped(view, Dimension::Injury, effective, &mut plan);
            let working = if is_title {
                Dimension::Activity
            } else {
                Dimension::Employment
            };
            close_open_clamped(view, working, effective, &mut plan);
            plan.push(Mutation::SoftDelete {
                target: view.entity,
                at: effective,
            });
        }
        TransitionKind::Restore => {
            plan.push(Mutation::Restore {
                target: view.entity,
            });
        }
    }

    plan.events.push(TransitionEvent {
        entity: view.entity,
        entity_name: view.name.clone(),
        kind,
        effective_at: effective,
    });
    Ok(plan)
}

/// Pre-step helper: close the open period for `dimension`, if one
/// exists, clamping the end to the period's own start.
fn close_open_clamped(
    view: &EntityView,
    dimension: Dimension,
    effective: Timestamp,
    plan: &mut TransitionPlan,
) {
    let Some(open) = view.condition.history(dimension).and_then(|h| h.current().copied()) else {
        return;
    };
    plan.push(Mutation::ClosePeriod {
        target: view.entity,
        dimension,
        at: effective.max(open.started_at),
    });
}

/// Primary-open helper: open a fresh period, or move the start of an
/// open future-dated one (the guard already established it has not
/// started).
fn push_open_or_reschedule(
    view: &EntityView,
    dimension: Dimension,
    effective: Timestamp,
    plan: &mut TransitionPlan,
) {
    let mutation = if view.condition.has_open(dimension) {
        Mutation::ReschedulePeriod {
            target: view.entity,
            dimension,
            at: effective,
        }
    } else {
        Mutation::OpenPeriod {
            target: view.entity,
            dimension,
            at: effective,
        }
    };
    plan.push(mutation);
}
