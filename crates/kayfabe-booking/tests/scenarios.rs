//! End-to-end booking scenarios against the in-memory store: the
//! canonical lifecycles, cascade behavior, and atomicity.

use kayfabe_core::{Dimension, Timestamp};
use kayfabe_state::{
    Client, Manager, RosterStatus, StableMember, Title, TitleStatus, Wrestler,
};

use kayfabe_booking::{
    tag_team_bookability, Bookability, Booker, BufferSink, FixedClock, InMemoryRoster, Mutation,
    Refusal, RosterRepository, TransitionKind, TransitionRequest,
};

fn ts(secs: i64) -> Timestamp {
    Timestamp::from_epoch_secs(secs).unwrap()
}

/// A booker whose "now" is pinned to `now_secs`.
fn booker(now_secs: i64) -> Booker<FixedClock> {
    Booker::new(FixedClock(ts(now_secs)))
}

#[test]
fn scenario_employ_suspend_reinstate() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(1_000);

    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Unemployed);

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ))
        .unwrap();
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Employed);

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Suspend))
        .unwrap();
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Suspended);

    let err = booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Suspend))
        .unwrap_err();
    assert_eq!(err.refusal(), Some(Refusal::AlreadySuspended));

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Reinstate))
        .unwrap();
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Employed);
}

#[test]
fn scenario_employ_cascade_is_idempotent_for_employed_managers() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let employed = roster.add_manager(Manager::new("Lou Fontaine"));
    let unemployed = roster.add_manager(Manager::new("Vera Quinn"));
    roster.assign_manager(Client::Wrestler(w), employed, ts(10)).unwrap();
    roster.assign_manager(Client::Wrestler(w), unemployed, ts(10)).unwrap();

    let booker = booker(1_000);
    booker
        .handle(&mut roster, &TransitionRequest::new(employed, TransitionKind::Employ))
        .unwrap();
    let employed_history_before = roster
        .manager(employed)
        .unwrap()
        .condition
        .history(Dimension::Employment)
        .unwrap()
        .clone();

    let events = booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ))
        .unwrap();

    // Only the unemployed manager's employment opened.
    let names: Vec<String> = events.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["WrestlerEmployed".to_string(), "ManagerEmployed".to_string()]);
    assert_eq!(
        roster.manager(unemployed).unwrap().status_at(ts(1_000)),
        RosterStatus::Employed
    );

    // The already-employed manager is untouched, period for period.
    let employed_history_after = roster
        .manager(employed)
        .unwrap()
        .condition
        .history(Dimension::Employment)
        .unwrap()
        .clone();
    assert_eq!(employed_history_before, employed_history_after);
}

#[test]
fn scenario_delete_ends_membership_and_periods() {
    let mut roster = InMemoryRoster::new();
    let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
    let b = roster.add_wrestler(Wrestler::new("Dex Mori"));
    let team = roster.form_tag_team("The Rockets", &[a, b], ts(10)).unwrap();
    let booker = booker(1_000);

    for id in [a, b] {
        booker
            .handle(&mut roster, &TransitionRequest::new(id, TransitionKind::Employ).effective_at(ts(100)))
            .unwrap();
    }
    booker
        .handle(&mut roster, &TransitionRequest::new(a, TransitionKind::Suspend).effective_at(ts(200)))
        .unwrap();
    assert_eq!(tag_team_bookability(&roster, team, ts(1_000)).unwrap(), Bookability::SeekingPartner);

    let delete_at = ts(500);
    booker
        .handle(
            &mut roster,
            &TransitionRequest::new(a, TransitionKind::Delete).effective_at(delete_at),
        )
        .unwrap();

    let deleted = roster.wrestler(a).unwrap();
    assert_eq!(deleted.deleted_at, Some(delete_at));

    // Employment and the open suspension both ended at the delete date.
    let employment = deleted.condition.history(Dimension::Employment).unwrap();
    assert_eq!(employment.latest().unwrap().ended_at, Some(delete_at));
    let suspension = deleted.condition.history(Dimension::Suspension).unwrap();
    assert_eq!(suspension.latest().unwrap().ended_at, Some(delete_at));

    // The team membership ended at the delete date; history intact.
    let stint = roster
        .tag_team_membership_history()
        .iter()
        .find(|m| m.wrestler == a)
        .unwrap()
        .stint;
    assert_eq!(stint.left_at, Some(delete_at));

    // One active wrestler remains.
    assert_eq!(
        tag_team_bookability(&roster, team, ts(1_000)).unwrap(),
        Bookability::SeekingPartner
    );
    booker
        .handle(&mut roster, &TransitionRequest::new(b, TransitionKind::Release).effective_at(ts(600)))
        .unwrap();
    assert_eq!(
        tag_team_bookability(&roster, team, ts(1_000)).unwrap(),
        Bookability::Dissolved
    );
}

#[test]
fn scenario_title_retire_closes_activity_first() {
    let mut roster = InMemoryRoster::new();
    let title = roster.add_title(Title::new("World Heavyweight Title"));
    let booker = booker(1_000);

    // Cannot retire a title that never debuted.
    let err = booker
        .handle(&mut roster, &TransitionRequest::new(title, TransitionKind::Retire))
        .unwrap_err();
    assert_eq!(err.refusal(), Some(Refusal::Undebuted));

    booker
        .handle(&mut roster, &TransitionRequest::new(title, TransitionKind::Debut).effective_at(ts(100)))
        .unwrap();
    assert_eq!(roster.title(title).unwrap().status_at(ts(1_000)), TitleStatus::Active);

    let retire_at = ts(500);
    booker
        .handle(
            &mut roster,
            &TransitionRequest::new(title, TransitionKind::Retire).effective_at(retire_at),
        )
        .unwrap();

    let condition = &roster.title(title).unwrap().condition;
    assert_eq!(
        condition.history(Dimension::Activity).unwrap().latest().unwrap().ended_at,
        Some(retire_at)
    );
    assert_eq!(
        condition.history(Dimension::Retirement).unwrap().current().unwrap().started_at,
        retire_at
    );

    let err = booker
        .handle(&mut roster, &TransitionRequest::new(title, TransitionKind::Retire))
        .unwrap_err();
    assert_eq!(err.refusal(), Some(Refusal::Retired));
}

#[test]
fn scenario_release_refused_for_future_employment() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(1_000);

    booker
        .handle(
            &mut roster,
            &TransitionRequest::new(w, TransitionKind::Employ).effective_at(ts(5_000)),
        )
        .unwrap();
    assert_eq!(
        roster.wrestler(w).unwrap().status_at(ts(1_000)),
        RosterStatus::FutureEmployment
    );
    let before = roster.clone();

    let err = booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Release))
        .unwrap_err();
    assert_eq!(err.refusal(), Some(Refusal::HasFutureEmployment));
    assert_eq!(roster, before);
}

#[test]
fn employ_release_employ_round_trip() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(10_000);
    let (t1, t2, t3) = (ts(1_000), ts(2_000), ts(3_000));

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(t1))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Release).effective_at(t2))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(t3))
        .unwrap();

    let employment = roster
        .wrestler(w)
        .unwrap()
        .condition
        .history(Dimension::Employment)
        .unwrap();
    assert_eq!(employment.len(), 2);
    assert_eq!(employment.periods()[0].started_at, t1);
    assert_eq!(employment.periods()[0].ended_at, Some(t2));
    assert_eq!(employment.periods()[1].started_at, t3);
    assert!(employment.periods()[1].is_open());
}

#[test]
fn employ_pulls_future_start_forward_instead_of_reopening() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(1_000);

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(ts(5_000)))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(ts(1_000)))
        .unwrap();

    let employment = roster
        .wrestler(w)
        .unwrap()
        .condition
        .history(Dimension::Employment)
        .unwrap();
    assert_eq!(employment.len(), 1);
    assert_eq!(employment.current().unwrap().started_at, ts(1_000));
}

#[test]
fn retire_ends_suspension_then_employment_then_opens_retirement() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(1_000);

    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(ts(100)))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Suspend).effective_at(ts(200)))
        .unwrap();

    let retire_at = ts(500);
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Retire).effective_at(retire_at))
        .unwrap();

    let condition = &roster.wrestler(w).unwrap().condition;
    assert_eq!(
        condition.history(Dimension::Suspension).unwrap().latest().unwrap().ended_at,
        Some(retire_at)
    );
    assert_eq!(
        condition.history(Dimension::Employment).unwrap().latest().unwrap().ended_at,
        Some(retire_at)
    );
    assert_eq!(
        condition.history(Dimension::Retirement).unwrap().current().unwrap().started_at,
        retire_at
    );
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Retired);

    // Unretire closes the retirement; the wrestler is then released, not
    // employed — re-employment is an explicit follow-up.
    booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Unretire).effective_at(ts(600)))
        .unwrap();
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Released);
}

#[test]
fn retire_cascades_to_stable_membership() {
    let mut roster = InMemoryRoster::new();
    let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
    let b = roster.add_wrestler(Wrestler::new("Dex Mori"));
    let m = roster.add_manager(Manager::new("Lou Fontaine"));
    let team = roster.form_tag_team("The Rockets", &[a, b], ts(10)).unwrap();
    roster
        .form_stable(
            "The Syndicate",
            &[StableMember::TagTeam(team), StableMember::Manager(m)],
            ts(20),
        )
        .unwrap();
    let booker = booker(1_000);

    booker
        .handle(&mut roster, &TransitionRequest::new(m, TransitionKind::Employ).effective_at(ts(100)))
        .unwrap();
    let retire_at = ts(500);
    booker
        .handle(&mut roster, &TransitionRequest::new(m, TransitionKind::Retire).effective_at(retire_at))
        .unwrap();

    let stint = roster
        .stable_membership_history()
        .iter()
        .find(|s| s.member == StableMember::Manager(m))
        .unwrap()
        .stint;
    assert_eq!(stint.left_at, Some(retire_at));

    // The tag team's own stable stint is untouched.
    let team_stint = roster
        .stable_membership_history()
        .iter()
        .find(|s| s.member == StableMember::TagTeam(team))
        .unwrap()
        .stint;
    assert!(team_stint.is_current());
}

#[test]
fn cascade_guard_failure_aborts_everything() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let m = roster.add_manager(Manager::new("Lou Fontaine"));
    roster.assign_manager(Client::Wrestler(w), m, ts(10)).unwrap();
    // Soft-delete the manager out-of-band, leaving the engagement current.
    roster.apply(&Mutation::SoftDelete { target: m.into(), at: ts(20) }).unwrap();
    let before = roster.clone();

    let booker = booker(1_000);
    let err = booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ))
        .unwrap_err();
    assert_eq!(err.refusal(), Some(Refusal::Deleted));
    assert_eq!(roster, before);
}

#[test]
fn apply_failure_rolls_back_primary_mutation() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let m = roster.add_manager(Manager::new("Lou Fontaine"));

    let booker = booker(1_000);
    // Manager: employed [10, 100), retired from 100, then hired by the
    // wrestler while retired.
    booker
        .handle(&mut roster, &TransitionRequest::new(m, TransitionKind::Employ).effective_at(ts(10)))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(m, TransitionKind::Retire).effective_at(ts(100)))
        .unwrap();
    roster.assign_manager(Client::Wrestler(w), m, ts(150)).unwrap();
    let before = roster.clone();

    // Employing the wrestler backdated to 50 cascades into employing the
    // manager at 50, which would overlap the manager's closed employment
    // period. The wrestler's own (already applied) mutation must roll
    // back with it.
    let err = booker
        .handle(&mut roster, &TransitionRequest::new(w, TransitionKind::Employ).effective_at(ts(50)))
        .unwrap_err();
    assert!(matches!(err, kayfabe_booking::TransitionError::Period(_)));
    assert_eq!(roster, before);
    assert_eq!(roster.wrestler(w).unwrap().status_at(ts(1_000)), RosterStatus::Unemployed);
}

#[test]
fn restore_never_restores_relationships() {
    let mut roster = InMemoryRoster::new();
    let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
    let b = roster.add_wrestler(Wrestler::new("Dex Mori"));
    roster.form_tag_team("The Rockets", &[a, b], ts(10)).unwrap();
    let booker = booker(1_000);

    booker
        .handle(&mut roster, &TransitionRequest::new(a, TransitionKind::Employ).effective_at(ts(100)))
        .unwrap();
    booker
        .handle(&mut roster, &TransitionRequest::new(a, TransitionKind::Delete).effective_at(ts(200)))
        .unwrap();
    let events = booker
        .handle(&mut roster, &TransitionRequest::new(a, TransitionKind::Restore))
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name(), "WrestlerRestored");

    let wrestler = roster.wrestler(a).unwrap();
    assert!(!wrestler.is_deleted());
    // The employment stayed closed and the team stint stayed ended.
    assert_eq!(wrestler.status_at(ts(1_000)), RosterStatus::Released);
    assert!(roster.current_tag_team_of(a).is_none());
}

#[test]
fn events_publish_only_after_commit() {
    let mut roster = InMemoryRoster::new();
    let w = roster.add_wrestler(Wrestler::new("Rico Carter"));
    let booker = booker(1_000);
    let mut sink = BufferSink::default();

    // Refused transition: nothing published.
    let err = booker.handle_and_publish(&mut roster, &mut sink, &TransitionRequest::new(w, TransitionKind::Suspend));
    assert!(err.is_err());
    assert!(sink.events.is_empty());

    booker
        .handle_and_publish(&mut roster, &mut sink, &TransitionRequest::new(w, TransitionKind::Employ))
        .unwrap();
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].name(), "WrestlerEmployed");
}
