//! # In-Memory Roster Store
//!
//! A complete [`RosterRepository`] backed by in-process maps. This is
//! the store the CLI, the API's default state, and the test suite run
//! against; a database-backed implementation would satisfy the same
//! trait with its own transaction machinery.
//!
//! `apply_all` fulfils the atomicity contract by snapshotting the whole
//! store, applying mutations in order, and restoring the snapshot if
//! any mutation fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kayfabe_core::{
    Dimension, EntityRef, ManagerId, RefereeId, StableId, TagTeamId, Timestamp, TitleId,
    WrestlerId,
};
use kayfabe_state::{
    roster_status, stable_weight, Client, Condition, Management, Manager, MembershipError,
    Referee, RosterStatus, Stable, StableMember, StableMembership, Stint, TagTeam,
    TagTeamMembership, Title, Wrestler, STABLE_MIN_WEIGHT, TAG_TEAM_SIZE,
};

use crate::error::TransitionError;
use crate::plan::Mutation;
use crate::repository::{EntityView, RosterRepository};

/// The whole promotion's state in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryRoster {
    wrestlers: BTreeMap<WrestlerId, Wrestler>,
    managers: BTreeMap<ManagerId, Manager>,
    referees: BTreeMap<RefereeId, Referee>,
    tag_teams: BTreeMap<TagTeamId, TagTeam>,
    stables: BTreeMap<StableId, Stable>,
    titles: BTreeMap<TitleId, Title>,
    tag_team_memberships: Vec<TagTeamMembership>,
    stable_memberships: Vec<StableMembership>,
    managements: Vec<Management>,
}

impl InMemoryRoster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Registration ────────────────────────────────────────────────

    /// Add a wrestler and return its id.
    pub fn add_wrestler(&mut self, wrestler: Wrestler) -> WrestlerId {
        let id = wrestler.id;
        self.wrestlers.insert(id, wrestler);
        id
    }

    /// Add a manager and return its id.
    pub fn add_manager(&mut self, manager: Manager) -> ManagerId {
        let id = manager.id;
        self.managers.insert(id, manager);
        id
    }

    /// Add a referee and return its id.
    pub fn add_referee(&mut self, referee: Referee) -> RefereeId {
        let id = referee.id;
        self.referees.insert(id, referee);
        id
    }

    /// Add a title and return its id.
    pub fn add_title(&mut self, title: Title) -> TitleId {
        let id = title.id;
        self.titles.insert(id, title);
        id
    }

    // ─── Formation ───────────────────────────────────────────────────

    /// Form a tag team from exactly [`TAG_TEAM_SIZE`] wrestlers.
    ///
    /// Each wrestler must exist and must not already be on a current
    /// team.
    pub fn form_tag_team(
        &mut self,
        name: impl Into<String>,
        wrestlers: &[WrestlerId],
        at: Timestamp,
    ) -> Result<TagTeamId, TransitionError> {
        if wrestlers.len() != TAG_TEAM_SIZE {
            return Err(MembershipError::NotEnoughMembers {
                group: "tag team",
                required: TAG_TEAM_SIZE as u32,
                actual: wrestlers.len() as u32,
            }
            .into());
        }
        for id in wrestlers {
            self.require_wrestler(*id)?;
            if self.current_tag_team_of(*id).is_some() {
                return Err(MembershipError::Conflict {
                    member: id.to_string(),
                    group: "tag team",
                }
                .into());
            }
        }
        let team = TagTeam::new(name);
        let team_id = team.id;
        self.tag_teams.insert(team_id, team);
        for id in wrestlers {
            self.tag_team_memberships.push(TagTeamMembership {
                wrestler: *id,
                tag_team: team_id,
                stint: Stint::begin(at),
            });
        }
        Ok(team_id)
    }

    /// Form a stable whose members weigh at least [`STABLE_MIN_WEIGHT`].
    pub fn form_stable(
        &mut self,
        name: impl Into<String>,
        members: &[StableMember],
        at: Timestamp,
    ) -> Result<StableId, TransitionError> {
        let weight = stable_weight(members.iter());
        if weight < STABLE_MIN_WEIGHT {
            return Err(MembershipError::NotEnoughMembers {
                group: "stable",
                required: STABLE_MIN_WEIGHT,
                actual: weight,
            }
            .into());
        }
        for member in members {
            self.require_stable_member(*member)?;
            if self.current_stable_of(*member).is_some() {
                return Err(MembershipError::Conflict {
                    member: member.to_string(),
                    group: "stable",
                }
                .into());
            }
        }
        let stable = Stable::new(name);
        let stable_id = stable.id;
        self.stables.insert(stable_id, stable);
        for member in members {
            self.stable_memberships.push(StableMembership {
                member: *member,
                stable: stable_id,
                stint: Stint::begin(at),
            });
        }
        Ok(stable_id)
    }

    // ─── Membership mutators ─────────────────────────────────────────

    /// Put a wrestler on a tag team.
    ///
    /// # Errors
    ///
    /// - [`MembershipError::Conflict`] if the wrestler is already on a
    ///   current team.
    /// - [`MembershipError::RosterFull`] if the team already has
    ///   [`TAG_TEAM_SIZE`] current members.
    pub fn add_wrestler_to_tag_team(
        &mut self,
        wrestler: WrestlerId,
        tag_team: TagTeamId,
        at: Timestamp,
    ) -> Result<(), TransitionError> {
        self.require_wrestler(wrestler)?;
        let team = self
            .tag_teams
            .get(&tag_team)
            .ok_or(TransitionError::NotFound(EntityRef::TagTeam(tag_team)))?;
        if self.current_tag_team_of(wrestler).is_some() {
            return Err(MembershipError::Conflict {
                member: wrestler.to_string(),
                group: "tag team",
            }
            .into());
        }
        if self.current_wrestlers_of(tag_team).len() >= TAG_TEAM_SIZE {
            return Err(MembershipError::RosterFull {
                group: team.name.clone(),
                size: TAG_TEAM_SIZE,
            }
            .into());
        }
        self.tag_team_memberships.push(TagTeamMembership {
            wrestler,
            tag_team,
            stint: Stint::begin(at),
        });
        Ok(())
    }

    /// Put a member in a stable.
    pub fn add_member_to_stable(
        &mut self,
        member: StableMember,
        stable: StableId,
        at: Timestamp,
    ) -> Result<(), TransitionError> {
        self.require_stable_member(member)?;
        if !self.stables.contains_key(&stable) {
            return Err(TransitionError::NotFound(EntityRef::Stable(stable)));
        }
        if self.current_stable_of(member).is_some() {
            return Err(MembershipError::Conflict {
                member: member.to_string(),
                group: "stable",
            }
            .into());
        }
        self.stable_memberships.push(StableMembership {
            member,
            stable,
            stint: Stint::begin(at),
        });
        Ok(())
    }

    /// Engage a manager with a client.
    pub fn assign_manager(
        &mut self,
        client: Client,
        manager: ManagerId,
        at: Timestamp,
    ) -> Result<(), TransitionError> {
        self.require_client(client)?;
        if !self.managers.contains_key(&manager) {
            return Err(TransitionError::NotFound(EntityRef::Manager(manager)));
        }
        let duplicate = self
            .managements
            .iter()
            .any(|m| m.client == client && m.manager == manager && m.stint.is_current());
        if duplicate {
            return Err(MembershipError::Conflict {
                member: manager.to_string(),
                group: "engagement with this client",
            }
            .into());
        }
        self.managements.push(Management {
            client,
            manager,
            stint: Stint::begin(at),
        });
        Ok(())
    }

    // ─── Accessors ───────────────────────────────────────────────────

    /// Look up a wrestler.
    pub fn wrestler(&self, id: WrestlerId) -> Option<&Wrestler> {
        self.wrestlers.get(&id)
    }

    /// Look up a manager.
    pub fn manager(&self, id: ManagerId) -> Option<&Manager> {
        self.managers.get(&id)
    }

    /// Look up a referee.
    pub fn referee(&self, id: RefereeId) -> Option<&Referee> {
        self.referees.get(&id)
    }

    /// Look up a tag team.
    pub fn tag_team(&self, id: TagTeamId) -> Option<&TagTeam> {
        self.tag_teams.get(&id)
    }

    /// Look up a stable.
    pub fn stable(&self, id: StableId) -> Option<&Stable> {
        self.stables.get(&id)
    }

    /// Look up a title.
    pub fn title(&self, id: TitleId) -> Option<&Title> {
        self.titles.get(&id)
    }

    /// All wrestlers.
    pub fn wrestlers(&self) -> impl Iterator<Item = &Wrestler> {
        self.wrestlers.values()
    }

    /// All managers.
    pub fn managers(&self) -> impl Iterator<Item = &Manager> {
        self.managers.values()
    }

    /// All referees.
    pub fn referees(&self) -> impl Iterator<Item = &Referee> {
        self.referees.values()
    }

    /// All tag teams.
    pub fn tag_teams(&self) -> impl Iterator<Item = &TagTeam> {
        self.tag_teams.values()
    }

    /// All stables.
    pub fn stables(&self) -> impl Iterator<Item = &Stable> {
        self.stables.values()
    }

    /// All titles.
    pub fn titles(&self) -> impl Iterator<Item = &Title> {
        self.titles.values()
    }

    /// Find any entity by exact name. Names are not unique; the first
    /// match wins in wrestler → manager → referee → tag team → stable →
    /// title order.
    pub fn find_by_name(&self, name: &str) -> Option<EntityRef> {
        if let Some(w) = self.wrestlers.values().find(|w| w.name == name) {
            return Some(w.id.into());
        }
        if let Some(m) = self.managers.values().find(|m| m.name == name) {
            return Some(m.id.into());
        }
        if let Some(r) = self.referees.values().find(|r| r.name == name) {
            return Some(r.id.into());
        }
        if let Some(t) = self.tag_teams.values().find(|t| t.name == name) {
            return Some(t.id.into());
        }
        if let Some(s) = self.stables.values().find(|s| s.name == name) {
            return Some(s.id.into());
        }
        if let Some(t) = self.titles.values().find(|t| t.name == name) {
            return Some(t.id.into());
        }
        None
    }

    /// All tag-team membership records, including ended stints.
    pub fn tag_team_membership_history(&self) -> &[TagTeamMembership] {
        &self.tag_team_memberships
    }

    /// All stable membership records, including ended stints.
    pub fn stable_membership_history(&self) -> &[StableMembership] {
        &self.stable_memberships
    }

    /// All management records, including ended stints.
    pub fn management_history(&self) -> &[Management] {
        &self.managements
    }

    // ─── Transactions ────────────────────────────────────────────────

    /// Run `f` atomically: on error the store is restored to its state
    /// before the call.
    pub fn transactionally<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, TransitionError>,
    ) -> Result<T, TransitionError> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }

    // ─── Invariant checking ──────────────────────────────────────────

    /// Re-check every stored invariant, returning one message per
    /// violation. Used by `kayfabe validate` on externally-loaded data;
    /// an empty result means the roster is consistent.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let conditions: Vec<(String, &Condition)> = self
            .wrestlers
            .values()
            .map(|w| (w.name.clone(), &w.condition))
            .chain(self.managers.values().map(|m| (m.name.clone(), &m.condition)))
            .chain(self.referees.values().map(|r| (r.name.clone(), &r.condition)))
            .chain(self.tag_teams.values().map(|t| (t.name.clone(), &t.condition)))
            .chain(self.stables.values().map(|s| (s.name.clone(), &s.condition)))
            .chain(self.titles.values().map(|t| (t.name.clone(), &t.condition)))
            .collect();

        for (name, condition) in &conditions {
            if let Err(err) = condition.validate() {
                violations.push(format!("{name}: {err}"));
            }
            if condition.has_open(Dimension::Suspension) && condition.has_open(Dimension::Injury) {
                violations.push(format!("{name}: open suspension and open injury at once"));
            }
        }

        for wrestler in self.wrestlers.values() {
            let current_teams = self
                .tag_team_memberships
                .iter()
                .filter(|m| m.wrestler == wrestler.id && m.stint.is_current())
                .count();
            if current_teams > 1 {
                violations.push(format!("{}: on {} current tag teams", wrestler.name, current_teams));
            }
        }

        let mut seen_stable_members = Vec::new();
        for membership in &self.stable_memberships {
            if membership.stint.is_current() {
                if seen_stable_members.contains(&membership.member) {
                    violations.push(format!("{}: in more than one current stable", membership.member));
                }
                seen_stable_members.push(membership.member);
            }
        }

        violations
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn require_wrestler(&self, id: WrestlerId) -> Result<&Wrestler, TransitionError> {
        self.wrestlers
            .get(&id)
            .ok_or(TransitionError::NotFound(EntityRef::Wrestler(id)))
    }

    fn require_stable_member(&self, member: StableMember) -> Result<(), TransitionError> {
        let found = match member {
            StableMember::Wrestler(id) => self.wrestlers.contains_key(&id),
            StableMember::TagTeam(id) => self.tag_teams.contains_key(&id),
            StableMember::Manager(id) => self.managers.contains_key(&id),
        };
        if found {
            Ok(())
        } else {
            let entity = match member {
                StableMember::Wrestler(id) => EntityRef::Wrestler(id),
                StableMember::TagTeam(id) => EntityRef::TagTeam(id),
                StableMember::Manager(id) => EntityRef::Manager(id),
            };
            Err(TransitionError::NotFound(entity))
        }
    }

    fn require_client(&self, client: Client) -> Result<(), TransitionError> {
        let (found, entity) = match client {
            Client::Wrestler(id) => (self.wrestlers.contains_key(&id), EntityRef::Wrestler(id)),
            Client::TagTeam(id) => (self.tag_teams.contains_key(&id), EntityRef::TagTeam(id)),
        };
        if found {
            Ok(())
        } else {
            Err(TransitionError::NotFound(entity))
        }
    }

    fn condition_mut(&mut self, target: &EntityRef) -> Result<&mut Condition, TransitionError> {
        match target {
            EntityRef::Wrestler(id) => self
                .wrestlers
                .get_mut(id)
                .map(|w| &mut w.condition)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Manager(id) => self
                .managers
                .get_mut(id)
                .map(|m| &mut m.condition)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Referee(id) => self
                .referees
                .get_mut(id)
                .map(|r| &mut r.condition)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::TagTeam(id) => self
                .tag_teams
                .get_mut(id)
                .map(|t| &mut t.condition)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Stable(id) => self
                .stables
                .get_mut(id)
                .map(|s| &mut s.condition)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Title(id) => self
                .titles
                .get_mut(id)
                .map(|t| &mut t.condition)
                .ok_or(TransitionError::NotFound(*target)),
        }
    }

    fn deleted_at_mut(&mut self, target: &EntityRef) -> Result<&mut Option<Timestamp>, TransitionError> {
        match target {
            EntityRef::Wrestler(id) => self
                .wrestlers
                .get_mut(id)
                .map(|w| &mut w.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Manager(id) => self
                .managers
                .get_mut(id)
                .map(|m| &mut m.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Referee(id) => self
                .referees
                .get_mut(id)
                .map(|r| &mut r.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::TagTeam(id) => self
                .tag_teams
                .get_mut(id)
                .map(|t| &mut t.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Stable(id) => self
                .stables
                .get_mut(id)
                .map(|s| &mut s.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
            EntityRef::Title(id) => self
                .titles
                .get_mut(id)
                .map(|t| &mut t.deleted_at)
                .ok_or(TransitionError::NotFound(*target)),
        }
    }

    /// Whether a wrestler counts as active for bookability: a current
    /// member whose derived status is Employed.
    pub(crate) fn wrestler_is_active(&self, id: WrestlerId, at: Timestamp) -> bool {
        self.wrestlers
            .get(&id)
            .is_some_and(|w| !w.is_deleted() && roster_status(&w.condition, at) == RosterStatus::Employed)
    }
}

impl RosterRepository for InMemoryRoster {
    fn view(&self, target: &EntityRef) -> Result<EntityView, TransitionError> {
        let (name, deleted, condition) = match target {
            EntityRef::Wrestler(id) => self
                .wrestlers
                .get(id)
                .map(|w| (w.name.clone(), w.is_deleted(), w.condition.clone())),
            EntityRef::Manager(id) => self
                .managers
                .get(id)
                .map(|m| (m.name.clone(), m.is_deleted(), m.condition.clone())),
            EntityRef::Referee(id) => self
                .referees
                .get(id)
                .map(|r| (r.name.clone(), r.is_deleted(), r.condition.clone())),
            EntityRef::TagTeam(id) => self
                .tag_teams
                .get(id)
                .map(|t| (t.name.clone(), t.is_deleted(), t.condition.clone())),
            EntityRef::Stable(id) => self
                .stables
                .get(id)
                .map(|s| (s.name.clone(), s.is_deleted(), s.condition.clone())),
            EntityRef::Title(id) => self
                .titles
                .get(id)
                .map(|t| (t.name.clone(), t.is_deleted(), t.condition.clone())),
        }
        .ok_or(TransitionError::NotFound(*target))?;
        Ok(EntityView {
            entity: *target,
            name,
            deleted,
            condition,
        })
    }

    fn current_tag_team_of(&self, wrestler: WrestlerId) -> Option<TagTeamId> {
        self.tag_team_memberships
            .iter()
            .find(|m| m.wrestler == wrestler && m.stint.is_current())
            .map(|m| m.tag_team)
    }

    fn current_wrestlers_of(&self, tag_team: TagTeamId) -> Vec<WrestlerId> {
        self.tag_team_memberships
            .iter()
            .filter(|m| m.tag_team == tag_team && m.stint.is_current())
            .map(|m| m.wrestler)
            .collect()
    }

    fn current_stable_of(&self, member: StableMember) -> Option<StableId> {
        self.stable_memberships
            .iter()
            .find(|m| m.member == member && m.stint.is_current())
            .map(|m| m.stable)
    }

    fn current_stable_members(&self, stable: StableId) -> Vec<StableMember> {
        self.stable_memberships
            .iter()
            .filter(|m| m.stable == stable && m.stint.is_current())
            .map(|m| m.member)
            .collect()
    }

    fn current_managers_of(&self, client: Client) -> Vec<ManagerId> {
        self.managements
            .iter()
            .filter(|m| m.client == client && m.stint.is_current())
            .map(|m| m.manager)
            .collect()
    }

    fn current_clients_of(&self, manager: ManagerId) -> Vec<Client> {
        self.managements
            .iter()
            .filter(|m| m.manager == manager && m.stint.is_current())
            .map(|m| m.client)
            .collect()
    }

    fn apply(&mut self, mutation: &Mutation) -> Result<(), TransitionError> {
        match mutation {
            Mutation::OpenPeriod { target, dimension, at } => {
                self.condition_mut(target)?.open(*dimension, *at)?;
            }
            Mutation::ClosePeriod { target, dimension, at } => {
                self.condition_mut(target)?.close(*dimension, *at)?;
            }
            Mutation::ReschedulePeriod { target, dimension, at } => {
                self.condition_mut(target)?.reschedule(*dimension, *at)?;
            }
            Mutation::EndTagTeamMembership { wrestler, tag_team, at } => {
                let membership = self
                    .tag_team_memberships
                    .iter_mut()
                    .find(|m| m.wrestler == *wrestler && m.tag_team == *tag_team && m.stint.is_current())
                    .ok_or(MembershipError::NotCurrentMember {
                        member: wrestler.to_string(),
                        group: tag_team.to_string(),
                    })?;
                membership.stint.end(*at)?;
            }
            Mutation::EndStableMembership { member, stable, at } => {
                let membership = self
                    .stable_memberships
                    .iter_mut()
                    .find(|m| m.member == *member && m.stable == *stable && m.stint.is_current())
                    .ok_or(MembershipError::NotCurrentMember {
                        member: member.to_string(),
                        group: stable.to_string(),
                    })?;
                membership.stint.end(*at)?;
            }
            Mutation::EndManagement { client, manager, at } => {
                let management = self
                    .managements
                    .iter_mut()
                    .find(|m| m.client == *client && m.manager == *manager && m.stint.is_current())
                    .ok_or(MembershipError::NotCurrentMember {
                        member: manager.to_string(),
                        group: client.to_string(),
                    })?;
                management.stint.end(*at)?;
            }
            Mutation::SoftDelete { target, at } => {
                *self.deleted_at_mut(target)? = Some(*at);
            }
            Mutation::Restore { target } => {
                *self.deleted_at_mut(target)? = None;
            }
        }
        Ok(())
    }

    fn apply_all(&mut self, mutations: &[Mutation]) -> Result<(), TransitionError> {
        self.transactionally(|store| {
            for mutation in mutations {
                store.apply(mutation)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    #[test]
    fn test_form_tag_team_requires_exact_size() {
        let mut roster = InMemoryRoster::new();
        let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
        let err = roster.form_tag_team("The Rockets", &[a], ts(100)).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::Membership(MembershipError::NotEnoughMembers { .. })
        ));
    }

    #[test]
    fn test_wrestler_cannot_join_two_current_teams() {
        let mut roster = InMemoryRoster::new();
        let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
        let b = roster.add_wrestler(Wrestler::new("Dex Mori"));
        let c = roster.add_wrestler(Wrestler::new("Jo Halloway"));
        let d = roster.add_wrestler(Wrestler::new("Sam Drake"));
        roster.form_tag_team("The Rockets", &[a, b], ts(100)).unwrap();
        let err = roster
            .form_tag_team("Night Shift", &[a, c], ts(200))
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::Membership(MembershipError::Conflict { .. })
        ));
        // After the first team's stint ends, the wrestler is free again.
        let team = roster.current_tag_team_of(a).unwrap();
        roster
            .apply(&Mutation::EndTagTeamMembership {
                wrestler: a,
                tag_team: team,
                at: ts(300),
            })
            .unwrap();
        roster.form_tag_team("Night Shift", &[a, d], ts(400)).unwrap();
        assert!(roster.check_invariants().is_empty());
    }

    #[test]
    fn test_form_stable_weighs_tag_teams_double() {
        let mut roster = InMemoryRoster::new();
        let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
        let b = roster.add_wrestler(Wrestler::new("Dex Mori"));
        let m = roster.add_manager(Manager::new("Lou Fontaine"));
        let team = roster.form_tag_team("The Rockets", &[a, b], ts(100)).unwrap();

        // A tag team (2) plus a manager (1) meets the minimum of 3.
        roster
            .form_stable(
                "The Syndicate",
                &[StableMember::TagTeam(team), StableMember::Manager(m)],
                ts(200),
            )
            .unwrap();

        // A lone manager does not.
        let m2 = roster.add_manager(Manager::new("Vera Quinn"));
        let err = roster
            .form_stable("Short Stack", &[StableMember::Manager(m2)], ts(200))
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::Membership(MembershipError::NotEnoughMembers {
                required: STABLE_MIN_WEIGHT,
                ..
            })
        ));
    }

    #[test]
    fn test_apply_all_rolls_back_on_failure() {
        let mut roster = InMemoryRoster::new();
        let a = roster.add_wrestler(Wrestler::new("Axel Vane"));
        let mutations = [
            Mutation::OpenPeriod {
                target: a.into(),
                dimension: Dimension::Employment,
                at: ts(100),
            },
            // Fails: nothing open to close.
            Mutation::ClosePeriod {
                target: a.into(),
                dimension: Dimension::Suspension,
                at: ts(200),
            },
        ];
        assert!(roster.apply_all(&mutations).is_err());
        let wrestler = roster.wrestler(a).unwrap();
        assert!(wrestler
            .condition
            .history(Dimension::Employment)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_duplicate_management_rejected() {
        let mut roster = InMemoryRoster::new();
        let w = roster.add_wrestler(Wrestler::new("Axel Vane"));
        let m = roster.add_manager(Manager::new("Lou Fontaine"));
        roster.assign_manager(Client::Wrestler(w), m, ts(100)).unwrap();
        let err = roster
            .assign_manager(Client::Wrestler(w), m, ts(200))
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::Membership(MembershipError::Conflict { .. })
        ));
    }
}
