//! # Derived Status
//!
//! An entity's composite status is computed from its [`Condition`] at an
//! instant, never stored. One pure function per entity family keeps the
//! derivation in a single place the whole system shares — query layers,
//! guards, and adapters all project through it.
//!
//! ## Precedence
//!
//! Retirement > Suspension > Injury > employment-state. Exactly one
//! status holds at any instant; guards uphold the mutual-exclusion
//! invariant (suspension and injury never simultaneously in effect)
//! that makes the precedence unambiguous.

use serde::{Deserialize, Serialize};

use kayfabe_core::{Dimension, Timestamp};

use crate::condition::Condition;

/// Composite status of a roster member, tag team, or stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterStatus {
    /// Never employed.
    Unemployed,
    /// Employment exists but starts in the future.
    FutureEmployment,
    /// Under contract and able to perform.
    Employed,
    /// Barred from performing by the promotion.
    Suspended,
    /// Medically unable to perform.
    Injured,
    /// Withdrawn from performing.
    Retired,
    /// Previously employed, contract ended.
    Released,
}

impl RosterStatus {
    /// Whether the entity can be booked for a match at this status.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Employed)
    }
}

impl std::fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unemployed => "UNEMPLOYED",
            Self::FutureEmployment => "FUTURE_EMPLOYMENT",
            Self::Employed => "EMPLOYED",
            Self::Suspended => "SUSPENDED",
            Self::Injured => "INJURED",
            Self::Retired => "RETIRED",
            Self::Released => "RELEASED",
        };
        f.write_str(s)
    }
}

/// Composite status of a championship title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleStatus {
    /// Never introduced.
    Undebuted,
    /// Introduction is scheduled but has not happened yet.
    FutureDebut,
    /// In rotation for matches.
    Active,
    /// Pulled from rotation.
    Inactive,
    /// Withdrawn, no longer defended.
    Retired,
}

impl TitleStatus {
    /// Whether the title can currently be booked for a match.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for TitleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Undebuted => "UNDEBUTED",
            Self::FutureDebut => "FUTURE_DEBUT",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Retired => "RETIRED",
        };
        f.write_str(s)
    }
}

/// Derive the composite status of a roster member, tag team, or stable
/// at `at`.
pub fn roster_status(condition: &Condition, at: Timestamp) -> RosterStatus {
    if condition.in_effect_at(Dimension::Retirement, at) {
        return RosterStatus::Retired;
    }
    if condition.in_effect_at(Dimension::Suspension, at) {
        return RosterStatus::Suspended;
    }
    if condition.in_effect_at(Dimension::Injury, at) {
        return RosterStatus::Injured;
    }
    if condition.in_effect_at(Dimension::Employment, at) {
        return RosterStatus::Employed;
    }
    if condition.has_future_start(Dimension::Employment, at) {
        return RosterStatus::FutureEmployment;
    }
    if condition.ended_by(Dimension::Employment, at) {
        return RosterStatus::Released;
    }
    RosterStatus::Unemployed
}

/// Derive the composite status of a title at `at`.
pub fn title_status(condition: &Condition, at: Timestamp) -> TitleStatus {
    if condition.in_effect_at(Dimension::Retirement, at) {
        return TitleStatus::Retired;
    }
    if condition.in_effect_at(Dimension::Activity, at) {
        return TitleStatus::Active;
    }
    if condition.has_future_start(Dimension::Activity, at) {
        return TitleStatus::FutureDebut;
    }
    if condition.ended_by(Dimension::Activity, at) {
        return TitleStatus::Inactive;
    }
    TitleStatus::Undebuted
}
