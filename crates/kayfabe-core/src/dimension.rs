//! # Status Dimension — Single Source of Truth
//!
//! Defines the `Dimension` enum with the five status axes tracked for
//! roster entities. This is the ONE definition used across the engine.
//! Every `match` on `Dimension` must be exhaustive — adding a new axis
//! forces every consumer to handle it at compile time.
//!
//! Each entity type supports a fixed subset of dimensions: a referee can
//! be injured, a tag team cannot; a title debuts and is pulled instead of
//! being employed and released. The subsets live here, next to the enum,
//! so guards and stores consult one table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::KayfabeError;
use crate::identity::EntityType;

/// One axis of an entity's status, tracked as a history of periods.
///
/// An entity's composite status at an instant is derived from which
/// dimensions have a period in effect, with precedence
/// Retirement > Suspension > Injury > employment-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Under contract and on the active payroll.
    Employment,
    /// Medically unable to perform.
    Injury,
    /// Barred from performing by the promotion.
    Suspension,
    /// Withdrawn from performing, reversible.
    Retirement,
    /// In rotation for matches (titles only).
    Activity,
}

/// Total number of status dimensions.
pub const DIMENSION_COUNT: usize = 5;

impl Dimension {
    /// All dimensions, in canonical order.
    pub fn all() -> &'static [Dimension] {
        &[
            Self::Employment,
            Self::Injury,
            Self::Suspension,
            Self::Retirement,
            Self::Activity,
        ]
    }

    /// The canonical snake_case name of this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::Injury => "injury",
            Self::Suspension => "suspension",
            Self::Retirement => "retirement",
            Self::Activity => "activity",
        }
    }

    /// Whether this dimension is tracked for the given entity type.
    pub fn applies_to(&self, entity_type: EntityType) -> bool {
        entity_type.supported_dimensions().contains(self)
    }
}

impl EntityType {
    /// The fixed subset of dimensions tracked for this entity type.
    pub fn supported_dimensions(&self) -> &'static [Dimension] {
        match self {
            Self::Wrestler | Self::Manager | Self::Referee => &[
                Dimension::Employment,
                Dimension::Injury,
                Dimension::Suspension,
                Dimension::Retirement,
            ],
            Self::TagTeam | Self::Stable => &[
                Dimension::Employment,
                Dimension::Suspension,
                Dimension::Retirement,
            ],
            Self::Title => &[Dimension::Activity, Dimension::Retirement],
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = KayfabeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employment" => Ok(Self::Employment),
            "injury" => Ok(Self::Injury),
            "suspension" => Ok(Self::Suspension),
            "retirement" => Ok(Self::Retirement),
            "activity" => Ok(Self::Activity),
            other => Err(KayfabeError::Serialization(format!(
                "unknown dimension: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_count() {
        assert_eq!(Dimension::all().len(), DIMENSION_COUNT);
    }

    #[test]
    fn test_roster_members_share_subset() {
        for kind in [EntityType::Wrestler, EntityType::Manager, EntityType::Referee] {
            assert!(Dimension::Employment.applies_to(kind));
            assert!(Dimension::Injury.applies_to(kind));
            assert!(Dimension::Suspension.applies_to(kind));
            assert!(Dimension::Retirement.applies_to(kind));
            assert!(!Dimension::Activity.applies_to(kind));
        }
    }

    #[test]
    fn test_groups_cannot_be_injured() {
        assert!(!Dimension::Injury.applies_to(EntityType::TagTeam));
        assert!(!Dimension::Injury.applies_to(EntityType::Stable));
    }

    #[test]
    fn test_titles_track_activity_and_retirement_only() {
        assert_eq!(
            EntityType::Title.supported_dimensions(),
            &[Dimension::Activity, Dimension::Retirement]
        );
    }

    #[test]
    fn test_from_str_roundtrip() {
        for dim in Dimension::all() {
            assert_eq!(dim.as_str().parse::<Dimension>().unwrap(), *dim);
        }
        assert!("bookability".parse::<Dimension>().is_err());
    }
}
