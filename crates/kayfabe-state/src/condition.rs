//! # Condition — Per-Entity Status Aggregate
//!
//! A [`Condition`] owns one [`PeriodHistory`] per dimension its entity
//! type tracks, and answers the questions guards and status derivation
//! ask: is a dimension in effect at an instant, is there a future-dated
//! open period, has the entity ever held the dimension.
//!
//! The composite status is *derived* from this aggregate (see
//! [`crate::status`]), never stored — there is exactly one place the
//! state machine's truth lives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kayfabe_core::{Dimension, EntityType, Timestamp};

use crate::period::{Period, PeriodError, PeriodHistory};

/// The full period bookkeeping for one entity across its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    entity_type: EntityType,
    histories: BTreeMap<Dimension, PeriodHistory>,
}

impl Condition {
    /// Create an empty condition seeded with the dimensions the entity
    /// type tracks.
    pub fn for_entity(entity_type: EntityType) -> Self {
        let histories = entity_type
            .supported_dimensions()
            .iter()
            .map(|dim| (*dim, PeriodHistory::new(*dim)))
            .collect();
        Self {
            entity_type,
            histories,
        }
    }

    /// The entity type this condition belongs to.
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// The history for a dimension, if the entity type tracks it.
    pub fn history(&self, dimension: Dimension) -> Option<&PeriodHistory> {
        self.histories.get(&dimension)
    }

    fn history_mut(&mut self, dimension: Dimension) -> Result<&mut PeriodHistory, PeriodError> {
        let entity_type = self.entity_type;
        self.histories
            .get_mut(&dimension)
            .ok_or(PeriodError::UnsupportedDimension {
                dimension,
                entity_type,
            })
    }

    /// Open a period for `dimension` at `at`.
    pub fn open(&mut self, dimension: Dimension, at: Timestamp) -> Result<Period, PeriodError> {
        self.history_mut(dimension)?.open(at)
    }

    /// Close the open period for `dimension` at `at`.
    pub fn close(&mut self, dimension: Dimension, at: Timestamp) -> Result<Period, PeriodError> {
        self.history_mut(dimension)?.close(at)
    }

    /// Move the open period's start for `dimension` to `at`.
    pub fn reschedule(
        &mut self,
        dimension: Dimension,
        at: Timestamp,
    ) -> Result<Period, PeriodError> {
        self.history_mut(dimension)?.reschedule_open(at)
    }

    /// Whether any period for `dimension` is in effect at `at`.
    ///
    /// Untracked dimensions are never in effect.
    pub fn in_effect_at(&self, dimension: Dimension, at: Timestamp) -> bool {
        self.history(dimension)
            .is_some_and(|h| h.in_effect_at(at))
    }

    /// Whether `dimension` has an open period that started on or before `at`.
    pub fn is_open_at(&self, dimension: Dimension, at: Timestamp) -> bool {
        self.history(dimension).is_some_and(|h| h.is_open_at(at))
    }

    /// Whether `dimension` has an open period starting after `at`.
    pub fn has_future_start(&self, dimension: Dimension, at: Timestamp) -> bool {
        self.history(dimension)
            .is_some_and(|h| h.has_future_start(at))
    }

    /// Whether `dimension` has an open period at all.
    pub fn has_open(&self, dimension: Dimension) -> bool {
        self.history(dimension)
            .is_some_and(|h| h.current().is_some())
    }

    /// Whether any period for `dimension` ended on or before `at`.
    pub fn ended_by(&self, dimension: Dimension, at: Timestamp) -> bool {
        self.history(dimension).is_some_and(|h| h.ended_by(at))
    }

    /// Whether the entity ever held `dimension`.
    pub fn ever_had(&self, dimension: Dimension) -> bool {
        self.history(dimension).is_some_and(|h| !h.is_empty())
    }

    /// Re-check every invariant over every history.
    pub fn validate(&self) -> Result<(), PeriodError> {
        for history in self.histories.values() {
            history.validate()?;
        }
        Ok(())
    }
}
