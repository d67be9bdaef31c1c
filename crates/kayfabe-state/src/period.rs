//! # Temporal Periods — Append-Only Status Bookkeeping
//!
//! A [`Period`] records when one status dimension was in effect for one
//! entity: a bounded interval `[started_at, ended_at)` or an open one
//! (`ended_at = None`). A [`PeriodHistory`] is the append-only log of
//! all periods for one (entity, dimension) pair.
//!
//! ## Invariants
//!
//! - `started_at <= ended_at` whenever `ended_at` is set.
//! - At most one open period per history.
//! - Periods in one history never overlap.
//! - Periods are closed, never deleted — history is append-only.
//!
//! Violations are rejected with a structured [`PeriodError`] before any
//! mutation happens. The history has no cascade or clock knowledge; the
//! executor decides *when* to open and close, this module decides
//! *whether* the bookkeeping is legal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kayfabe_core::{Dimension, EntityType, Timestamp};

/// A bounded-or-open interval for one status dimension.
///
/// The interval is half-open: a period closed at `t` is no longer in
/// effect at `t`, so a follow-up period may start at `t` without
/// overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// When the dimension took effect.
    pub started_at: Timestamp,
    /// When the dimension ceased, or `None` while still in effect.
    pub ended_at: Option<Timestamp>,
}

impl Period {
    /// Whether the period has no end yet.
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Whether the period is in effect at `at` (half-open interval).
    pub fn contains(&self, at: Timestamp) -> bool {
        self.started_at <= at && self.ended_at.map_or(true, |end| at < end)
    }
}

/// Errors raised by period bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// An open period already exists for this dimension.
    #[error("an open {dimension} period already exists")]
    AlreadyOpen {
        /// The dimension with the conflicting open period.
        dimension: Dimension,
    },

    /// No open period exists to close or reschedule.
    #[error("no open {dimension} period")]
    NoOpenPeriod {
        /// The dimension that has nothing open.
        dimension: Dimension,
    },

    /// The requested end precedes the period's start.
    #[error("{dimension} period cannot end at {end}: precedes start {start}")]
    EndsBeforeStart {
        /// The dimension being closed.
        dimension: Dimension,
        /// The open period's start.
        start: Timestamp,
        /// The rejected end.
        end: Timestamp,
    },

    /// The requested start would overlap an existing period.
    #[error("{dimension} period starting at {at} overlaps an existing period")]
    Overlap {
        /// The dimension being opened.
        dimension: Dimension,
        /// The rejected start.
        at: Timestamp,
    },

    /// The dimension is not tracked for this entity type.
    #[error("{dimension} is not tracked for {entity_type}")]
    UnsupportedDimension {
        /// The unsupported dimension.
        dimension: Dimension,
        /// The entity type that does not track it.
        entity_type: EntityType,
    },
}

/// The append-only period log for one (entity, dimension) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodHistory {
    dimension: Dimension,
    periods: Vec<Period>,
}

impl PeriodHistory {
    /// Create an empty history for a dimension.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            periods: Vec::new(),
        }
    }

    /// The dimension this history tracks.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Open a new period starting at `at`.
    ///
    /// # Errors
    ///
    /// - [`PeriodError::AlreadyOpen`] if an open period exists.
    /// - [`PeriodError::Overlap`] if `at` precedes the end of the latest
    ///   closed period.
    pub fn open(&mut self, at: Timestamp) -> Result<Period, PeriodError> {
        if self.current().is_some() {
            return Err(PeriodError::AlreadyOpen {
                dimension: self.dimension,
            });
        }
        if let Some(latest_end) = self.periods.last().and_then(|p| p.ended_at) {
            if at < latest_end {
                return Err(PeriodError::Overlap {
                    dimension: self.dimension,
                    at,
                });
            }
        }
        let period = Period {
            started_at: at,
            ended_at: None,
        };
        self.periods.push(period);
        Ok(period)
    }

    /// Close the open period at `at`.
    ///
    /// # Errors
    ///
    /// - [`PeriodError::NoOpenPeriod`] if nothing is open.
    /// - [`PeriodError::EndsBeforeStart`] if `at` precedes the open
    ///   period's start.
    pub fn close(&mut self, at: Timestamp) -> Result<Period, PeriodError> {
        let dimension = self.dimension;
        let open = self
            .periods
            .last_mut()
            .filter(|p| p.is_open())
            .ok_or(PeriodError::NoOpenPeriod { dimension })?;
        if at < open.started_at {
            return Err(PeriodError::EndsBeforeStart {
                dimension,
                start: open.started_at,
                end: at,
            });
        }
        open.ended_at = Some(at);
        Ok(*open)
    }

    /// Move the open period's start to `at`.
    ///
    /// Used when an effective date is revised before the period has any
    /// follow-up history, e.g. pulling a future-dated employment forward.
    ///
    /// # Errors
    ///
    /// - [`PeriodError::NoOpenPeriod`] if nothing is open.
    /// - [`PeriodError::Overlap`] if `at` precedes the end of the
    ///   previous closed period.
    pub fn reschedule_open(&mut self, at: Timestamp) -> Result<Period, PeriodError> {
        let dimension = self.dimension;
        if self.current().is_none() {
            return Err(PeriodError::NoOpenPeriod { dimension });
        }
        let prior_end = self.periods.iter().rev().nth(1).and_then(|p| p.ended_at);
        if let Some(end) = prior_end {
            if at < end {
                return Err(PeriodError::Overlap { dimension, at });
            }
        }
        let open = self
            .periods
            .last_mut()
            .ok_or(PeriodError::NoOpenPeriod { dimension })?;
        open.started_at = at;
        Ok(*open)
    }

    /// The open period, if any.
    pub fn current(&self) -> Option<&Period> {
        self.periods.last().filter(|p| p.is_open())
    }

    /// The most recent period, open or closed.
    pub fn latest(&self) -> Option<&Period> {
        self.periods.last()
    }

    /// Whether an open period exists that has started on or before `at`.
    pub fn is_open_at(&self, at: Timestamp) -> bool {
        self.current().is_some_and(|p| p.started_at <= at)
    }

    /// Whether any period — open or closed — is in effect at `at`.
    pub fn in_effect_at(&self, at: Timestamp) -> bool {
        self.periods.iter().any(|p| p.contains(at))
    }

    /// Whether an open period exists whose start is after `at`.
    pub fn has_future_start(&self, at: Timestamp) -> bool {
        self.current().is_some_and(|p| p.started_at > at)
    }

    /// Whether any period ended on or before `at`.
    pub fn ended_by(&self, at: Timestamp) -> bool {
        self.periods
            .iter()
            .any(|p| p.ended_at.is_some_and(|end| end <= at))
    }

    /// All periods, oldest first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of recorded periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the history has no periods at all.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Re-check every invariant over the stored periods.
    ///
    /// Histories built through [`open`](Self::open)/[`close`](Self::close)
    /// always satisfy the invariants; this exists for data loaded from
    /// external files.
    pub fn validate(&self) -> Result<(), PeriodError> {
        let mut previous_end: Option<Timestamp> = None;
        for (index, period) in self.periods.iter().enumerate() {
            if let Some(end) = period.ended_at {
                if end < period.started_at {
                    return Err(PeriodError::EndsBeforeStart {
                        dimension: self.dimension,
                        start: period.started_at,
                        end,
                    });
                }
            }
            if period.is_open() && index + 1 != self.periods.len() {
                return Err(PeriodError::AlreadyOpen {
                    dimension: self.dimension,
                });
            }
            if let Some(end) = previous_end {
                if period.started_at < end {
                    return Err(PeriodError::Overlap {
                        dimension: self.dimension,
                        at: period.started_at,
                    });
                }
            }
            previous_end = period.ended_at;
        }
        Ok(())
    }
}
