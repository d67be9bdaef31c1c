//! # Domain Events
//!
//! Every successful transition — primary or cascaded — yields one
//! [`TransitionEvent`]. The booker returns the events instead of
//! publishing them itself: the caller forwards them to an [`EventSink`]
//! **after** the transaction commits, so subscribers never observe a
//! transition that was rolled back.

use serde::{Deserialize, Serialize};

use kayfabe_core::{EntityRef, Timestamp};

use crate::request::TransitionKind;

/// A successfully applied transition, named for subscribers
/// (`WrestlerRetired`, `ManagerEmployed`, `TitleDebuted`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// The entity that transitioned.
    pub entity: EntityRef,
    /// The entity's name at the time of the transition.
    pub entity_name: String,
    /// The transition that was applied.
    pub kind: TransitionKind,
    /// The effective date of the transition.
    pub effective_at: Timestamp,
}

impl TransitionEvent {
    /// The canonical event name, e.g. `WrestlerRetired`.
    pub fn name(&self) -> String {
        format!(
            "{}{}",
            self.entity.entity_type().event_prefix(),
            self.kind.past_tense()
        )
    }
}

impl std::fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} at {})",
            self.name(),
            self.entity_name,
            self.effective_at
        )
    }
}

/// Receiver for post-commit domain events.
pub trait EventSink {
    /// Receive one event. Called only after the transition committed.
    fn publish(&mut self, event: &TransitionEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: &TransitionEvent) {}
}

/// Buffers events in memory, mostly for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    /// Events received so far, oldest first.
    pub events: Vec<TransitionEvent>,
}

impl EventSink for BufferSink {
    fn publish(&mut self, event: &TransitionEvent) {
        self.events.push(event.clone());
    }
}
