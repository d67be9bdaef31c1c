//! # Application State
//!
//! Shared state for the Axum application: the in-memory roster behind a
//! lock and the booker that drives it. The engine is synchronous and a
//! transition is short, so a plain mutex around the store is the whole
//! concurrency story — one `handle()` call holds the lock for its full
//! guard-then-mutate sequence, which is exactly the serialization the
//! engine requires of its callers.

use std::sync::{Arc, Mutex, MutexGuard};

use kayfabe_booking::{Booker, InMemoryRoster, SystemClock};

use crate::error::AppError;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<Mutex<InMemoryRoster>>,
    booker: Arc<Booker<SystemClock>>,
}

impl AppState {
    /// State over an empty roster and the system clock.
    pub fn new() -> Self {
        Self::with_roster(InMemoryRoster::new())
    }

    /// State over a pre-seeded roster.
    pub fn with_roster(roster: InMemoryRoster) -> Self {
        Self {
            roster: Arc::new(Mutex::new(roster)),
            booker: Arc::new(Booker::new(SystemClock)),
        }
    }

    /// Lock the roster for one request.
    pub fn roster(&self) -> Result<MutexGuard<'_, InMemoryRoster>, AppError> {
        self.roster
            .lock()
            .map_err(|_| AppError::Internal("roster lock poisoned".to_string()))
    }

    /// The booker.
    pub fn booker(&self) -> &Booker<SystemClock> {
        &self.booker
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
