//! Search orchestration with an explicit state machine
//!
//! A session moves `Idle -> Searching -> Success | Failed` for every search.
//! Starting a new search supersedes any search still in flight: only the most
//! recently started search may replace the session's result set or error.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::core::client::RoutesClient;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::metrics::NormalizedRoute;
use crate::core::query::SearchQuery;

/// Where a session is in its search lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Success,
    Failed(ErrorKind),
}

#[derive(Debug, Default)]
struct SessionState {
    phase: SearchPhase,
    /// Ticket of the most recently started search
    generation: u64,
    routes: Vec<NormalizedRoute>,
    last_error: Option<Error>,
}

impl SessionState {
    /// Back to `Idle`; the result set is kept
    fn reset(&mut self) {
        self.phase = SearchPhase::Idle;
        self.last_error = None;
    }
}

/// Marks one in-flight search
///
/// A ticket dropped without being completed belongs to a cancelled search.
/// If that search is still the newest one, the session returns to `Idle`.
struct SearchTicket<'a> {
    session: &'a SearchSession,
    id: u64,
    completed: bool,
}

impl Drop for SearchTicket<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let mut state = self.session.lock();
        if state.generation == self.id && state.phase == SearchPhase::Searching {
            debug!("Search #{} was cancelled", self.id);
            state.reset();
        }
    }
}

/// Owns the current result set and error of a search UI
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    client: RoutesClient,
    state: Arc<Mutex<SessionState>>,
}

impl SearchSession {
    pub fn new(client: RoutesClient) -> Self {
        Self {
            client,
            state: Arc::default(),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.lock().phase
    }

    pub fn is_searching(&self) -> bool {
        self.phase() == SearchPhase::Searching
    }

    /// Routes of the last successful search that was not superseded
    pub fn routes(&self) -> Vec<NormalizedRoute> {
        self.lock().routes.clone()
    }

    /// Error of the last failed search, cleared when a new search starts
    pub fn last_error(&self) -> Option<Error> {
        self.lock().last_error.clone()
    }

    /// Search for scenic routes between `start` and `end`
    ///
    /// The outcome is always returned to the caller. It is recorded in the
    /// session only if no newer search was started in the meantime; a failure
    /// leaves the previous result set in place. Dropping the returned future
    /// before it resolves puts the session back to `Idle`.
    pub async fn search(&self, start: &str, end: &str) -> Result<Vec<NormalizedRoute>> {
        let ticket = self.begin();
        let outcome = self.client.search(&SearchQuery::new(start, end)).await;
        self.complete(ticket, &outcome);
        outcome
    }

    fn begin(&self) -> SearchTicket<'_> {
        let mut state = self.lock();
        if state.phase == SearchPhase::Searching {
            debug!("Superseding search #{}", state.generation);
        }
        state.reset();
        state.generation += 1;
        state.phase = SearchPhase::Searching;
        SearchTicket {
            session: self,
            id: state.generation,
            completed: false,
        }
    }

    fn complete(&self, mut ticket: SearchTicket<'_>, outcome: &Result<Vec<NormalizedRoute>>) {
        ticket.completed = true;
        let id = ticket.id;
        let mut state = self.lock();
        if id != state.generation {
            debug!(
                "Discarding outcome of search #{id}, search #{} is newer",
                state.generation
            );
            return;
        }

        match outcome {
            Ok(routes) => {
                state.routes = routes.clone();
                state.phase = SearchPhase::Success;
            }
            Err(e) => {
                warn!("Search #{id} failed ({}): {e}", e.kind());
                state.phase = SearchPhase::Failed(e.kind());
                state.last_error = Some(e.clone());
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
