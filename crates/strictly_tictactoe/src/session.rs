//! Per-session game histories.
//!
//! Each session owns one [`GameHistory`]; sessions never share state. Every
//! operation takes the registry lock for the whole validate-and-replace
//! step, so concurrent calls against one session are applied one at a time
//! and a rejected move leaves the stored history exactly as it was.

use super::{GameHistory, MoveError, Status};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Error returned by [`SessionManager`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session has this id.
    #[display("Session {} not found", _0)]
    NotFound(#[error(not(source))] SessionId),

    /// A session with this id already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(#[error(not(source))] SessionId),

    /// The engine rejected the move or jump.
    #[display("{}", _0)]
    Move(MoveError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameHistory>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameHistory>> {
        // Every write replaces a whole history value, so a poisoned map is
        // still consistent.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Creates a new session holding a fresh game.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameHistory::new());
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Applies a move to the session's history and stores the result.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: &str, cell: usize) -> Result<Status, SessionError> {
        self.update(id, |history| history.apply_move(cell))
    }

    /// Moves the session's history cursor.
    #[instrument(skip(self))]
    pub fn jump_to(&self, id: &str, target: usize) -> Result<Status, SessionError> {
        self.update(id, |history| history.jump_to(target))
    }

    /// Replaces the session's history with a new game.
    #[instrument(skip(self))]
    pub fn restart(&self, id: &str) -> Result<Status, SessionError> {
        self.update(id, |_| Ok(GameHistory::new()))
    }

    /// Status of the session's current position.
    #[instrument(skip(self))]
    pub fn status(&self, id: &str) -> Result<Status, SessionError> {
        self.history(id).map(|history| history.status())
    }

    /// Returns a copy of the session's history.
    #[instrument(skip(self))]
    pub fn history(&self, id: &str) -> Result<GameHistory, SessionError> {
        self.lock().get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }

    /// Removes a session, returning its final history.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameHistory, SessionError> {
        let removed = self.lock().remove(id);
        match removed {
            Some(history) => {
                info!(session_id = id, "Removed session");
                Ok(history)
            }
            None => Err(SessionError::NotFound(id.to_string())),
        }
    }

    /// Lists all active session ids in sorted order.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    fn update<F>(&self, id: &str, transition: F) -> Result<Status, SessionError>
    where
        F: FnOnce(&GameHistory) -> Result<GameHistory, MoveError>,
    {
        let mut sessions = self.lock();
        let current = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let next = transition(&*current).map_err(|e| {
            warn!(session_id = id, error = %e, "Rejected");
            e
        })?;

        let status = next.status();
        *current = next;
        debug!(session_id = id, %status, "Session updated");
        Ok(status)
    }
}
