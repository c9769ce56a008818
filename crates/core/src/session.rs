use crate::{is_legal, CardError, Turn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A malformed card made a turn unjudgeable. Carries enough context to
/// point at the offending turn in the source log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("session {session_id}, turn at {timestamp}: {source}")]
pub struct AuditError {
    pub session_id: i32,
    pub timestamp: i64,
    #[source]
    pub source: CardError,
}

/// All recorded turns of one game, keyed by session id. Built
/// incrementally while the log is read; turns arrive unordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub session_id: i32,
    pub turns: Vec<Turn>,
}

impl Session {
    pub fn new(session_id: i32) -> Self {
        Self {
            session_id,
            turns: Vec::new(),
        }
    }

    pub fn add_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Orders turns by timestamp. The sort is stable, so ties keep their
    /// arrival order.
    pub fn sort_turns(&mut self) {
        self.turns.sort_by_key(|turn| turn.timestamp);
    }

    /// First turn that fails the legality check, scanning in stored
    /// order. The caller is expected to have sorted by timestamp first.
    pub fn find_first_faulty_turn(&self) -> Result<Option<&Turn>, AuditError> {
        for turn in &self.turns {
            let legal = is_legal(turn).map_err(|source| AuditError {
                session_id: self.session_id,
                timestamp: turn.timestamp,
                source,
            })?;
            if !legal {
                return Ok(Some(turn));
            }
        }
        Ok(None)
    }
}
