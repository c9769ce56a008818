use crate::{AuditError, Session, Turn};
use std::collections::HashMap;

/// First faulty turn of every session that has one, ordered by session
/// id. Sorts each session's turns by timestamp first; the input map
/// carries them in arrival order.
pub fn first_faulty_turns(
    sessions: &mut HashMap<i32, Session>,
) -> Result<Vec<Turn>, AuditError> {
    for session in sessions.values_mut() {
        session.sort_turns();
    }

    let mut ordered: Vec<&Session> = sessions.values().collect();
    ordered.sort_by_key(|session| session.session_id);

    let mut faulty = Vec::new();
    for session in ordered {
        if let Some(turn) = session.find_first_faulty_turn()? {
            faulty.push(turn.clone());
        }
    }
    Ok(faulty)
}

/// Report lines for every faulty session: the first faulty turn rendered
/// in log format, one line per session, nothing for clean sessions.
pub fn analyze_sessions(
    sessions: &mut HashMap<i32, Session>,
) -> Result<Vec<String>, AuditError> {
    let faulty = first_faulty_turns(sessions)?;
    Ok(faulty.iter().map(Turn::to_string).collect())
}
