use anyhow::Context;
use pitboss_core::{Action, Session, Turn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn read_sessions(path: &Path) -> anyhow::Result<HashMap<i32, Session>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(parse_sessions(&raw))
}

/// Groups the log's turns by session id, in arrival order. Lines that do
/// not survive [`parse_turn`] are dropped here, before the core ever sees
/// them.
pub fn parse_sessions(raw: &str) -> HashMap<i32, Session> {
    let mut sessions: HashMap<i32, Session> = HashMap::new();
    for line in raw.lines() {
        let Some(turn) = parse_turn(line) else {
            continue;
        };
        sessions
            .entry(turn.session_id)
            .or_insert_with(|| Session::new(turn.session_id))
            .add_turn(turn);
    }
    sessions
}

/// One log line into a turn. Returns `None` for lines with a field count
/// other than six, a blank timestamp, or a numeric field that does not
/// parse; such lines are skipped rather than failing the run.
pub fn parse_turn(line: &str) -> Option<Turn> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 || fields[0].trim().is_empty() {
        return None;
    }
    Some(Turn {
        timestamp: fields[0].parse().ok()?,
        session_id: fields[1].parse().ok()?,
        player_id: fields[2].parse().ok()?,
        action: Action::from_label(fields[3]),
        dealer_hand: fields[4].to_string(),
        player_hand: fields[5].to_string(),
    })
}
