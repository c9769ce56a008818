use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded game action. Unknown labels pass through as `Other` so
/// they still render back exactly as logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Join,
    Redeal,
    Hit,
    Stand,
    Win,
    Lose,
    Other(String),
}

impl Action {
    pub fn from_label(label: &str) -> Self {
        match label {
            "P Joined" => Action::Join,
            "D Redeal" => Action::Redeal,
            "P Hit" => Action::Hit,
            "P Stand" => Action::Stand,
            "P Win" => Action::Win,
            "P Lose" => Action::Lose,
            other => Action::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Action::Join => "P Joined",
            Action::Redeal => "D Redeal",
            Action::Hit => "P Hit",
            Action::Stand => "P Stand",
            Action::Win => "P Win",
            Action::Lose => "P Lose",
            Action::Other(label) => label,
        }
    }
}

/// One line of the game log. Immutable once constructed; legality is a
/// pure function of these fields and never looks at neighboring turns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub timestamp: i64,
    pub session_id: i32,
    pub player_id: i32,
    pub action: Action,
    pub dealer_hand: String,
    pub player_hand: String,
}

impl fmt::Display for Turn {
    /// Renders the six fields comma-joined in original log order. This is
    /// the report-line format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.timestamp,
            self.session_id,
            self.player_id,
            self.action.label(),
            self.dealer_hand,
            self.player_hand
        )
    }
}
