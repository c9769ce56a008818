use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder token for a card the log has not revealed yet.
pub const HIDDEN_CARD: &str = "?";

/// Separator between card tokens in an encoded hand string.
pub const CARD_SEPARATOR: char = '-';

/// The four suit codes, as one alphabet string. Suit suffixes are
/// validated by substring containment against this, not letter by
/// letter.
pub const SUIT_CODES: &str = "SHCD";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Reads the leading rank of a card token. The rank is the first
    /// character, except for the two-character literal "10". Matching is
    /// case-insensitive; the suit suffix (if any) is ignored here.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.starts_with("10") {
            return Some(Rank::Ten);
        }
        match token.chars().next()?.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Fixed card value. Aces always count 11; a busted total is never
    /// re-evaluated with a low ace.
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("unrecognized card rank in token {0:?}")]
    MalformedCard(String),
}
