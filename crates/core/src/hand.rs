use crate::{CardError, Rank, CARD_SEPARATOR, HIDDEN_CARD};

/// Splits an encoded hand into card tokens. An empty string is an empty
/// hand, not a hand with one empty token. Trailing empty tokens are
/// kept, so a dangling separator ("5H-") surfaces downstream as a
/// malformed card rather than silently shrinking the hand.
pub fn split_hand(hand: &str) -> Vec<&str> {
    if hand.is_empty() {
        return Vec::new();
    }
    hand.split(CARD_SEPARATOR).collect()
}

/// Total value of an encoded hand. The hidden marker contributes 0 and is
/// exempt from any token validation. A token with an unrecognized rank is
/// a hard error, never a silent zero.
pub fn hand_total(hand: &str) -> Result<u32, CardError> {
    let mut total = 0;
    for token in split_hand(hand) {
        if token == HIDDEN_CARD {
            continue;
        }
        let rank = Rank::from_token(token)
            .ok_or_else(|| CardError::MalformedCard(token.to_string()))?;
        total += rank.value();
    }
    Ok(total)
}
