use crate::{hand_total, split_hand, Action, CardError, Turn, HIDDEN_CARD, SUIT_CODES};

/// A hand strictly above this total is bust.
pub const BUST_THRESHOLD: u32 = 21;

/// The dealer must keep hitting strictly below this total.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// Whether a recorded turn is consistent with the rules, judged from its
/// own fields only.
///
/// The checks form a decision list; the first one that fires decides the
/// verdict. The order is part of the contract: bust (rule 2) and
/// dealer-stand resolution (rule 3) overlap when the dealer busts at 17+,
/// and the bust rule must win.
pub fn is_legal(turn: &Turn) -> Result<bool, CardError> {
    let dealer_cards = split_hand(&turn.dealer_hand);
    let player_cards = split_hand(&turn.player_hand);

    // Rule 1: a game-start action is judged purely on the deal's shape.
    if matches!(turn.action, Action::Join | Action::Redeal) {
        return Ok(is_game_start_correct(&dealer_cards, &player_cards));
    }

    let dealer_total = hand_total(&turn.dealer_hand)?;
    let player_total = hand_total(&turn.player_hand)?;

    // Rule 2: one side is bust but the action is not the matching result.
    if is_unexplained_bust(dealer_total, player_total, &turn.action) {
        return Ok(false);
    }
    // Rule 3: dealer has stood, so the outcome is decided, but the action
    // does not record it.
    if is_unexplained_result(dealer_total, player_total, &turn.action) {
        return Ok(false);
    }
    // Rule 4: a player at 20 or 21 recorded as still hitting.
    if player_total >= BUST_THRESHOLD - 1 && turn.action == Action::Hit {
        return Ok(false);
    }
    // Rule 5: a result recorded while the dealer was still obliged to hit.
    if dealer_total < DEALER_STAND_THRESHOLD
        && matches!(turn.action, Action::Win | Action::Lose)
    {
        return Ok(false);
    }
    // Rule 6: the newest card of either hand already shows in the other.
    if is_last_card_duplicate(turn, &dealer_cards, &player_cards) {
        return Ok(false);
    }
    Ok(true)
}

/// Shape check for a fresh deal: two cards each, the dealer's hole card
/// (second, and only the second) hidden, and the token shape of the three
/// visible start slots valid. Only those three slots are length-checked,
/// which also rejects a suited "10" there.
fn is_game_start_correct(dealer_cards: &[&str], player_cards: &[&str]) -> bool {
    if dealer_cards.len() != 2 || player_cards.len() != 2 {
        return false;
    }
    if dealer_cards[0] == HIDDEN_CARD || dealer_cards[1] != HIDDEN_CARD {
        return false;
    }
    let checked = [dealer_cards[1], player_cards[0], player_cards[1]];
    if checked.iter().any(|card| card.len() == 3) {
        return false;
    }
    checked.iter().all(|card| has_valid_suit(card))
}

/// Everything after the rank character, uppercased, must appear inside
/// the suit alphabet as one contiguous substring, so shuffled suit
/// letters ("SDH") fail while a run of the alphabet would not. A bare
/// rank (or the hidden marker) has an empty suffix and passes vacuously.
fn has_valid_suit(token: &str) -> bool {
    match token.get(1..) {
        Some(suffix) => SUIT_CODES.contains(&suffix.to_ascii_uppercase()),
        None => false,
    }
}

fn is_unexplained_bust(dealer_total: u32, player_total: u32, action: &Action) -> bool {
    (dealer_total > BUST_THRESHOLD && player_total <= BUST_THRESHOLD && *action != Action::Win)
        || (dealer_total <= BUST_THRESHOLD
            && player_total > BUST_THRESHOLD
            && *action != Action::Lose)
}

fn is_unexplained_result(dealer_total: u32, player_total: u32, action: &Action) -> bool {
    dealer_total >= DEALER_STAND_THRESHOLD
        && ((dealer_total <= player_total && *action != Action::Win)
            || (dealer_total > player_total && *action != Action::Lose))
}

/// Coarse duplicate test over a single 52-card deck: the last token of
/// each hand, uppercased, must not appear as a substring of the other
/// hand's full encoding. Deliberately not a per-token equality check; the
/// substring semantics (false positives included) are part of the
/// contract.
fn is_last_card_duplicate(turn: &Turn, dealer_cards: &[&str], player_cards: &[&str]) -> bool {
    let (Some(dealer_last), Some(player_last)) = (dealer_cards.last(), player_cards.last())
    else {
        return false;
    };
    turn.player_hand
        .to_ascii_uppercase()
        .contains(&dealer_last.to_ascii_uppercase())
        || turn
            .dealer_hand
            .to_ascii_uppercase()
            .contains(&player_last.to_ascii_uppercase())
}
