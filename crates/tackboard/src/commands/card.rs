use tracing::debug;

use super::helpers::reorder_by_ids;
use crate::id::{CardId, ListId};
use crate::model::{normalize_title, Board, Card, DEFAULT_CARD_TITLE};

/// Append a card to a list. Blank titles fall back to [`DEFAULT_CARD_TITLE`].
pub fn add(board: &Board, list_id: &ListId, title: &str) -> Board {
    let Some(pos) = board.list_position(list_id) else {
        debug!(%list_id, "add_card: unknown list");
        return board.clone();
    };
    let title = normalize_title(title).unwrap_or_else(|| DEFAULT_CARD_TITLE.to_string());
    let mut next = board.clone();
    let list = &mut next.lists[pos];
    let card = Card::new(list.id.clone(), title, list.cards.len());
    list.cards.push(card);
    next
}

pub fn update_title(board: &Board, card_id: &CardId, title: &str) -> Board {
    let Some(title) = normalize_title(title) else {
        debug!(%card_id, "update_card_title: blank title ignored");
        return board.clone();
    };
    let Some((li, ci)) = board.locate_card(card_id) else {
        debug!(%card_id, "update_card_title: unknown card");
        return board.clone();
    };
    let mut next = board.clone();
    next.lists[li].cards[ci].title = title;
    next
}

/// Remove a card from whichever list holds it and renumber that list.
pub fn delete(board: &Board, card_id: &CardId) -> Board {
    let Some((li, ci)) = board.locate_card(card_id) else {
        debug!(%card_id, "delete_card: unknown card");
        return board.clone();
    };
    let mut next = board.clone();
    let list = &mut next.lists[li];
    list.cards.remove(ci);
    list.renumber_cards();
    next
}

/// Re-sort one list's cards to match `card_ids`, then renumber it.
pub fn reorder_in_list(board: &Board, list_id: &ListId, card_ids: &[CardId]) -> Board {
    let Some(pos) = board.list_position(list_id) else {
        debug!(%list_id, "reorder_cards_in_list: unknown list");
        return board.clone();
    };
    let mut next = board.clone();
    let list = &mut next.lists[pos];
    reorder_by_ids(&mut list.cards, card_ids, |c| &c.id);
    list.renumber_cards();
    next
}
