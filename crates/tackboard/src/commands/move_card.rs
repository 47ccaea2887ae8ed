//! Relocating a card, within its list or across lists.
//!
//! The card is removed from its current list first, then inserted into the
//! target at `target_index` clamped to `0..=len` (measured after removal), so
//! an index past the end appends. A same-list move is the same remove-then-
//! insert on one sequence.
//!
//! Both the donor and the target list are renumbered.

use tracing::debug;

use crate::id::{CardId, ListId};
use crate::model::Board;

pub fn run(board: &Board, card_id: &CardId, target_list_id: &ListId, target_index: usize) -> Board {
    let Some(target_pos) = board.list_position(target_list_id) else {
        debug!(%card_id, %target_list_id, "move_card: unknown target list");
        return board.clone();
    };
    let Some((source_pos, card_pos)) = board.locate_card(card_id) else {
        debug!(%card_id, "move_card: unknown card");
        return board.clone();
    };

    let mut next = board.clone();

    let mut card = next.lists[source_pos].cards.remove(card_pos);
    next.lists[source_pos].renumber_cards();

    let target = &mut next.lists[target_pos];
    let index = target_index.min(target.cards.len());
    card.list_id = target.id.clone();
    target.cards.insert(index, card);
    target.renumber_cards();

    debug!(
        %card_id,
        from = %board.lists[source_pos].id,
        to = %target_list_id,
        index,
        "move_card"
    );
    next
}
