use tracing::debug;

use crate::id::CardId;
use crate::model::{normalize_title, Board, Comment};

/// Append a comment to a card. Comments are never edited or removed on their
/// own; they go away with their card.
pub fn add(board: &Board, card_id: &CardId, text: &str) -> Board {
    let Some(text) = normalize_title(text) else {
        debug!(%card_id, "add_comment: blank text ignored");
        return board.clone();
    };
    let Some((li, ci)) = board.locate_card(card_id) else {
        debug!(%card_id, "add_comment: unknown card");
        return board.clone();
    };
    let mut next = board.clone();
    let card = &mut next.lists[li].cards[ci];
    card.comments.push(Comment::new(card.id.clone(), text));
    next
}
