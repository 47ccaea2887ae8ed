//! # Gesture Interpreter
//!
//! Turns the end of a drag into at most one [`BoardOp`]. Drag start and
//! drag-over are presentation concerns and never reach this module.
//!
//! ## Resolution
//!
//! | Dragging | Released over | Result |
//! |----------|---------------|--------|
//! | list | another list | `ReorderLists`, dragged list takes the target's slot |
//! | card | empty space of list L | `MoveCard` to the end of L |
//! | card | card C in the same list | `ReorderCardsInList`, dragged card takes C's slot |
//! | card | card C in another list | `MoveCard` to C's index, C shifts down |
//! | anything | nothing, or an unknown id | no-op |
//!
//! A card released over a list header, or a list released over a card or
//! empty list space, is a no-op.
//!
//! The board is authoritative for where the dragged card lives; the list id
//! carried by the drag source is only a hint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::BoardOp;
use crate::id::{CardId, ListId};
use crate::model::Board;

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSource {
    List { list_id: ListId },
    Card { card_id: CardId, list_id: ListId },
}

/// What the pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// A list itself (its header or sortable handle).
    OnList(ListId),
    /// The empty area of a list, below its last card.
    EmptyList(ListId),
    /// An existing card.
    OnCard(CardId),
}

/// The terminal drag signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub source: DragSource,
    pub over: Option<DropTarget>,
}

impl DragEnd {
    pub fn new(source: DragSource, over: Option<DropTarget>) -> Self {
        Self { source, over }
    }
}

/// Decide which single mutation a drop means, if any.
pub fn resolve(board: &Board, drag: &DragEnd) -> Option<BoardOp> {
    let Some(over) = &drag.over else {
        debug!("drag abandoned: no drop target");
        return None;
    };

    let op = match &drag.source {
        DragSource::List { list_id } => resolve_list_drop(board, list_id, over),
        DragSource::Card { card_id, list_id } => resolve_card_drop(board, card_id, list_id, over),
    };
    debug!(source = ?drag.source, ?over, op = op.as_ref().map(BoardOp::name), "drag resolved");
    op
}

/// Resolve and apply in one step.
pub fn apply(board: &Board, drag: &DragEnd) -> Board {
    match resolve(board, drag) {
        Some(op) => op.apply(board),
        None => board.clone(),
    }
}

fn resolve_list_drop(board: &Board, dragged: &ListId, over: &DropTarget) -> Option<BoardOp> {
    let DropTarget::OnList(target) = over else {
        return None;
    };
    let from = board.list_position(dragged)?;
    let to = board.list_position(target)?;

    let mut list_ids = board.list_ids();
    let moved = list_ids.remove(from);
    list_ids.insert(to, moved);
    Some(BoardOp::ReorderLists { list_ids })
}

fn resolve_card_drop(
    board: &Board,
    card_id: &CardId,
    hinted_list: &ListId,
    over: &DropTarget,
) -> Option<BoardOp> {
    let (source_pos, from) = board.locate_card(card_id)?;
    let source = &board.lists[source_pos];
    if &source.id != hinted_list {
        debug!(%card_id, hinted = %hinted_list, actual = %source.id, "drag source list is stale");
    }

    match over {
        DropTarget::EmptyList(list_id) => {
            let target = board.find_list(list_id)?;
            Some(BoardOp::MoveCard {
                card_id: card_id.clone(),
                target_list_id: target.id.clone(),
                target_index: target.cards.len(),
            })
        }
        DropTarget::OnCard(over_card) => {
            let (target_pos, to) = board.locate_card(over_card)?;
            if target_pos == source_pos {
                let mut card_ids = source.card_ids();
                let moved = card_ids.remove(from);
                card_ids.insert(to, moved);
                Some(BoardOp::ReorderCardsInList {
                    list_id: source.id.clone(),
                    card_ids,
                })
            } else {
                Some(BoardOp::MoveCard {
                    card_id: card_id.clone(),
                    target_list_id: board.lists[target_pos].id.clone(),
                    target_index: to,
                })
            }
        }
        DropTarget::OnList(_) => None,
    }
}
