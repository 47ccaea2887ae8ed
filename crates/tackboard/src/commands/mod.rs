//! # Mutation Engine
//!
//! Every command is a pure function from the current [`Board`] (plus
//! parameters) to the next one. Commands never fail and never touch I/O:
//! unknown ids, blank titles and out-of-range indexes are absorbed by
//! returning an unchanged copy or by clamping.
//!
//! ## Modules
//!
//! - [`board`]: board title
//! - [`list`]: add, rename, delete, clear and reorder lists
//! - [`card`]: add, rename, delete cards and reorder them inside a list
//! - [`move_card`]: relocate a card within or across lists
//! - [`comment`]: append comments
//!
//! ## Order Bookkeeping
//!
//! Any command that changes a list's card sequence renumbers `Card.order` for
//! that list. Commands that change the list sequence renumber `List.order`.
//! Lists the command did not touch keep their values.
//!
//! ## BoardOp
//!
//! [`BoardOp`] names one command call as a value. The gesture interpreter
//! produces one, and the API applies them through
//! [`BoardOp::apply`].

use serde::{Deserialize, Serialize};

use crate::id::{CardId, ListId};
use crate::model::Board;

pub mod board;
pub mod card;
pub mod comment;
pub mod helpers;
pub mod list;
pub mod move_card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardOp {
    SetBoardTitle {
        title: String,
    },
    AddList {
        title: String,
    },
    UpdateListTitle {
        list_id: ListId,
        title: String,
    },
    DeleteList {
        list_id: ListId,
    },
    ClearList {
        list_id: ListId,
    },
    ReorderLists {
        list_ids: Vec<ListId>,
    },
    AddCard {
        list_id: ListId,
        title: String,
    },
    UpdateCardTitle {
        card_id: CardId,
        title: String,
    },
    DeleteCard {
        card_id: CardId,
    },
    MoveCard {
        card_id: CardId,
        target_list_id: ListId,
        target_index: usize,
    },
    ReorderCardsInList {
        list_id: ListId,
        card_ids: Vec<CardId>,
    },
    AddComment {
        card_id: CardId,
        text: String,
    },
}

impl BoardOp {
    pub fn apply(&self, current: &Board) -> Board {
        match self {
            Self::SetBoardTitle { title } => board::set_title(current, title),
            Self::AddList { title } => list::add(current, title),
            Self::UpdateListTitle { list_id, title } => list::update_title(current, list_id, title),
            Self::DeleteList { list_id } => list::delete(current, list_id),
            Self::ClearList { list_id } => list::clear(current, list_id),
            Self::ReorderLists { list_ids } => list::reorder(current, list_ids),
            Self::AddCard { list_id, title } => card::add(current, list_id, title),
            Self::UpdateCardTitle { card_id, title } => {
                card::update_title(current, card_id, title)
            }
            Self::DeleteCard { card_id } => card::delete(current, card_id),
            Self::MoveCard {
                card_id,
                target_list_id,
                target_index,
            } => move_card::run(current, card_id, target_list_id, *target_index),
            Self::ReorderCardsInList { list_id, card_ids } => {
                card::reorder_in_list(current, list_id, card_ids)
            }
            Self::AddComment { card_id, text } => comment::add(current, card_id, text),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBoardTitle { .. } => "set_board_title",
            Self::AddList { .. } => "add_list",
            Self::UpdateListTitle { .. } => "update_list_title",
            Self::DeleteList { .. } => "delete_list",
            Self::ClearList { .. } => "clear_list",
            Self::ReorderLists { .. } => "reorder_lists",
            Self::AddCard { .. } => "add_card",
            Self::UpdateCardTitle { .. } => "update_card_title",
            Self::DeleteCard { .. } => "delete_card",
            Self::MoveCard { .. } => "move_card",
            Self::ReorderCardsInList { .. } => "reorder_cards_in_list",
            Self::AddComment { .. } => "add_comment",
        }
    }
}
