//! Strategies and checks shared by the property suites.

use std::collections::HashSet;

use proptest::prelude::*;
use tackboard::id::{CardId, ListId};
use tackboard::{Board, BoardOp, DragEnd, DragSource, DropTarget};

/// A step whose ids are picked by position at apply time, so most steps hit
/// something that exists.
#[derive(Debug, Clone)]
pub enum Step {
    SetBoardTitle(String),
    AddList(String),
    RenameList(usize, String),
    DeleteList(usize),
    ClearList(usize),
    ReorderLists(Vec<usize>),
    AddCard(usize, String),
    RenameCard(usize, String),
    DeleteCard(usize),
    MoveCard(usize, usize, usize),
    ReorderCards(usize, Vec<usize>),
    AddComment(usize, String),
    DragList(usize, usize),
    DragCardOnCard(usize, usize),
    DragCardToList(usize, usize),
}

pub fn title() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z0-9 ]{0,11}",
        1 => "[ \t]{0,3}",
    ]
}

pub fn step() -> impl Strategy<Value = Step> {
    let pick = 0usize..8;
    prop_oneof![
        1 => title().prop_map(Step::SetBoardTitle),
        1 => title().prop_map(Step::AddList),
        1 => (pick.clone(), title()).prop_map(|(l, t)| Step::RenameList(l, t)),
        1 => pick.clone().prop_map(Step::DeleteList),
        1 => pick.clone().prop_map(Step::ClearList),
        1 => proptest::collection::vec(pick.clone(), 0..6).prop_map(Step::ReorderLists),
        3 => (pick.clone(), title()).prop_map(|(l, t)| Step::AddCard(l, t)),
        1 => (pick.clone(), title()).prop_map(|(c, t)| Step::RenameCard(c, t)),
        1 => pick.clone().prop_map(Step::DeleteCard),
        3 => (pick.clone(), pick.clone(), 0usize..12).prop_map(|(c, l, i)| Step::MoveCard(c, l, i)),
        1 => (pick.clone(), proptest::collection::vec(pick.clone(), 0..6))
            .prop_map(|(l, cs)| Step::ReorderCards(l, cs)),
        1 => (pick.clone(), title()).prop_map(|(c, t)| Step::AddComment(c, t)),
        1 => (pick.clone(), pick.clone()).prop_map(|(a, b)| Step::DragList(a, b)),
        2 => (pick.clone(), pick.clone()).prop_map(|(a, b)| Step::DragCardOnCard(a, b)),
        1 => (pick.clone(), pick).prop_map(|(c, l)| Step::DragCardToList(c, l)),
    ]
}

fn list_at(board: &Board, i: usize) -> ListId {
    if board.lists.is_empty() {
        return ListId::from("ghost-list");
    }
    board.lists[i % board.lists.len()].id.clone()
}

fn all_cards(board: &Board) -> Vec<(CardId, ListId)> {
    board
        .lists
        .iter()
        .flat_map(|l| l.cards.iter().map(move |c| (c.id.clone(), l.id.clone())))
        .collect()
}

fn card_at(board: &Board, i: usize) -> (CardId, ListId) {
    let cards = all_cards(board);
    if cards.is_empty() {
        return (CardId::from("ghost-card"), ListId::from("ghost-list"));
    }
    cards[i % cards.len()].clone()
}

/// Apply one step. Drags go through the gesture interpreter.
pub fn apply(board: &Board, step: &Step) -> Board {
    let op = match step {
        Step::SetBoardTitle(t) => BoardOp::SetBoardTitle { title: t.clone() },
        Step::AddList(t) => BoardOp::AddList { title: t.clone() },
        Step::RenameList(l, t) => BoardOp::UpdateListTitle {
            list_id: list_at(board, *l),
            title: t.clone(),
        },
        Step::DeleteList(l) => BoardOp::DeleteList {
            list_id: list_at(board, *l),
        },
        Step::ClearList(l) => BoardOp::ClearList {
            list_id: list_at(board, *l),
        },
        Step::ReorderLists(ls) => BoardOp::ReorderLists {
            list_ids: ls.iter().map(|l| list_at(board, *l)).collect(),
        },
        Step::AddCard(l, t) => BoardOp::AddCard {
            list_id: list_at(board, *l),
            title: t.clone(),
        },
        Step::RenameCard(c, t) => BoardOp::UpdateCardTitle {
            card_id: card_at(board, *c).0,
            title: t.clone(),
        },
        Step::DeleteCard(c) => BoardOp::DeleteCard {
            card_id: card_at(board, *c).0,
        },
        Step::MoveCard(c, l, i) => BoardOp::MoveCard {
            card_id: card_at(board, *c).0,
            target_list_id: list_at(board, *l),
            target_index: *i,
        },
        Step::ReorderCards(l, cs) => BoardOp::ReorderCardsInList {
            list_id: list_at(board, *l),
            card_ids: cs.iter().map(|c| card_at(board, *c).0).collect(),
        },
        Step::AddComment(c, t) => BoardOp::AddComment {
            card_id: card_at(board, *c).0,
            text: t.clone(),
        },
        Step::DragList(a, b) => {
            let drag = DragEnd::new(
                DragSource::List {
                    list_id: list_at(board, *a),
                },
                Some(DropTarget::OnList(list_at(board, *b))),
            );
            return tackboard::gesture::apply(board, &drag);
        }
        Step::DragCardOnCard(a, b) => {
            let (card_id, list_id) = card_at(board, *a);
            let drag = DragEnd::new(
                DragSource::Card { card_id, list_id },
                Some(DropTarget::OnCard(card_at(board, *b).0)),
            );
            return tackboard::gesture::apply(board, &drag);
        }
        Step::DragCardToList(c, l) => {
            let (card_id, list_id) = card_at(board, *c);
            let drag = DragEnd::new(
                DragSource::Card { card_id, list_id },
                Some(DropTarget::EmptyList(list_at(board, *l))),
            );
            return tackboard::gesture::apply(board, &drag);
        }
    };
    op.apply(board)
}

/// Every structural invariant a board must keep. Returns the first violation.
pub fn check_invariants(board: &Board) -> Result<(), String> {
    let mut list_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    let mut comment_ids = HashSet::new();

    if board.title.trim().is_empty() {
        return Err("blank board title".to_string());
    }
    for (li, list) in board.lists.iter().enumerate() {
        if !list_ids.insert(list.id.clone()) {
            return Err(format!("duplicate list id {}", list.id));
        }
        if list.board_id != board.id {
            return Err(format!("list {} points at board {}", list.id, list.board_id));
        }
        if list.order != li {
            return Err(format!("list {} has order {} at position {}", list.id, list.order, li));
        }
        if list.title.trim().is_empty() {
            return Err(format!("list {} has a blank title", list.id));
        }
        for (ci, card) in list.cards.iter().enumerate() {
            if !card_ids.insert(card.id.clone()) {
                return Err(format!("duplicate card id {}", card.id));
            }
            if card.list_id != list.id {
                return Err(format!("card {} points at list {} but lives in {}", card.id, card.list_id, list.id));
            }
            if card.order != ci {
                return Err(format!("card {} has order {} at position {}", card.id, card.order, ci));
            }
            if card.title.trim().is_empty() {
                return Err(format!("card {} has a blank title", card.id));
            }
            for comment in &card.comments {
                if !comment_ids.insert(comment.id.clone()) {
                    return Err(format!("duplicate comment id {}", comment.id));
                }
                if comment.card_id != card.id {
                    return Err(format!("comment {} points at card {}", comment.id, comment.card_id));
                }
            }
        }
    }
    if !board.integrity_issues().is_empty() {
        return Err(format!("integrity issues: {:?}", board.integrity_issues()));
    }
    Ok(())
}

pub fn card_count(board: &Board) -> usize {
    board.lists.iter().map(|l| l.cards.len()).sum()
}

pub fn comment_count(board: &Board) -> usize {
    board
        .lists
        .iter()
        .flat_map(|l| &l.cards)
        .map(|c| c.comments.len())
        .sum()
}
