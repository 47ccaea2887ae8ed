use crate::id::BoardId;
use crate::model::{Board, Card, List};

/// Build a board whose list and card ids equal their titles.
///
/// `board_with(&[("A", &["a1", "a2"]), ("B", &[])])` gives list `A` holding
/// cards `a1`, `a2` and an empty list `B`. Orders match positions.
pub fn board_with(lists: &[(&str, &[&str])]) -> Board {
    let board_id = BoardId::from("board");
    let lists = lists
        .iter()
        .enumerate()
        .map(|(li, (list_name, cards))| List {
            id: (*list_name).into(),
            board_id: board_id.clone(),
            title: (*list_name).to_string(),
            order: li,
            cards: cards
                .iter()
                .enumerate()
                .map(|(ci, card_name)| Card {
                    id: (*card_name).into(),
                    list_id: (*list_name).into(),
                    title: (*card_name).to_string(),
                    comments: Vec::new(),
                    order: ci,
                })
                .collect(),
        })
        .collect();

    Board {
        id: board_id,
        title: "Test Board".to_string(),
        lists,
    }
}

pub fn list_ids_of(board: &Board) -> Vec<String> {
    board.lists.iter().map(|l| l.id.to_string()).collect()
}

pub fn card_ids_in(board: &Board, list_id: &str) -> Vec<String> {
    board
        .find_list(&list_id.into())
        .map(|l| l.cards.iter().map(|c| c.id.to_string()).collect())
        .unwrap_or_default()
}

pub fn orders_in(board: &Board, list_id: &str) -> Vec<usize> {
    board
        .find_list(&list_id.into())
        .map(|l| l.cards.iter().map(|c| c.order).collect())
        .unwrap_or_default()
}
