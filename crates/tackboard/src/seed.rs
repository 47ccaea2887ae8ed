//! First-run board.
//!
//! When nothing is persisted the app starts from a small demo board: three
//! lists (`To Do`, `In Progress`, `Done`) with seed cards in the first two.

use crate::id::BoardId;
use crate::model::{normalize_title, Board, Card, List, DEFAULT_BOARD_TITLE};

const SEED_LISTS: [(&str, &[&str]); 3] = [
    ("To Do", &["Task 1", "Task 2"]),
    ("In Progress", &["Task 3"]),
    ("Done", &[]),
];

/// The default board, titled [`DEFAULT_BOARD_TITLE`].
pub fn initial_board() -> Board {
    initial_board_titled(DEFAULT_BOARD_TITLE)
}

/// The default board with a custom title. Blank titles use the default.
pub fn initial_board_titled(title: &str) -> Board {
    let board_id = BoardId::generate();
    let lists = SEED_LISTS
        .iter()
        .enumerate()
        .map(|(order, (list_title, card_titles))| {
            let mut list = List::new(board_id.clone(), (*list_title).to_string(), order);
            list.cards = card_titles
                .iter()
                .enumerate()
                .map(|(i, t)| Card::new(list.id.clone(), (*t).to_string(), i))
                .collect();
            list
        })
        .collect();

    Board {
        id: board_id,
        title: normalize_title(title).unwrap_or_else(|| DEFAULT_BOARD_TITLE.to_string()),
        lists,
    }
}
