use tracing::debug;

use crate::model::{normalize_title, Board};

pub fn set_title(board: &Board, title: &str) -> Board {
    let Some(title) = normalize_title(title) else {
        debug!("set_board_title: blank title ignored");
        return board.clone();
    };
    Board {
        title,
        ..board.clone()
    }
}
