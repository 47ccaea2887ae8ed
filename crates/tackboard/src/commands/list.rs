use tracing::debug;

use super::helpers::reorder_by_ids;
use crate::id::ListId;
use crate::model::{normalize_title, Board, List, DEFAULT_LIST_TITLE};

/// Append a list. Blank titles fall back to [`DEFAULT_LIST_TITLE`].
pub fn add(board: &Board, title: &str) -> Board {
    let title = normalize_title(title).unwrap_or_else(|| DEFAULT_LIST_TITLE.to_string());
    let mut next = board.clone();
    let list = List::new(board.id.clone(), title, next.lists.len());
    next.lists.push(list);
    next
}

pub fn update_title(board: &Board, list_id: &ListId, title: &str) -> Board {
    let Some(title) = normalize_title(title) else {
        debug!(%list_id, "update_list_title: blank title ignored");
        return board.clone();
    };
    let Some(pos) = board.list_position(list_id) else {
        debug!(%list_id, "update_list_title: unknown list");
        return board.clone();
    };
    let mut next = board.clone();
    next.lists[pos].title = title;
    next
}

/// Remove a list together with its cards and their comments.
pub fn delete(board: &Board, list_id: &ListId) -> Board {
    let Some(pos) = board.list_position(list_id) else {
        debug!(%list_id, "delete_list: unknown list");
        return board.clone();
    };
    let mut next = board.clone();
    next.lists.remove(pos);
    renumber_lists(&mut next);
    next
}

/// Drop every card of a list, keeping the list.
pub fn clear(board: &Board, list_id: &ListId) -> Board {
    let Some(pos) = board.list_position(list_id) else {
        debug!(%list_id, "clear_list: unknown list");
        return board.clone();
    };
    let mut next = board.clone();
    next.lists[pos].cards.clear();
    next
}

/// Re-sort lists to match `list_ids`. See [`reorder_by_ids`] for how unknown
/// and omitted ids are treated.
pub fn reorder(board: &Board, list_ids: &[ListId]) -> Board {
    let mut next = board.clone();
    reorder_by_ids(&mut next.lists, list_ids, |l| &l.id);
    renumber_lists(&mut next);
    next
}

fn renumber_lists(board: &mut Board) {
    for (i, list) in board.lists.iter_mut().enumerate() {
        list.order = i;
    }
}
