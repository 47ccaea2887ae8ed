//! # API Facade
//!
//! [`BoardApi`] is the state container the presentation layer talks to. It
//! owns the one current [`Board`] and the [`PersistenceGateway`], and is the
//! only place where a new board replaces the old one.
//!
//! ## Flow
//!
//! ```text
//! intent ──▶ BoardApi::<op>() ──▶ commands::* ──▶ next Board
//!                                                  │
//!                     changed? ──yes──▶ replace + gateway.save()
//!                              └─no──▶ keep current, no write
//! drag end ──▶ gesture::resolve() ──▶ at most one BoardOp ──▶ same path
//! ```
//!
//! Every mutating method returns `true` when the board changed (and a save
//! was attempted), `false` when the call was a no-op.
//!
//! ## Generic Over PersistenceGateway
//!
//! - Production: `BoardApi<BoardStore<FsBackend>>`
//! - Testing: `BoardApi<BoardStore<MemBackend>>`

use tracing::{debug, info};

use crate::commands::BoardOp;
use crate::config::TackboardConfig;
use crate::error::Result;
use crate::gesture::{self, DragEnd};
use crate::id::{CardId, ListId};
use crate::model::{Board, Card, List};
use crate::seed::{initial_board, initial_board_titled};
use crate::store::fs_backend::{validate_key, FsBackend};
use crate::store::{BoardStore, PersistenceGateway};

pub struct BoardApi<G: PersistenceGateway> {
    gateway: G,
    board: Board,
}

impl<G: PersistenceGateway> BoardApi<G> {
    /// Load the persisted board, or seed the default one.
    pub fn open(gateway: G) -> Self {
        Self::open_or_seed(gateway, initial_board)
    }

    /// Load the persisted board, or build one with `seed` and save it.
    pub fn open_or_seed(gateway: G, seed: impl FnOnce() -> Board) -> Self {
        let board = match gateway.load() {
            Some(board) => board,
            None => {
                let board = seed();
                info!(board = %board.id, title = %board.title, "seeded a new board");
                gateway.save(&board);
                board
            }
        };
        Self { gateway, board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn find_list(&self, list_id: &ListId) -> Option<&List> {
        self.board.find_list(list_id)
    }

    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.board.find_card(card_id)
    }

    /// Apply one mutation. Persists and returns `true` only if the board
    /// changed.
    pub fn apply(&mut self, op: BoardOp) -> bool {
        let next = op.apply(&self.board);
        if next == self.board {
            debug!(op = op.name(), "no-op");
            return false;
        }
        debug!(op = op.name(), "applied");
        self.board = next;
        self.gateway.save(&self.board);
        true
    }

    /// Interpret a finished drag and apply what it resolves to.
    pub fn drag_end(&mut self, drag: &DragEnd) -> bool {
        match gesture::resolve(&self.board, drag) {
            Some(op) => self.apply(op),
            None => false,
        }
    }

    pub fn set_board_title(&mut self, title: &str) -> bool {
        self.apply(BoardOp::SetBoardTitle {
            title: title.to_string(),
        })
    }

    pub fn add_list(&mut self, title: &str) -> bool {
        self.apply(BoardOp::AddList {
            title: title.to_string(),
        })
    }

    pub fn update_list_title(&mut self, list_id: &ListId, title: &str) -> bool {
        self.apply(BoardOp::UpdateListTitle {
            list_id: list_id.clone(),
            title: title.to_string(),
        })
    }

    pub fn delete_list(&mut self, list_id: &ListId) -> bool {
        self.apply(BoardOp::DeleteList {
            list_id: list_id.clone(),
        })
    }

    pub fn clear_list(&mut self, list_id: &ListId) -> bool {
        self.apply(BoardOp::ClearList {
            list_id: list_id.clone(),
        })
    }

    pub fn reorder_lists(&mut self, list_ids: &[ListId]) -> bool {
        self.apply(BoardOp::ReorderLists {
            list_ids: list_ids.to_vec(),
        })
    }

    pub fn add_card(&mut self, list_id: &ListId, title: &str) -> bool {
        self.apply(BoardOp::AddCard {
            list_id: list_id.clone(),
            title: title.to_string(),
        })
    }

    pub fn update_card_title(&mut self, card_id: &CardId, title: &str) -> bool {
        self.apply(BoardOp::UpdateCardTitle {
            card_id: card_id.clone(),
            title: title.to_string(),
        })
    }

    pub fn delete_card(&mut self, card_id: &CardId) -> bool {
        self.apply(BoardOp::DeleteCard {
            card_id: card_id.clone(),
        })
    }

    pub fn move_card(&mut self, card_id: &CardId, target_list_id: &ListId, target_index: usize) -> bool {
        self.apply(BoardOp::MoveCard {
            card_id: card_id.clone(),
            target_list_id: target_list_id.clone(),
            target_index,
        })
    }

    pub fn reorder_cards_in_list(&mut self, list_id: &ListId, card_ids: &[CardId]) -> bool {
        self.apply(BoardOp::ReorderCardsInList {
            list_id: list_id.clone(),
            card_ids: card_ids.to_vec(),
        })
    }

    pub fn add_comment(&mut self, card_id: &CardId, text: &str) -> bool {
        self.apply(BoardOp::AddComment {
            card_id: card_id.clone(),
            text: text.to_string(),
        })
    }
}

impl BoardApi<BoardStore<FsBackend>> {
    /// Open the board described by `config`, on disk. Fails on a storage key
    /// the filesystem backend would refuse.
    pub fn open_with_config(config: &TackboardConfig) -> Result<Self> {
        validate_key(&config.storage_key)?;
        let backend = FsBackend::new(config.resolve_data_dir()?);
        let store = BoardStore::with_key(backend, config.storage_key.clone());
        let title = config.board_title.clone();
        Ok(Self::open_or_seed(store, move || initial_board_titled(&title)))
    }
}
