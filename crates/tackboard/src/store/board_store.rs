use super::backend::StorageBackend;
use super::{PersistenceGateway, STORAGE_KEY};
use crate::error::{Result, TackboardError};
use crate::model::Board;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A [`PersistenceGateway`] that stores the whole board as one JSON blob.
pub struct BoardStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> BoardStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    /// Load without the best-effort policy.
    pub fn try_load(&self) -> Result<Option<Board>> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(None);
        };
        let board: Board = serde_json::from_str(&raw).map_err(TackboardError::Serialization)?;
        Ok(Some(board))
    }

    /// Save without the best-effort policy.
    pub fn try_save(&self, board: &Board) -> Result<()> {
        let payload = serde_json::to_string(board).map_err(TackboardError::Serialization)?;
        self.backend.write(&self.key, &payload)
    }

    /// Forget the persisted board.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)
    }
}

impl<B: StorageBackend> PersistenceGateway for BoardStore<B> {
    fn load(&self) -> Option<Board> {
        match self.try_load() {
            Ok(Some(board)) => {
                for issue in board.integrity_issues() {
                    warn!(key = %self.key, %issue, "loaded board has an integrity issue");
                }
                debug!(key = %self.key, lists = board.lists.len(), "board loaded");
                Some(board)
            }
            Ok(None) => {
                debug!(key = %self.key, "no persisted board");
                None
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not load board; ignoring");
                None
            }
        }
    }

    fn save(&self, board: &Board) {
        if let Err(e) = self.try_save(board) {
            warn!(key = %self.key, error = %e, "could not save board; state kept in memory");
        }
    }
}
