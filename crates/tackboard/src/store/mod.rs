//! # Storage Layer
//!
//! Persistence is split the same way on every backend:
//!
//! 1. [`PersistenceGateway`]: what the application sees. `load` once at
//!    startup, `save` after every accepted mutation. Both are total: failures
//!    are logged and absorbed, never surfaced to the mutation path.
//! 2. [`StorageBackend`]: raw keyed blob I/O. This is where errors are real
//!    (`Result`), so backends can be tested for them.
//!
//! [`BoardStore`] joins the two: it owns a backend and a storage key, encodes
//! the whole board as JSON and applies the best-effort policy.
//!
//! ## Failure Policy
//!
//! | Situation | `load` | `save` |
//! |-----------|--------|--------|
//! | key absent | `None` | n/a |
//! | payload is not a board | `None` (warned) | n/a |
//! | backend I/O error | `None` (warned) | dropped (warned) |
//!
//! The caller treats every `None` the same way: start from a seeded board.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `{key}.json` file per key in a directory,
//!   written atomically (tmp file then rename).
//! - [`mem_backend::MemBackend`]: in-memory map for tests, with write-error
//!   simulation and a write counter.
//!
//! ## Storage Layout
//!
//! ```text
//! {data_dir}/
//! └── tackboard-board.json   # The whole board
//! ```

use crate::model::Board;

pub mod backend;
pub mod board_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use board_store::BoardStore;

/// The single well-known key the board is stored under.
pub const STORAGE_KEY: &str = "tackboard-board";

/// Loads the board at startup and saves it after each change.
pub trait PersistenceGateway {
    /// The persisted board, or `None` when absent or unreadable.
    fn load(&self) -> Option<Board>;

    /// Persist the board. Failures are absorbed.
    fn save(&self, board: &Board);
}
