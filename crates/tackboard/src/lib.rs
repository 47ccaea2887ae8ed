//! # Tackboard Architecture
//!
//! Tackboard is the **state core of a single-user Kanban board**: one board of
//! ordered lists, each holding ordered cards with comments. It knows nothing
//! about rendering. A UI feeds it intents and drag gestures, and reads the
//! current [`model::Board`] back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the one current Board                               │
//! │  - Replaces it on change, saves through the gateway         │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Gesture (gesture.rs)         │ │  Commands (commands/*.rs) │
//! │  - Drag end ──▶ BoardOp       │─▶  - Pure: &Board ──▶ Board │
//! │  - Pure, never mutates        │ │  - Unknown ids are no-ops │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                                                │
//!                                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PersistenceGateway: load once, save after each change    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Mutations Never Fail
//!
//! Every operation is total. An unknown id or a blank title returns the board
//! unchanged; a storage failure is logged and the in-memory board stays
//! authoritative. Only configuration and the `try_*` storage calls return
//! [`error::Result`].
//!
//! ## Module Overview
//!
//! - [`api`]: The state container, entry point for all operations
//! - [`commands`]: One pure function per mutation, plus [`commands::BoardOp`]
//! - [`gesture`]: Drag-and-drop resolution
//! - [`store`]: Persistence gateway and backends
//! - [`model`]: Core data types (`Board`, `List`, `Card`, `Comment`)
//! - [`id`]: Id generation and typed ids
//! - [`seed`]: The board created on first run
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gesture;
pub mod id;
pub mod model;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use api::BoardApi;
pub use commands::BoardOp;
pub use error::{Result, TackboardError};
pub use gesture::{DragEnd, DragSource, DropTarget};
pub use model::{Board, Card, Comment, List};
