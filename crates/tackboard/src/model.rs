//! # Domain Model
//!
//! A board is a strict ownership tree:
//!
//! ```text
//! Board ──owns──▶ List* ──owns──▶ Card* ──owns──▶ Comment*
//! ```
//!
//! Sequence position is the display order everywhere. `List.order` is
//! advisory; `Card.order` mirrors the card's index inside its list and is
//! recomputed whenever that list's card sequence changes.
//!
//! The back-references (`List.board_id`, `Card.list_id`, `Comment.card_id`)
//! exist for consumers that hold a single entity. They never express
//! ownership: the containing sequence does.
//!
//! All values are treated as immutable. The command layer clones the board,
//! edits the clone, and hands back the new value.
//!
//! ## Serialized Form
//!
//! Field names are camelCase (`boardId`, `listId`, `cardId`, `createdAt`).
//! `Card.order` may be missing in older payloads and defaults to `0`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::id::{BoardId, CardId, CommentId, ListId};

pub const DEFAULT_BOARD_TITLE: &str = "Demo Board";
pub const DEFAULT_LIST_TITLE: &str = "New List";
pub const DEFAULT_CARD_TITLE: &str = "New Card";

/// Trim a title and reject it if nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub card_id: CardId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(card_id: CardId, text: String) -> Self {
        Self {
            id: CommentId::generate(),
            card_id,
            text,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub list_id: ListId,
    pub title: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub order: usize,
}

impl Card {
    pub fn new(list_id: ListId, title: String, order: usize) -> Self {
        Self {
            id: CardId::generate(),
            list_id,
            title,
            comments: Vec::new(),
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub board_id: BoardId,
    pub title: String,
    pub order: usize,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(board_id: BoardId, title: String, order: usize) -> Self {
        Self {
            id: ListId::generate(),
            board_id,
            title,
            order,
            cards: Vec::new(),
        }
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id.clone()).collect()
    }

    pub fn card_position(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }

    /// Make every card's `order` equal its index.
    pub fn renumber_cards(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.order = i;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// An empty board. Blank titles fall back to [`DEFAULT_BOARD_TITLE`].
    pub fn new(title: &str) -> Self {
        Self {
            id: BoardId::generate(),
            title: normalize_title(title).unwrap_or_else(|| DEFAULT_BOARD_TITLE.to_string()),
            lists: Vec::new(),
        }
    }

    pub fn list_ids(&self) -> Vec<ListId> {
        self.lists.iter().map(|l| l.id.clone()).collect()
    }

    pub fn list_position(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == list_id)
    }

    pub fn find_list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    /// Returns `(list_index, card_index)` of the card, scanning lists in order.
    pub fn locate_card(&self, card_id: &CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.card_position(card_id).map(|ci| (li, ci)))
    }

    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.locate_card(card_id)
            .map(|(li, ci)| &self.lists[li].cards[ci])
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    /// Structural problems in the tree. Empty for any board produced by the
    /// command layer.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        if self.title.trim().is_empty() {
            issues.push(IntegrityIssue::BlankTitle {
                entity: "board",
                id: self.id.to_string(),
            });
        }

        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                issues.push(IntegrityIssue::DuplicateId {
                    entity: "list",
                    id: list.id.to_string(),
                });
            }
            if list.title.trim().is_empty() {
                issues.push(IntegrityIssue::BlankTitle {
                    entity: "list",
                    id: list.id.to_string(),
                });
            }

            for card in &list.cards {
                if !card_ids.insert(&card.id) {
                    issues.push(IntegrityIssue::DuplicateId {
                        entity: "card",
                        id: card.id.to_string(),
                    });
                }
                if card.list_id != list.id {
                    issues.push(IntegrityIssue::StaleBackReference {
                        entity: "card",
                        id: card.id.to_string(),
                        expected: list.id.to_string(),
                        found: card.list_id.to_string(),
                    });
                }
                if card.title.trim().is_empty() {
                    issues.push(IntegrityIssue::BlankTitle {
                        entity: "card",
                        id: card.id.to_string(),
                    });
                }

                let mut comment_ids = HashSet::new();
                for comment in &card.comments {
                    if !comment_ids.insert(&comment.id) {
                        issues.push(IntegrityIssue::DuplicateId {
                            entity: "comment",
                            id: comment.id.to_string(),
                        });
                    }
                    if comment.card_id != card.id {
                        issues.push(IntegrityIssue::StaleBackReference {
                            entity: "comment",
                            id: comment.id.to_string(),
                            expected: card.id.to_string(),
                            found: comment.card_id.to_string(),
                        });
                    }
                    if comment.text.trim().is_empty() {
                        issues.push(IntegrityIssue::BlankTitle {
                            entity: "comment",
                            id: comment.id.to_string(),
                        });
                    }
                }
            }
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateId {
        entity: &'static str,
        id: String,
    },
    StaleBackReference {
        entity: &'static str,
        id: String,
        expected: String,
        found: String,
    },
    BlankTitle {
        entity: &'static str,
        id: String,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { entity, id } => write!(f, "duplicate {} id: {}", entity, id),
            Self::StaleBackReference {
                entity,
                id,
                expected,
                found,
            } => write!(
                f,
                "{} {} points at {} but is owned by {}",
                entity, id, found, expected
            ),
            Self::BlankTitle { entity, id } => write!(f, "{} {} has a blank title", entity, id),
        }
    }
}
