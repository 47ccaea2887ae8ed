//! # Identifiers
//!
//! Every entity gets a process-unique string id of the form
//! `{unix_millis}-{suffix}`, where the suffix is nine lowercase hex characters
//! taken from a v4 UUID. Nothing is persisted between sessions: uniqueness
//! comes from the timestamp prefix plus 36 random bits.
//!
//! Ids loaded from a persisted board are opaque strings and are never parsed,
//! so boards written by other generators load unchanged.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Produce a fresh identifier.
pub fn new_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..SUFFIX_LEN])
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new unique id.
            pub fn generate() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies the board.
    BoardId
);
string_id!(
    /// Identifies a list. Unique across the board.
    ListId
);
string_id!(
    /// Identifies a card. Unique across every list of the board.
    CardId
);
string_id!(
    /// Identifies a comment. Unique within its card.
    CommentId
);
