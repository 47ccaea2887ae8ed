//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from environment variables, an optional TOML file and compiled defaults.
//!
//! ## Priority
//!
//! 1. **Environment variables**: `TACKBOARD_STORAGE_KEY`, `TACKBOARD_DATA_DIR`,
//!    `TACKBOARD_BOARD_TITLE`.
//! 2. **TOML file**: passed to [`TackboardConfig::load`]. A missing file is
//!    not an error.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `tackboard-board` | Key the board blob is stored under |
//! | `data_dir` | OS data dir | Directory holding the blob |
//! | `board_title` | `Demo Board` | Title of the board seeded on first run |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TackboardError};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TackboardConfig {
    /// Key the board is stored under.
    #[config(default = "tackboard-board", env = "TACKBOARD_STORAGE_KEY")]
    pub storage_key: String,

    /// Directory for the board blob. Falls back to the OS data directory.
    #[config(env = "TACKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Title given to the board seeded on first run.
    #[config(default = "Demo Board", env = "TACKBOARD_BOARD_TITLE")]
    pub board_title: String,
}

// Keep in step with the `#[config(default = ..)]` attributes above.
impl Default for TackboardConfig {
    fn default() -> Self {
        Self {
            storage_key: crate::store::STORAGE_KEY.to_string(),
            data_dir: None,
            board_title: crate::model::DEFAULT_BOARD_TITLE.to_string(),
        }
    }
}

impl TackboardConfig {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder.load().map_err(TackboardError::Config)
    }

    /// The configured data directory, or the platform default.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("com", "tackboard", "tackboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| TackboardError::Store("Could not determine data directory".to_string()))
    }
}
