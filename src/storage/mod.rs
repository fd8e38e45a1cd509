//! Filesystem persistence for tournament state.
//!
//! JSONL is the source of truth: one file for teams, one for matches.
//! A match line embeds its games, so appending a game and updating the
//! match status land on disk as a single file write.

mod jsonl;
mod store;

pub use jsonl::{JsonlReader, JsonlWriter};
pub use store::JsonlStore;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Match, Team};
use crate::tournament::Tournament;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join("teams.jsonl")
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// The storage collaborator consumed by the application layer.
///
/// Implementations must make `save_matches` a single atomic unit from the
/// core's perspective; the core itself never performs partial writes.
pub trait TournamentStore: Send + Sync {
    fn load_teams(&self) -> Result<Vec<Team>, StorageError>;
    fn save_teams(&self, teams: &[Team]) -> Result<(), StorageError>;
    fn load_matches(&self) -> Result<Vec<Match>, StorageError>;
    fn save_matches(&self, matches: &[Match]) -> Result<(), StorageError>;

    /// Rebuild the whole aggregate from disk.
    fn load(&self) -> Result<Tournament, StorageError> {
        Ok(Tournament::from_parts(
            self.load_teams()?,
            self.load_matches()?,
        ))
    }

    /// Persist the whole aggregate.
    fn save(&self, tournament: &Tournament) -> Result<(), StorageError> {
        self.save_teams(tournament.teams())?;
        self.save_matches(tournament.matches())
    }
}
