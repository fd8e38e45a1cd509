//! JSONL-backed implementation of the storage collaborator.

use tracing::info;

use super::{JsonlReader, JsonlWriter, StorageConfig, StorageError, TournamentStore};
use crate::models::{Match, Team};

/// Stores the tournament as `teams.jsonl` + `matches.jsonl` under the
/// configured data directory.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    config: StorageConfig,
}

impl JsonlStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

impl TournamentStore for JsonlStore {
    fn load_teams(&self) -> Result<Vec<Team>, StorageError> {
        JsonlReader::new(self.config.teams_path()).read_all()
    }

    fn save_teams(&self, teams: &[Team]) -> Result<(), StorageError> {
        let count = JsonlWriter::new(self.config.teams_path()).write_all(teams)?;
        info!(count, "saved teams");
        Ok(())
    }

    fn load_matches(&self) -> Result<Vec<Match>, StorageError> {
        JsonlReader::new(self.config.matches_path()).read_all()
    }

    fn save_matches(&self, matches: &[Match]) -> Result<(), StorageError> {
        let count = JsonlWriter::new(self.config.matches_path()).write_all(matches)?;
        info!(count, "saved matches");
        Ok(())
    }
}
