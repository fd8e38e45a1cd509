use std::sync::Arc;

use crate::api::locks::MatchLocks;
use crate::storage::TournamentStore;
use crate::tournament::Tournament;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TournamentStore>,
    pub tournament: Arc<tokio::sync::RwLock<Tournament>>,
    pub match_locks: MatchLocks,
}

impl AppState {
    /// Load the tournament from the store and wrap it for sharing.
    pub fn load(store: Arc<dyn TournamentStore>) -> Result<Self, crate::storage::StorageError> {
        let tournament = store.load()?;
        Ok(Self {
            store,
            tournament: Arc::new(tokio::sync::RwLock::new(tournament)),
            match_locks: MatchLocks::new(),
        })
    }
}
