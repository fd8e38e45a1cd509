//! Per-match writer exclusion.
//!
//! `record_game` is a read-modify-write on one match: two concurrent
//! writers against the same match could both observe the same game count
//! and corrupt sequence numbering and clinch detection. Each match gets
//! its own async mutex, handed out lazily; the handler holds it across
//! the aggregate update and the persist.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;

use crate::models::MatchId;

/// A lazily-populated mutex per match id.
#[derive(Clone, Default)]
pub struct MatchLocks {
    inner: Arc<StdMutex<HashMap<MatchId, Arc<Mutex<()>>>>>,
}

impl MatchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for the given match.
    pub fn lock_for(&self, id: &MatchId) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
