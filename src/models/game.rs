//! Game model — one partida inside a vaca, won by the first side to 40.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, GameId, MatchId, TeamId};

/// A single game within a match. Append-only: games are never edited or
/// removed once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier (derived from match id + game number)
    pub id: GameId,

    /// 1-based position within the match, strictly increasing
    pub number: u32,

    /// Points scored by team A
    pub score_a: u32,

    /// Points scored by team B
    pub score_b: u32,

    /// The team that took the game, never a tie
    pub winner: TeamId,

    /// When this result was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Game {
    /// Create a new Game with auto-generated ID.
    pub fn new(match_id: &MatchId, number: u32, score_a: u32, score_b: u32, winner: TeamId) -> Self {
        let id = EntityId::generate(&[match_id.as_str(), &number.to_string()]);
        Self {
            id,
            number,
            score_a,
            score_b,
            winner,
            recorded_at: Utc::now(),
        }
    }
}
