//! Match model — a vaca, the best-of-five confrontation between two teams.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Game, MatchId, TeamId};

/// Lifecycle of a match. The winner only exists on a completed match,
/// so it lives inside the `Completed` variant rather than as a separate
/// nullable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    InProgress,
    Completed { winner: TeamId },
}

impl MatchStatus {
    /// Short lowercase label for CLI and API output.
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Completed { .. } => "completed",
        }
    }
}

/// A head-to-head confrontation between two distinct teams, owning its
/// ordered sequence of games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from the two team ids)
    pub id: MatchId,

    /// First team of the pairing
    pub team_a: TeamId,

    /// Second team of the pairing
    pub team_b: TeamId,

    /// Current lifecycle state
    pub status: MatchStatus,

    /// Games recorded so far, ordered by number
    pub games: Vec<Game>,

    /// When this match was scheduled
    pub created_at: DateTime<Utc>,

    /// Set exactly when the match reaches `Completed`
    pub completed_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Create a new pending Match with auto-generated ID.
    pub fn new(team_a: TeamId, team_b: TeamId) -> Self {
        let id = EntityId::generate(&[team_a.as_str(), team_b.as_str()]);
        Self {
            id,
            team_a,
            team_b,
            status: MatchStatus::Pending,
            games: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// The winning team, if the match is completed.
    pub fn winner(&self) -> Option<&TeamId> {
        match &self.status {
            MatchStatus::Completed { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether the match is in its terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self.status, MatchStatus::Completed { .. })
    }

    /// Whether the given team plays in this match.
    pub fn involves(&self, team: &TeamId) -> bool {
        self.team_a == *team || self.team_b == *team
    }

    /// Count of games taken by the given team.
    pub fn games_won(&self, team: &TeamId) -> u32 {
        self.games.iter().filter(|g| g.winner == *team).count() as u32
    }
}
