//! Standing model — one row of the live ranking.

use serde::{Deserialize, Serialize};

use super::Team;

/// Aggregated tournament statistics for a single team.
///
/// `games_diff` and `points_diff` include games from in-progress matches so
/// the ranking stays live mid-vaca; `vacas_won` and `matches_played` only
/// count completed matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: Team,

    /// Completed matches won
    pub vacas_won: u32,

    /// Games won minus games lost, across all recorded games
    pub games_diff: i64,

    /// Points for minus points against, across all recorded games
    pub points_diff: i64,

    /// Completed matches involving the team
    pub matches_played: u32,

    /// Scheduled matches involving the team, regardless of status
    pub matches_total: u32,
}
