//! Standings calculation with the three-level tie-break.

use crate::models::{Match, Team, TeamStanding};

/// Aggregate per-team statistics and order them: vacas won, then game
/// differential, then point differential, all descending.
///
/// Games from in-progress matches count toward the differentials so the
/// ranking is live mid-vaca. A full tie on all three keys keeps team
/// registration order (the sort is stable).
pub(super) fn rank(teams: &[Team], matches: &[Match]) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| standing_for(team, matches))
        .collect();

    standings.sort_by(|a, b| {
        b.vacas_won
            .cmp(&a.vacas_won)
            .then_with(|| b.games_diff.cmp(&a.games_diff))
            .then_with(|| b.points_diff.cmp(&a.points_diff))
    });
    standings
}

fn standing_for(team: &Team, matches: &[Match]) -> TeamStanding {
    let mut standing = TeamStanding {
        team: team.clone(),
        vacas_won: 0,
        games_diff: 0,
        points_diff: 0,
        matches_played: 0,
        matches_total: 0,
    };

    for m in matches.iter().filter(|m| m.involves(&team.id)) {
        standing.matches_total += 1;
        if m.is_completed() {
            standing.matches_played += 1;
            if m.winner() == Some(&team.id) {
                standing.vacas_won += 1;
            }
        }

        let plays_as_a = m.team_a == team.id;
        for game in &m.games {
            let (own, other) = if plays_as_a {
                (game.score_a, game.score_b)
            } else {
                (game.score_b, game.score_a)
            };
            standing.points_diff += i64::from(own) - i64::from(other);
            standing.games_diff += if game.winner == team.id { 1 } else { -1 };
        }
    }
    standing
}
