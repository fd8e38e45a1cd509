//! Match state machine: game validation, appending and clinch detection.

use chrono::Utc;

use super::TournamentError;
use crate::models::{Game, Match, MatchStatus, TeamId};

/// Points a side must reach to take a game.
pub const TARGET_SCORE: u32 = 40;

/// Game wins that clinch the match.
pub const WINS_TO_CLINCH: u32 = 3;

/// Upper bound on games per match; with a clinch at 3 wins a 6th game can
/// never be reached.
pub const MAX_GAMES: u32 = 2 * WINS_TO_CLINCH - 1;

/// Pure transition function from a match's recorded games to its status.
pub fn next_status(team_a: &TeamId, team_b: &TeamId, games: &[Game]) -> MatchStatus {
    let wins_a = games_won(games, team_a);
    let wins_b = games_won(games, team_b);

    if wins_a >= WINS_TO_CLINCH {
        MatchStatus::Completed {
            winner: team_a.clone(),
        }
    } else if wins_b >= WINS_TO_CLINCH {
        MatchStatus::Completed {
            winner: team_b.clone(),
        }
    } else if games.is_empty() {
        MatchStatus::Pending
    } else {
        MatchStatus::InProgress
    }
}

/// Count of games in the slice taken by the given team.
pub fn games_won(games: &[Game], team: &TeamId) -> u32 {
    games.iter().filter(|g| g.winner == *team).count() as u32
}

/// Validate and append one game result, then advance the match status.
///
/// All checks run before the game is created; an error leaves the match
/// untouched.
pub(super) fn record_game(
    m: &mut Match,
    score_a: u32,
    score_b: u32,
) -> Result<(), TournamentError> {
    if m.is_completed() {
        return Err(TournamentError::MatchAlreadyCompleted(m.id.to_string()));
    }
    if score_a == score_b || score_a.max(score_b) < TARGET_SCORE {
        return Err(TournamentError::InvalidScore {
            score_a,
            score_b,
            target: TARGET_SCORE,
        });
    }

    let winner = if score_a > score_b {
        m.team_a.clone()
    } else {
        m.team_b.clone()
    };
    let number = m.games.len() as u32 + 1;
    m.games
        .push(Game::new(&m.id, number, score_a, score_b, winner));

    m.status = next_status(&m.team_a, &m.team_b, &m.games);
    if m.is_completed() {
        m.completed_at = Some(Utc::now());
        tracing::debug!(match_id = %m.id, games = m.games.len(), "match clinched");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn make_match() -> Match {
        Match::new(EntityId::from("team-a"), EntityId::from("team-b"))
    }

    fn record(m: &mut Match, score_a: u32, score_b: u32) -> Result<(), TournamentError> {
        record_game(m, score_a, score_b)
    }

    #[test]
    fn test_tied_score_rejected() {
        let mut m = make_match();
        let err = record(&mut m, 40, 40).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidScore { .. }));
        assert!(m.games.is_empty());
        assert_eq!(m.status, MatchStatus::Pending);
    }

    #[test]
    fn test_score_below_target_rejected() {
        let mut m = make_match();
        let err = record(&mut m, 39, 20).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::InvalidScore {
                score_a: 39,
                score_b: 20,
                ..
            }
        ));
    }

    #[test]
    fn test_overshoot_winning_score_allowed() {
        let mut m = make_match();
        record(&mut m, 47, 45).unwrap();
        assert_eq!(m.games[0].winner, m.team_a);
    }

    #[test]
    fn test_losing_score_unconstrained_below_winner() {
        let mut m = make_match();
        record(&mut m, 0, 40).unwrap();
        assert_eq!(m.games[0].winner, m.team_b);
    }

    #[test]
    fn test_first_game_moves_to_in_progress() {
        let mut m = make_match();
        record(&mut m, 40, 10).unwrap();
        assert_eq!(m.status, MatchStatus::InProgress);
        assert!(m.completed_at.is_none());
    }

    #[test]
    fn test_game_numbers_increase() {
        let mut m = make_match();
        record(&mut m, 40, 10).unwrap();
        record(&mut m, 5, 40).unwrap();
        record(&mut m, 40, 39).unwrap();
        let numbers: Vec<u32> = m.games.iter().map(|g| g.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_clinch_at_three_straight_wins() {
        let mut m = make_match();
        for _ in 0..3 {
            record(&mut m, 40, 0).unwrap();
        }
        assert_eq!(m.winner(), Some(&m.team_a));
        assert!(m.completed_at.is_some());
        assert_eq!(m.games.len(), 3);
    }

    #[test]
    fn test_no_clinch_before_three_wins() {
        let mut m = make_match();
        record(&mut m, 40, 0).unwrap();
        record(&mut m, 40, 0).unwrap();
        record(&mut m, 0, 40).unwrap();
        record(&mut m, 0, 40).unwrap();
        assert_eq!(m.status, MatchStatus::InProgress);
        assert_eq!(m.games.len(), 4);
    }

    #[test]
    fn test_full_five_game_match() {
        let mut m = make_match();
        record(&mut m, 40, 0).unwrap();
        record(&mut m, 40, 0).unwrap();
        record(&mut m, 0, 40).unwrap();
        record(&mut m, 0, 40).unwrap();
        record(&mut m, 40, 38).unwrap();

        assert_eq!(m.games.len() as u32, MAX_GAMES);
        assert_eq!(m.winner(), Some(&m.team_a));
    }

    #[test]
    fn test_game_after_clinch_rejected() {
        let mut m = make_match();
        for _ in 0..3 {
            record(&mut m, 40, 0).unwrap();
        }
        let err = record(&mut m, 40, 0).unwrap_err();
        assert!(matches!(err, TournamentError::MatchAlreadyCompleted(_)));
        assert_eq!(m.games.len(), 3);
    }

    #[test]
    fn test_completed_rejects_even_valid_scores() {
        let mut m = make_match();
        for _ in 0..3 {
            record(&mut m, 0, 40).unwrap();
        }
        // Score validity doesn't matter once terminal
        assert!(matches!(
            record(&mut m, 40, 40).unwrap_err(),
            TournamentError::MatchAlreadyCompleted(_)
        ));
    }

    #[test]
    fn test_worked_example_from_rules() {
        // A 40-25, A 40-30, B 40-35, A 40-20 => A clinches after game 4
        let mut m = make_match();
        record(&mut m, 40, 25).unwrap();
        record(&mut m, 40, 30).unwrap();
        record(&mut m, 35, 40).unwrap();
        record(&mut m, 40, 20).unwrap();

        assert_eq!(m.winner(), Some(&m.team_a));
        assert_eq!(m.games.len(), 4);
        assert_eq!(games_won(&m.games, &m.team_a), 3);
        assert_eq!(games_won(&m.games, &m.team_b), 1);
    }

    #[test]
    fn test_next_status_is_pure() {
        let m = make_match();
        assert_eq!(
            next_status(&m.team_a, &m.team_b, &[]),
            MatchStatus::Pending
        );

        let one_game = vec![Game::new(&m.id, 1, 40, 2, m.team_a.clone())];
        assert_eq!(
            next_status(&m.team_a, &m.team_b, &one_game),
            MatchStatus::InProgress
        );

        let clinched: Vec<Game> = (1..=3)
            .map(|n| Game::new(&m.id, n, 40, 2, m.team_a.clone()))
            .collect();
        assert_eq!(
            next_status(&m.team_a, &m.team_b, &clinched),
            MatchStatus::Completed {
                winner: m.team_a.clone()
            }
        );
    }
}
