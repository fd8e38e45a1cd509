//! Tournament core: round-robin scheduling, match progression and ranking.
//!
//! A [`Tournament`] owns its teams and matches (each match owns its games)
//! and is passed by handle into every operation — there is no ambient
//! "current tournament" state. All operations here are synchronous, pure
//! computation; persistence and per-match mutual exclusion are the caller's
//! responsibility (see `storage` and `api::locks`).

mod progression;
mod ranking;
mod schedule;

pub use progression::{games_won, next_status, MAX_GAMES, TARGET_SCORE, WINS_TO_CLINCH};

use serde::Serialize;
use thiserror::Error;

use crate::models::{Match, MatchId, Team, TeamStanding};

/// Validation failures surfaced by tournament operations.
///
/// Every failure is detected before any mutation, so a returned error
/// means the aggregate is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TournamentError {
    #[error("at least 2 teams are required to generate a schedule, got {0}")]
    InsufficientTeams(usize),

    #[error("schedule already generated")]
    ScheduleAlreadyGenerated,

    #[error("registration is closed once the schedule exists")]
    RegistrationClosed,

    #[error("team name must not be empty")]
    EmptyTeamName,

    #[error("team name already registered: {0}")]
    DuplicateTeamName(String),

    #[error("match not found: {0}")]
    MatchNotFound(String),

    #[error("match already completed: {0}")]
    MatchAlreadyCompleted(String),

    #[error("invalid score {score_a}-{score_b}: scores must differ and the higher one must reach {target}")]
    InvalidScore {
        score_a: u32,
        score_b: u32,
        target: u32,
    },
}

/// Headline progress numbers for the whole tournament.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentSummary {
    pub teams: usize,
    pub matches: usize,
    pub completed_matches: usize,
    pub progress_percentage: f64,
}

/// The tournament aggregate: registered teams plus the generated schedule.
#[derive(Debug, Clone, Default)]
pub struct Tournament {
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl Tournament {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the aggregate from persisted parts.
    pub fn from_parts(teams: Vec<Team>, matches: Vec<Match>) -> Self {
        Self { teams, matches }
    }

    /// Teams in registration order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Matches in schedule order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn find_match(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == *id)
    }

    /// Register a team. Fails once the schedule exists, on an empty name,
    /// or on a name that is already taken.
    pub fn add_team(
        &mut self,
        name: &str,
        player1: &str,
        player2: &str,
    ) -> Result<&Team, TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::RegistrationClosed);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        if self.teams.iter().any(|t| t.name == name) {
            return Err(TournamentError::DuplicateTeamName(name.to_string()));
        }

        self.teams.push(Team::new(
            name.to_string(),
            player1.trim().to_string(),
            player2.trim().to_string(),
        ));
        Ok(self.teams.last().expect("just pushed"))
    }

    /// Generate the full round-robin schedule. One-shot: a second call
    /// fails, the pairing set is immutable once created.
    pub fn generate_schedule(&mut self) -> Result<&[Match], TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::ScheduleAlreadyGenerated);
        }
        if self.teams.len() < 2 {
            return Err(TournamentError::InsufficientTeams(self.teams.len()));
        }

        self.matches = schedule::round_robin(&self.teams);
        tracing::info!(
            matches = self.matches.len(),
            teams = self.teams.len(),
            "generated round-robin schedule"
        );
        Ok(&self.matches)
    }

    /// Record one game result against a match. Appends the game and runs
    /// the state machine, clinching the match at three game wins.
    pub fn record_game(
        &mut self,
        match_id: &MatchId,
        score_a: u32,
        score_b: u32,
    ) -> Result<&Match, TournamentError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == *match_id)
            .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;

        progression::record_game(m, score_a, score_b)?;
        Ok(m)
    }

    /// Compute the live ranking. Stateless: recomputed from scratch on
    /// every call.
    pub fn ranking(&self) -> Vec<TeamStanding> {
        ranking::rank(&self.teams, &self.matches)
    }

    /// Tournament-wide progress counts.
    pub fn summary(&self) -> TournamentSummary {
        let completed = self.matches.iter().filter(|m| m.is_completed()).count();
        let progress = if self.matches.is_empty() {
            0.0
        } else {
            let pct = completed as f64 / self.matches.len() as f64 * 100.0;
            (pct * 10.0).round() / 10.0
        };
        TournamentSummary {
            teams: self.teams.len(),
            matches: self.matches.len(),
            completed_matches: completed,
            progress_percentage: progress,
        }
    }
}
