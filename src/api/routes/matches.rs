use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, MatchId, TeamId};
use crate::tournament::Tournament;

#[derive(Debug, Serialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

fn team_ref(tournament: &Tournament, id: &TeamId) -> TeamRef {
    let name = tournament
        .teams()
        .iter()
        .find(|t| t.id == *id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string());
    TeamRef {
        id: id.as_str().to_string(),
        name,
    }
}

#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub id: String,
    pub team_a: TeamRef,
    pub team_b: TeamRef,
    pub status: String,
    pub winner: Option<String>,
    pub games_played: usize,
}

impl MatchSummary {
    fn build(m: &Match, tournament: &Tournament) -> Self {
        Self {
            id: m.id.as_str().to_string(),
            team_a: team_ref(tournament, &m.team_a),
            team_b: team_ref(tournament, &m.team_b),
            status: m.status.label().to_string(),
            winner: m.winner().map(|w| w.as_str().to_string()),
            games_played: m.games.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameDetail {
    pub number: u32,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: String,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse {
    #[serde(flatten)]
    pub summary: MatchSummary,
    pub games: Vec<GameDetail>,
    pub completed_at: Option<String>,
}

impl MatchDetailResponse {
    fn build(m: &Match, tournament: &Tournament) -> Self {
        Self {
            summary: MatchSummary::build(m, tournament),
            games: m
                .games
                .iter()
                .map(|g| GameDetail {
                    number: g.number,
                    score_a: g.score_a,
                    score_b: g.score_b,
                    winner: g.winner.as_str().to_string(),
                })
                .collect(),
            completed_at: m.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchSummary>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub matches: Vec<MatchSummary>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct RecordGameRequest {
    pub score_a: u32,
    pub score_b: u32,
}

pub async fn generate_schedule(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ScheduleResponse>), ApiError> {
    let mut tournament = state.tournament.write().await;
    tournament.generate_schedule()?;

    let matches: Vec<MatchSummary> = tournament
        .matches()
        .iter()
        .map(|m| MatchSummary::build(m, &tournament))
        .collect();
    state.store.save_matches(tournament.matches())?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse {
            count: matches.len(),
            matches,
        }),
    ))
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let tournament = state.tournament.read().await;
    let matches: Vec<MatchSummary> = tournament
        .matches()
        .iter()
        .map(|m| MatchSummary::build(m, &tournament))
        .collect();

    Ok(Json(MatchListResponse {
        count: matches.len(),
        matches,
    }))
}

pub async fn match_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchDetailResponse>, ApiError> {
    let tournament = state.tournament.read().await;
    let match_id = MatchId::from(id);
    let m = tournament
        .find_match(&match_id)
        .ok_or_else(|| ApiError::NotFound(format!("match {}", match_id)))?;

    Ok(Json(MatchDetailResponse::build(m, &tournament)))
}

pub async fn record_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RecordGameRequest>,
) -> Result<Json<MatchDetailResponse>, ApiError> {
    let match_id = MatchId::from(id);

    // Serialize writers per match before touching the aggregate.
    let lock = state.match_locks.lock_for(&match_id);
    let _guard = lock.lock().await;

    let mut tournament = state.tournament.write().await;
    let updated = tournament
        .record_game(&match_id, req.score_a, req.score_b)?
        .clone();
    state.store.save_matches(tournament.matches())?;

    Ok(Json(MatchDetailResponse::build(&updated, &tournament)))
}
