use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::tournament::TournamentSummary;

#[derive(Debug, Serialize)]
pub struct StandingRow {
    pub position: usize,
    pub team_id: String,
    pub team_name: String,
    pub players: String,
    pub vacas_won: u32,
    pub games_diff: i64,
    pub points_diff: i64,
    pub matches_played: u32,
    pub matches_total: u32,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub standings: Vec<StandingRow>,
}

pub async fn get_ranking(
    State(state): State<AppState>,
) -> Result<Json<RankingResponse>, ApiError> {
    let tournament = state.tournament.read().await;
    let standings = tournament
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(i, s)| StandingRow {
            position: i + 1,
            team_id: s.team.id.as_str().to_string(),
            team_name: s.team.name.clone(),
            players: format!("{} y {}", s.team.player1, s.team.player2),
            vacas_won: s.vacas_won,
            games_diff: s.games_diff,
            points_diff: s.points_diff,
            matches_played: s.matches_played,
            matches_total: s.matches_total,
        })
        .collect();

    Ok(Json(RankingResponse { standings }))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<TournamentSummary>, ApiError> {
    let tournament = state.tournament.read().await;
    Ok(Json(tournament.summary()))
}
