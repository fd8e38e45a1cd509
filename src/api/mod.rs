//! REST API endpoints.
//!
//! Axum-based HTTP API for team registration, schedule generation,
//! game recording and the live ranking.

pub mod locks;
pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::StorageError;
use crate::tournament::TournamentError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match &err {
            TournamentError::MatchNotFound(_) => ApiError::NotFound(err.to_string()),
            TournamentError::ScheduleAlreadyGenerated
            | TournamentError::MatchAlreadyCompleted(_)
            | TournamentError::RegistrationClosed
            | TournamentError::DuplicateTeamName(_) => ApiError::Conflict(err.to_string()),
            TournamentError::InsufficientTeams(_)
            | TournamentError::EmptyTeamName
            | TournamentError::InvalidScore { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/teams",
            get(routes::teams::list_teams).post(routes::teams::register_team),
        )
        .route("/api/schedule", post(routes::matches::generate_schedule))
        .route("/api/matches", get(routes::matches::list_matches))
        .route("/api/matches/:id", get(routes::matches::match_detail))
        .route("/api/matches/:id/games", post(routes::matches::record_game))
        .route("/api/ranking", get(routes::ranking::get_ranking))
        .route("/api/summary", get(routes::ranking::get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
