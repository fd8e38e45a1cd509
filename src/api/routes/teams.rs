use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Team;

#[derive(Debug, Deserialize)]
pub struct RegisterTeamRequest {
    pub name: String,
    pub player1: String,
    pub player2: String,
}

#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub player1: String,
    pub player2: String,
}

impl TeamSummary {
    fn from_team(team: &Team) -> Self {
        Self {
            id: team.id.as_str().to_string(),
            name: team.name.clone(),
            player1: team.player1.clone(),
            player2: team.player2.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamSummary>,
    pub count: usize,
}

pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<TeamListResponse>, ApiError> {
    let tournament = state.tournament.read().await;
    let teams: Vec<TeamSummary> = tournament
        .teams()
        .iter()
        .map(TeamSummary::from_team)
        .collect();

    Ok(Json(TeamListResponse {
        count: teams.len(),
        teams,
    }))
}

pub async fn register_team(
    State(state): State<AppState>,
    Json(req): Json<RegisterTeamRequest>,
) -> Result<(StatusCode, Json<TeamSummary>), ApiError> {
    let mut tournament = state.tournament.write().await;
    let summary = TeamSummary::from_team(tournament.add_team(
        &req.name,
        &req.player1,
        &req.player2,
    )?);
    state.store.save_teams(tournament.teams())?;

    Ok((StatusCode::CREATED, Json(summary)))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::testing::{get_json, post_json, setup_state};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_register_and_list_teams() {
        let dir = TempDir::new().unwrap();
        let app = build_router(setup_state(dir.path()));

        let (status, body) = post_json(
            app.clone(),
            "/api/teams",
            r#"{"name":"Los Galácticos","player1":"Ana","player2":"Luis"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Los Galácticos");
        assert!(!body["id"].as_str().unwrap().is_empty());

        let (status, body) = get_json(app, "/api/teams").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["teams"][0]["player1"], "Ana");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let dir = TempDir::new().unwrap();
        let app = build_router(setup_state(dir.path()));

        let body = r#"{"name":"La Peña","player1":"Marta","player2":"Jon"}"#;
        let (status, _) = post_json(app.clone(), "/api/teams", body).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, err) = post_json(app, "/api/teams", body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(err["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let dir = TempDir::new().unwrap();
        let app = build_router(setup_state(dir.path()));

        let (status, err) = post_json(
            app,
            "/api/teams",
            r#"{"name":"   ","player1":"A","player2":"B"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_registration_closed_after_schedule() {
        let dir = TempDir::new().unwrap();
        let app = build_router(setup_state(dir.path()));
        crate::api::routes::testing::seed_schedule(&app, &["A", "B"]).await;

        let (status, _) = post_json(
            app,
            "/api/teams",
            r#"{"name":"C","player1":"X","player2":"Y"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_registered_teams_persist() {
        let dir = TempDir::new().unwrap();
        {
            let app = build_router(setup_state(dir.path()));
            let (status, _) = post_json(
                app,
                "/api/teams",
                r#"{"name":"A","player1":"P1","player2":"P2"}"#,
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        // A fresh state over the same data dir sees the team
        let app = build_router(setup_state(dir.path()));
        let (_, body) = get_json(app, "/api/teams").await;
        assert_eq!(body["count"], 1);
    }
}
