pub mod matches;
pub mod ranking;
pub mod teams;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared route-test harness: a JSONL-backed state in a temp dir plus
    //! one-shot request helpers.

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::state::AppState;
    use crate::storage::{JsonlStore, StorageConfig};

    pub fn setup_state(dir: &std::path::Path) -> AppState {
        let store = Arc::new(JsonlStore::new(StorageConfig::new(dir.to_path_buf())));
        AppState::load(store).unwrap()
    }

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    /// Register `names` teams through the API and generate the schedule.
    pub async fn seed_schedule(app: &axum::Router, names: &[&str]) {
        for name in names {
            let body = format!(
                r#"{{"name":"{name}","player1":"P1","player2":"P2"}}"#
            );
            let (status, _) = post_json(app.clone(), "/api/teams", &body).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (status, _) = post_json(app.clone(), "/api/schedule", "{}").await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
