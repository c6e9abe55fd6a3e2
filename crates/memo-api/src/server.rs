//! Axum server and routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use memo_core::Skill;
use memo_types::{RequestEnvelope, ResponseEnvelope};
use std::sync::Arc;

pub struct AppState {
    pub skill: Skill,
    /// When set, envelopes carrying any other application id are rejected
    /// before dispatch.
    pub application_id: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handle_turn))
        .route("/health", get(handle_health))
        .with_state(state)
}

async fn handle_turn(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, StatusCode> {
    if let Some(ref expected) = state.application_id {
        if envelope.application_id() != expected {
            tracing::warn!(
                application_id = envelope.application_id(),
                "rejecting envelope for unknown application"
            );
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    tracing::info!(request = envelope.request.kind(), "turn received");
    Ok(Json(state.skill.invoke(&envelope).await))
}

async fn handle_health() -> &'static str {
    "ok"
}
