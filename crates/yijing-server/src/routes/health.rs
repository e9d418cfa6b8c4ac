//! Health Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

/// Report liveness and whether the LLM collaborator is configured
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.oracle.llm_enabled()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
