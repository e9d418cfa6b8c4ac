//! Chat Routes - Divination and persona questions

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::Instrument;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HexagramData};
use crate::AppState;

/// Error text for a missing or empty question
pub const EMPTY_MESSAGE_ERROR: &str = "請輸入問題";

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Ask a question
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reading or persona reply", body = ChatResponse),
        (status = 400, description = "Missing or empty message", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected chat body: {}", rejection.body_text());
        bad_request(rejection.body_text())
    })?;

    let message = match payload.message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => return Err(bad_request(EMPTY_MESSAGE_ERROR)),
    };

    let request_id = uuid::Uuid::new_v4();
    let outcome = state
        .oracle
        .chat(message, payload.draw_numbers())
        .instrument(tracing::info_span!("chat", %request_id))
        .await;

    Ok(Json(ChatResponse {
        response: outcome.response,
        intent: outcome.intent,
        hexagram_data: outcome.hexagram.map(HexagramData::from),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
