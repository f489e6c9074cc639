//! HTTP handler for the chat API
//!
//! - POST /api/chat — answer a free-text message
//!
//! No live AI backend is integrated; every answer comes from the scripted
//! responder and is flagged `fallback: true` so the client can tell.

use crate::chat::responder::Responder;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for the chat handler
#[derive(Clone)]
pub struct ChatState {
    pub responder: Arc<Responder>,
}

/// Create the chat router
pub fn chat_router(state: ChatState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,

    /// Accepted for client compatibility; the responder is stateless
    #[serde(rename = "sessionId")]
    #[allow(dead_code)]
    session_id: Option<String>,
}

/// POST /api/chat
async fn chat(
    State(state): State<ChatState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    if request.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Message is required"})),
        );
    }

    let response = state.responder.respond(&request.message);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "response": response,
            "fallback": true,
        })),
    )
}
