use std::sync::atomic::Ordering;

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::{
    AppState,
    models::common::{SendMessageRequest, SendMessageResponse},
    utils::normalize_chat_id,
};

#[utoipa::path(
    post,
    path = "/send-message",
    tag = "control",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message sent", body = SendMessageResponse),
        (status = 500, description = "Bridge send failed", body = SendMessageResponse),
        (status = 503, description = "WhatsApp session not ready yet", body = SendMessageResponse)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> (StatusCode, Json<SendMessageResponse>) {
    // Reject up front instead of failing deep inside the bridge call.
    if !state.ready.load(Ordering::SeqCst) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SendMessageResponse::err("whatsapp session not ready")),
        );
    }

    let chat_id = normalize_chat_id(&req.number);
    match state.whatsapp.send_text(&chat_id, &req.message).await {
        Ok(()) => (StatusCode::OK, Json(SendMessageResponse::ok())),
        Err(err) => {
            warn!("send-message to {chat_id} failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendMessageResponse::err(err.to_string())),
            )
        }
    }
}
