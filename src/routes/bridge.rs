use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::{AppState, handlers, models::bridge::BridgeWebhook};

#[utoipa::path(
    post,
    path = "/webhooks/whatsapp",
    tag = "webhooks",
    request_body = BridgeWebhook,
    responses(
        (status = 200, description = "Event accepted"),
        (status = 400, description = "Malformed event or payload", body = crate::models::common::ErrorMessage)
    )
)]
pub async fn receive_bridge(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<StatusCode, (StatusCode, String)> {
    let webhook: BridgeWebhook = serde_json::from_value(payload).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to deserialize webhook payload: {err}"),
        )
    })?;

    info!(
        "Incoming bridge event (id={} event={} session={})",
        webhook.id.as_deref().unwrap_or("-"),
        webhook.event,
        webhook.session.as_deref().unwrap_or("-"),
    );

    // Message handling runs on the sender's queue; the bridge expects 200 quickly.
    handlers::dispatch_event(webhook, state)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("handler error: {e}")))?;

    Ok(StatusCode::OK)
}
