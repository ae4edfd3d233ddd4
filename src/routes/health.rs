use std::sync::atomic::Ordering;

use axum::{Json, extract::State};

use crate::{AppState, models::common::HealthResponse};

#[utoipa::path(
    get,
    path = "/health",
    tag = "control",
    responses(
        (status = 200, description = "Process health and session readiness", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running".to_string(),
        ready: state.ready.load(Ordering::SeqCst),
    })
}
