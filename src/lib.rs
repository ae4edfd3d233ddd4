pub mod apidoc;
pub mod config;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod synch;
pub mod utils;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use axum::{
    Router,
    routing::{get, post},
};
use config::Config;
use services::whatsapp::WhatsappClient;
use synch::sender_queue::SenderQueues;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared handles injected into every route and handler. Built once in `main`
/// (or in a test harness) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub http: reqwest::Client,
    pub whatsapp: WhatsappClient,
    /// Flipped by the bridge's `ready` event; gates the control endpoint.
    pub ready: Arc<AtomicBool>,
    pub queues: Arc<SenderQueues>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let http = reqwest::Client::new();
        let whatsapp = WhatsappClient::new(&cfg, http.clone());
        Self {
            cfg,
            http,
            whatsapp,
            ready: Arc::new(AtomicBool::new(false)),
            queues: Arc::new(SenderQueues::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhooks/whatsapp", post(routes::bridge::receive_bridge))
        .route("/send-message", post(routes::send::send_message))
        .route("/health", get(routes::health::health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()))
        .with_state(state)
}
