use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workflow_adapter::{AppState, build_router, config::Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env().expect("Failed to load configuration");
    // Compute before moving state anywhere
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    let state = AppState::new(cfg);
    let app = build_router(state);

    // axum 0.7 style:
    let listener = TcpListener::bind(&addr).await.expect("bind listener");

    tracing::info!("Workflow Adapter listening on http://{addr}");
    tracing::info!("Waiting for bridge events; scan the pairing code when it appears");
    axum::serve(listener, app).await.expect("server error");
}
