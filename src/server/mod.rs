pub mod handlers;
pub mod types;

use crate::{Result, config::Config, vlm::OllamaVlmClient};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/vlm", post(handlers::generate_problem))
        .route("/api/vlm/evaluate", post(handlers::evaluate_answer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Model load happens before the listener binds; a failure here is fatal
    // and no request is ever served.
    let vlm = OllamaVlmClient::connect(&config.model).await?;

    let state = AppState {
        vlm: Arc::new(vlm),
        model_loaded: true,
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
