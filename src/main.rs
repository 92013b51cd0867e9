//! Freebie USSD - session responder for a USSD aggregator webhook
//!
//! Each POST carries one turn of a menu-driven session. The responder is
//! stateless; continuity rides on the `ClientState` the aggregator echoes.

mod api;
mod config;
mod session;
mod shutdown;

use api::create_router;
use config::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freebie_ussd=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = ServerConfig::from_env()?;

    // The aggregator calls from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router()
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.addr();
    tracing::info!("Freebie USSD responder listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
