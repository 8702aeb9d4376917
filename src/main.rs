//! swap-gateway server entry point.
//!
//! Starts the Axum HTTP server and kicks off the one price fetch of the
//! process lifetime.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use swap_gateway::api;
use swap_gateway::app_state::AppState;
use swap_gateway::config::GatewayConfig;
use swap_gateway::domain::TokenCatalog;
use swap_gateway::feed::{FeedHandle, PriceFeedClient};
use swap_gateway::service::SwapService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting swap-gateway");

    // Build feed layer
    let client = PriceFeedClient::new(
        config.price_feed_url.clone(),
        Duration::from_secs(config.price_feed_timeout_secs),
    )?;
    let feed = FeedHandle::new();

    // Build service layer
    let swap_service = Arc::new(SwapService::new(
        TokenCatalog::default(),
        client,
        feed,
        Duration::from_millis(config.message_ttl_ms),
    ));

    // The single price fetch of this process lifetime.
    Arc::clone(&swap_service).spawn_price_refresh();

    // Build application state
    let app_state = AppState {
        swap_service: Arc::clone(&swap_service),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    // A fetch still in flight must not touch state past this point.
    swap_service.shutdown();

    Ok(())
}
