// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::map_service::MapService;
use crate::domain::features::FeatureRenderer;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::feed_repository::HttpFeedRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_overlay, get_legend, get_map, health_check, index, refresh_map, remove_overlay,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpFeedRepository::new(
        config.feeds.earthquakes_url.clone(),
        config.feeds.plates_url.clone(),
    ));

    // Create service (application layer)
    let map_service = MapService::new(
        repository,
        config.map_options(),
        FeatureRenderer::new(config.map.radius_scale),
    );

    let state = Arc::new(AppState::new(map_service));

    // Initial load runs in the background; map endpoints answer 503 until it lands
    let loader = state.clone();
    tokio::spawn(async move {
        loader.reload().await;
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/map", get(get_map))
        .route("/map/legend", get(get_legend))
        .route("/map/refresh", post(refresh_map))
        .route("/map/overlays/:name/add", post(add_overlay))
        .route("/map/overlays/:name/remove", post(remove_overlay))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting quake-map service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
