mod config;
mod errors;
mod generation;
mod layout;
mod llm_client;
mod models;
mod routes;
mod state;
mod theme;
mod timeline;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::StoryGenerator;
use crate::llm_client::{GeminiClient, GenerativeBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::timeline::seed::{seed_entries, seed_profile};
use crate::timeline::{Session, TimelineController};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Journey v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory timeline
    let session = Session::new(seed_profile(), seed_entries());
    info!("Seeded timeline with {} entries", session.entries().len());
    let timeline = TimelineController::new(session, config.autoplay_interval);

    // Initialize generative backend (key is read per call, so it may appear later)
    let backend = GeminiClient::from_env()?;
    if backend.is_available() {
        info!("Generative backend configured (model: {})", llm_client::TEXT_MODEL);
    } else {
        warn!(
            "{} not set, generation will return fallback drafts",
            llm_client::API_KEY_VAR
        );
    }
    let generator = StoryGenerator::new(Arc::new(backend));

    let state = AppState {
        timeline,
        generator,
    };

    // The renderer is a browser front-end served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
