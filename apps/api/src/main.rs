mod advice;
mod config;
mod errors;
mod extract;
mod interview;
mod llm_client;
mod matching;
mod models;
mod report;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::SkillsDatabase;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    let skills = load_skills(&config)?;
    info!("Skills database loaded ({} known skills)", skills.len());

    let state = AppState::new(&config, skills)?;
    if state.live_mode_available() {
        info!("Live mode enabled (model: {})", llm_client::MODEL);
    } else {
        info!("ANTHROPIC_API_KEY not set; serving mock content only");
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The override file when configured and readable, otherwise the bundled list.
fn load_skills(config: &Config) -> Result<SkillsDatabase> {
    if let Some(path) = config.skills_db_path.as_deref() {
        match SkillsDatabase::load(Path::new(path)) {
            Ok(db) => return Ok(db),
            Err(e) => warn!("Falling back to the bundled skills database: {e}"),
        }
    }
    Ok(SkillsDatabase::bundled()?)
}
