mod assessment;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::assessment::careers::RiasecCareerMatcher;
use crate::assessment::config::AssessmentConfig;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Load scoring tables (embedded default unless ASSESSMENT_CONFIG_PATH is set)
    let mut assessment = AssessmentConfig::load(config.assessment_config_path.as_deref())?;
    if let Some(locale) = &config.default_locale {
        assessment = assessment
            .with_default_locale(locale)
            .context("DEFAULT_LOCALE must be one of the configured locales")?;
    }
    info!("Default locale: {}", assessment.default_locale);

    // Initialize career matcher (RiasecCareerMatcher by default)
    let career_matcher = Arc::new(RiasecCareerMatcher);

    // Build app state
    let state = AppState {
        config: config.clone(),
        assessment: Arc::new(assessment),
        career_matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
