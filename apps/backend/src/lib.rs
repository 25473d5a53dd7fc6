pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::GenerationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generation: Arc<GenerationService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            generation: Arc::new(GenerationService::new(&config)),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(routes::generate::study_materials))
        .route("/api/flashcards", post(routes::generate::flashcards))
        .route("/api/quiz", post(routes::generate::quiz))
        .route("/api/quiz/score", post(routes::quiz::score_answers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        max_text_length = config.max_text_length,
        max_flashcards = config.limits.max_flashcards,
        max_quiz_questions = config.limits.max_quiz_questions,
        seeded = config.seed.is_some(),
        "Loaded configuration"
    );

    let addr = config.addr();
    let app = router(AppState::new(&config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
