//! Fighter Insights server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fighter_insights::adapters::http::{build_router, AppState};
use fighter_insights::adapters::memory::{
    seed_demo_data, InMemoryAnalysisRepository, InMemoryFighterRepository,
    InMemoryPerformanceRepository, InMemoryTrainingSessionRepository,
};
use fighter_insights::adapters::random::{SeededRandomSource, ThreadRandomSource};
use fighter_insights::config::AppConfig;
use fighter_insights::ports::RandomSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let fighters = Arc::new(InMemoryFighterRepository::new());
    let analyses = Arc::new(InMemoryAnalysisRepository::new());
    let training = Arc::new(InMemoryTrainingSessionRepository::new());
    let performance = Arc::new(InMemoryPerformanceRepository::new());

    if config.storage.seed_demo_data {
        seed_demo_data(
            fighters.as_ref(),
            analyses.as_ref(),
            training.as_ref(),
            performance.as_ref(),
        )
        .await?;
    }

    let rng: Arc<dyn RandomSource> = match config.analysis.random_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource::new()),
    };

    let state = AppState::new(
        fighters,
        analyses,
        training,
        performance,
        rng,
        config.dashboard.accuracy_label.as_str(),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
