//! NutriCycle HTTP server.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nutricycle::adapters::{
    app_router, demo_profiles, InMemoryProfileRegistry, RecommendationHandlers,
};
use nutricycle::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let json_logs = config.server.json_logs();
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(|| fmt::layer().with_target(false)))
        .with(filter)
        .init();

    let registry = if config.features.seed_demo_profiles {
        let profiles = demo_profiles()?;
        info!(count = profiles.len(), "Seeding demo profiles");
        InMemoryProfileRegistry::with_profiles(profiles)
    } else {
        InMemoryProfileRegistry::new()
    };

    let handlers = RecommendationHandlers::from_registry(Arc::new(registry), config.cycle.clone())
        .with_verbose_errors(config.features.verbose_errors);
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        timeout_secs = config.server.request_timeout_secs,
        "NutriCycle server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
