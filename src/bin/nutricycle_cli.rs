//! NutriCycle interactive terminal menu.

use std::error::Error;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nutricycle::adapters::{demo_profiles, InMemoryProfileRegistry, Menu};
use nutricycle::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // Keep the menu readable: only warnings unless RUST_LOG says otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    let registry = if config.features.seed_demo_profiles {
        InMemoryProfileRegistry::with_profiles(demo_profiles()?)
    } else {
        InMemoryProfileRegistry::new()
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(Arc::new(registry), stdin.lock(), io::stdout());
    menu.run().await?;
    Ok(())
}
