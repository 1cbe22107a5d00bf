use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize structured JSON logging for a host application
///
/// RUST_LOG takes precedence; the configured level applies otherwise. A
/// no-op when tracing is disabled in the configuration. Library code only
/// emits `tracing` events and never installs a subscriber on its own.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    if !config.tracing_enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
        .with(filter)
        .init();

    tracing::info!("onboarding telemetry initialized with structured logging");
    Ok(())
}
