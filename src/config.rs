use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the onboarding library
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Progress engine settings
    pub progress: ProgressConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

/// Tunables for the progress engine and step activation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Wallet balance at which the topup step counts as completed
    pub topup_threshold: u64,
    /// Key-value store key the intent draft is preserved under
    pub draft_storage_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level directive applied when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            topup_threshold: 1_000_000,
            draft_storage_key: "invest.intent.draft".to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            tracing_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl OnboardingConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (onboarding.toml)
    /// 3. Environment variables (prefixed with ONBOARDING__)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("onboarding.toml").exists() {
            builder = builder.add_source(File::with_name("onboarding"));
        }

        builder = builder.add_source(
            Environment::with_prefix("ONBOARDING")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let onboarding_config: OnboardingConfig = config.try_deserialize()?;

        Ok(onboarding_config)
    }
}
