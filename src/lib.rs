// Invest Onboarding Library - Investor Onboarding Progress Engine
// This exposes the progress engine, step activation, and storage components

pub mod activation;
pub mod config;
pub mod progress;
pub mod snapshot;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use activation::{
    ActivationContext, ActivationError, ActivationOutcome, NavigationRequest, Navigator,
    StepActivationCoordinator,
};
pub use config::{ObservabilityConfig, OnboardingConfig, ProgressConfig};
pub use progress::{
    definition_for, ProgressEngine, StepDefinition, StepId, StepResult, StepStatus,
    OPTIONAL_ORDER, REQUIRED_ORDER, STEP_DEFINITIONS,
};
pub use snapshot::{CertificateStatus, ContractStatus, IntentDraft, KycStatus, ProfileSnapshot};
pub use store::{
    KeyValueStore, MemoryStore, PortfolioEntry, PortfolioStore, StoreError, SubscriptionId,
};
pub use telemetry::init_telemetry;
