//! Onboarding progress evaluation: the static step table, the per-step rule
//! dispatch table, and the engine that turns a profile snapshot into step
//! results and aggregate queries.

pub mod engine;
pub mod rules;
pub mod steps;

pub use engine::{ProgressEngine, StepResult, StepStatus};
pub use rules::{rule_for, StepRule};
pub use steps::{
    definition_for, StepDefinition, StepId, OPTIONAL_ORDER, REQUIRED_ORDER, STEP_DEFINITIONS,
};
