use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProgressConfig;
use crate::snapshot::ProfileSnapshot;

use super::rules::rule_for;
use super::steps::{StepId, OPTIONAL_ORDER, REQUIRED_ORDER, STEP_DEFINITIONS};

/// Computed state of one onboarding step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// One evaluated step, recomputed fresh on every evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub id: StepId,
    pub name: String,
    pub required: bool,
    pub weight: u8,
    pub status: StepStatus,
    pub deep_link: String,
    pub description: String,
    pub blocking_reason: Option<String>,
}

/// Maps a profile snapshot to evaluated step results and aggregate queries
///
/// Evaluation is a pure function of the snapshot and the configured topup
/// threshold: no state survives between calls, and no structurally valid
/// snapshot can make it panic.
#[derive(Debug, Clone, Default)]
pub struct ProgressEngine {
    config: ProgressConfig,
}

impl ProgressEngine {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Evaluate every step rule against the snapshot, in table order
    pub fn evaluate(&self, snapshot: &ProfileSnapshot) -> Vec<StepResult> {
        let results: Vec<StepResult> = STEP_DEFINITIONS
            .iter()
            .map(|definition| {
                let rule = rule_for(definition.id);
                // Blocked wins: a satisfied completion field on a step whose
                // prerequisite regressed must still render as blocked
                let (status, blocking_reason) = if let Some(reason) = (rule.blocked)(snapshot) {
                    (StepStatus::Blocked, Some(reason.to_string()))
                } else if (rule.completed)(snapshot, &self.config) {
                    (StepStatus::Completed, None)
                } else if (rule.in_progress)(snapshot, &self.config) {
                    (StepStatus::InProgress, None)
                } else {
                    (StepStatus::NotStarted, None)
                };

                StepResult {
                    id: definition.id,
                    name: definition.name.to_string(),
                    required: definition.required,
                    weight: definition.weight,
                    status,
                    deep_link: definition.deep_link.to_string(),
                    description: definition.description.to_string(),
                    blocking_reason,
                }
            })
            .collect();

        debug!(
            completed = results
                .iter()
                .filter(|r| r.status == StepStatus::Completed)
                .count(),
            blocked = results
                .iter()
                .filter(|r| r.status == StepStatus::Blocked)
                .count(),
            percentage = self.aggregate_percentage(&results),
            "evaluated onboarding progress"
        );

        results
    }

    /// Sum of weights of completed steps, always within 0..=100
    pub fn aggregate_percentage(&self, results: &[StepResult]) -> u8 {
        let sum: u32 = results
            .iter()
            .filter(|result| result.status == StepStatus::Completed)
            .map(|result| result.weight as u32)
            .sum();
        sum.min(100) as u8
    }

    /// First non-completed step, scanning required order then optional order
    pub fn next_step<'a>(&self, results: &'a [StepResult]) -> Option<&'a StepResult> {
        REQUIRED_ORDER
            .iter()
            .chain(OPTIONAL_ORDER.iter())
            .filter_map(|id| results.iter().find(|result| result.id == *id))
            .find(|result| result.status != StepStatus::Completed)
    }

    /// True once every required step is completed; gates "proceed to invest"
    pub fn is_ready_to_proceed(&self, results: &[StepResult]) -> bool {
        results
            .iter()
            .filter(|result| result.required)
            .all(|result| result.status == StepStatus::Completed)
    }
}
