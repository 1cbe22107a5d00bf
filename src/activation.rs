use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::progress::{StepResult, StepStatus};
use crate::snapshot::ProfileSnapshot;
use crate::store::{KeyValueStore, StoreError};

/// Contextual state the activation was triggered from
#[derive(Debug, Clone, Default)]
pub struct ActivationContext {
    /// Id of the investment intent the user was in the middle of, if any;
    /// attached to the navigation target as a back-reference
    pub intent_id: Option<String>,
    /// Route to resume after the detour, recorded on the preserved draft
    pub resume_path: Option<String>,
}

/// Navigation target built from a step's deep-link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub path: String,
    pub return_to: Option<String>,
}

impl NavigationRequest {
    /// Render as a path with the optional returnTo query parameter
    pub fn to_url(&self) -> String {
        match &self.return_to {
            Some(intent_id) => format!("{}?returnTo={intent_id}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Navigation seam owned by the host application
///
/// `navigate` is a fire-and-forget request; `close_surface` dismisses the
/// progress widget once the user has been routed away.
pub trait Navigator {
    fn navigate(&mut self, request: &NavigationRequest);
    fn close_surface(&mut self);
}

/// What an activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Blocked steps are not interactive
    Ignored { blocking_reason: Option<String> },
    Navigated { request: NavigationRequest },
}

#[derive(Debug, Error)]
pub enum ActivationError {
    /// Draft preservation failed; navigation was not requested
    #[error("failed to preserve intent draft: {0}")]
    DraftPersist(#[from] StoreError),
}

/// Orchestrates what happens when the user activates a step
///
/// Side-effecting by design, unlike the engine: it persists the in-progress
/// intent draft, requests navigation, and closes the progress surface.
#[derive(Debug)]
pub struct StepActivationCoordinator<S: KeyValueStore, N: Navigator> {
    store: S,
    navigator: N,
    draft_key: String,
}

impl<S: KeyValueStore, N: Navigator> StepActivationCoordinator<S, N> {
    pub fn new(store: S, navigator: N, draft_key: impl Into<String>) -> Self {
        Self {
            store,
            navigator,
            draft_key: draft_key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Activate a step: preserve the draft, then navigate, then close
    ///
    /// The draft write strictly precedes the navigation request: if the user
    /// is diverted to a prerequisite flow mid-investment, the in-progress
    /// intent must already be recoverable from the store. A failed write
    /// aborts the activation so the draft is never lost by navigating first.
    pub fn activate(
        &mut self,
        step: &StepResult,
        snapshot: &ProfileSnapshot,
        context: &ActivationContext,
    ) -> Result<ActivationOutcome, ActivationError> {
        if step.status == StepStatus::Blocked {
            warn!(step = %step.id, reason = ?step.blocking_reason, "ignoring activation of blocked step");
            return Ok(ActivationOutcome::Ignored {
                blocking_reason: step.blocking_reason.clone(),
            });
        }

        if let Some(draft) = &snapshot.intent_draft {
            let mut preserved = draft.clone();
            if preserved.return_path.is_none() {
                preserved.return_path = context.resume_path.clone();
            }
            self.store.put(&self.draft_key, &preserved)?;
            debug!(draft_id = %preserved.id, key = %self.draft_key, "preserved intent draft before navigation");
        }

        let request = NavigationRequest {
            path: step.deep_link.clone(),
            return_to: context.intent_id.clone(),
        };
        self.navigator.navigate(&request);
        self.navigator.close_surface();
        info!(step = %step.id, target = %request.to_url(), "activated onboarding step");

        Ok(ActivationOutcome::Navigated { request })
    }
}
