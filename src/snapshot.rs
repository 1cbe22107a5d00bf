use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// KYC verification state as reported by the account aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// Never submitted (the pristine default)
    #[default]
    Pending,
    /// Submitted, under review
    Processing,
    Verified,
    Rejected,
}

/// Investment contract signing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    /// Investor has signed, counterparty signature outstanding
    SignedInvestor,
    SignedAll,
    Rejected,
}

/// Certificate issuance state for a funded package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    Pending,
    Allocated,
    Active,
}

/// A saved in-progress investment commitment
///
/// Preserved across a detour through a prerequisite flow (e.g. the user is
/// sent off to finish KYC mid-investment) and read back on return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDraft {
    pub id: Uuid,
    /// Target investment group/package
    pub group_id: String,
    pub amount: u64,
    pub expires_at: DateTime<Utc>,
    /// Route to resume once the detour completes
    pub return_path: Option<String>,
}

/// Read-only view of a user's onboarding-relevant account state
///
/// Assembled by a collaborator that aggregates account, wallet, contract and
/// certificate data. Every optional field absent means "not yet satisfied",
/// never an error: evaluation is total over any structurally valid snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSnapshot {
    pub kyc_status: KycStatus,
    /// Whether a primary verified payout account exists
    pub bank_primary: bool,
    pub two_fa_enabled: bool,
    /// Wallet balance available for contribution
    pub wallet_available: u64,
    pub risk_acknowledged_at: Option<DateTime<Utc>>,
    pub contract_status: Option<ContractStatus>,
    pub certificate_status: Option<CertificateStatus>,
    pub intent_draft: Option<IntentDraft>,
}

impl ProfileSnapshot {
    /// True once the user has engaged the onboarding flow at all
    ///
    /// A pristine profile (KYC never submitted) reports no blocked steps:
    /// nothing has been attempted, so there is nothing to block on yet.
    pub fn journey_started(&self) -> bool {
        self.kyc_status != KycStatus::Pending
    }
}
