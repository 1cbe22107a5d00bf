use crate::config::ProgressConfig;
use crate::snapshot::{CertificateStatus, ContractStatus, KycStatus, ProfileSnapshot};

use super::steps::StepId;

/// Pure rule record for one onboarding step
///
/// Each predicate reads raw snapshot fields only, never another step's
/// computed result. Resolution precedence is blocked, then completed, then
/// in-progress; anything else is not started.
pub struct StepRule {
    pub completed: fn(&ProfileSnapshot, &ProgressConfig) -> bool,
    pub in_progress: fn(&ProfileSnapshot, &ProgressConfig) -> bool,
    pub blocked: fn(&ProfileSnapshot) -> Option<&'static str>,
}

fn never_in_progress(_: &ProfileSnapshot, _: &ProgressConfig) -> bool {
    false
}

fn never_blocked(_: &ProfileSnapshot) -> Option<&'static str> {
    None
}

fn never_completed(_: &ProfileSnapshot, _: &ProgressConfig) -> bool {
    false
}

const KYC: StepRule = StepRule {
    completed: |snapshot, _| snapshot.kyc_status == KycStatus::Verified,
    in_progress: |snapshot, _| snapshot.kyc_status == KycStatus::Processing,
    blocked: |snapshot| {
        (snapshot.kyc_status == KycStatus::Rejected).then_some("KYC rejected, must redo")
    },
};

const BANK: StepRule = StepRule {
    completed: |snapshot, _| snapshot.bank_primary,
    in_progress: never_in_progress,
    blocked: |snapshot| {
        (snapshot.journey_started() && snapshot.kyc_status != KycStatus::Verified)
            .then_some("Must complete KYC first")
    },
};

const TWO_FA: StepRule = StepRule {
    completed: |snapshot, _| snapshot.two_fa_enabled,
    in_progress: never_in_progress,
    blocked: never_blocked,
};

const TOPUP: StepRule = StepRule {
    completed: |snapshot, config| snapshot.wallet_available >= config.topup_threshold,
    in_progress: |snapshot, config| {
        snapshot.wallet_available > 0 && snapshot.wallet_available < config.topup_threshold
    },
    blocked: never_blocked,
};

const RISK: StepRule = StepRule {
    completed: |snapshot, _| snapshot.risk_acknowledged_at.is_some(),
    in_progress: never_in_progress,
    blocked: |snapshot| {
        (snapshot.journey_started()
            && (!snapshot.bank_primary || snapshot.kyc_status != KycStatus::Verified))
            .then_some("Must complete KYC and add bank account first")
    },
};

const ESIGN: StepRule = StepRule {
    completed: |snapshot, _| snapshot.contract_status == Some(ContractStatus::SignedAll),
    in_progress: |snapshot, _| snapshot.contract_status == Some(ContractStatus::SignedInvestor),
    blocked: |snapshot| {
        (snapshot.journey_started() && snapshot.risk_acknowledged_at.is_none())
            .then_some("Must acknowledge risk first")
    },
};

const CERTIFICATE: StepRule = StepRule {
    completed: |snapshot, _| snapshot.certificate_status == Some(CertificateStatus::Allocated),
    in_progress: |snapshot, _| snapshot.certificate_status == Some(CertificateStatus::Pending),
    blocked: |snapshot| {
        (snapshot.journey_started()
            && snapshot.contract_status != Some(ContractStatus::SignedAll))
            .then_some("Must complete contract signing first")
    },
};

// notify and reinvest stay not_started until the surrounding application
// starts reporting them; they carry weight 0 either way
const INERT: StepRule = StepRule {
    completed: never_completed,
    in_progress: never_in_progress,
    blocked: never_blocked,
};

/// Dispatch table: step id to its rule record
pub fn rule_for(id: StepId) -> &'static StepRule {
    match id {
        StepId::Kyc => &KYC,
        StepId::Bank => &BANK,
        StepId::TwoFa => &TWO_FA,
        StepId::Topup => &TOPUP,
        StepId::Risk => &RISK,
        StepId::Esign => &ESIGN,
        StepId::Certificate => &CERTIFICATE,
        StepId::Notify | StepId::Reinvest => &INERT,
    }
}
