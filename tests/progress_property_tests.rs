//! Property-based tests for the progress engine invariants
//!
//! Generates arbitrary profile snapshots and checks the aggregate invariants
//! that must hold for every one of them.

use chrono::{TimeZone, Utc};
use invest_onboarding::{
    CertificateStatus, ContractStatus, KycStatus, ProfileSnapshot, ProgressEngine, StepStatus,
    StepId,
};
use proptest::prelude::*;

fn kyc_status_strategy() -> impl Strategy<Value = KycStatus> {
    prop_oneof![
        Just(KycStatus::Pending),
        Just(KycStatus::Processing),
        Just(KycStatus::Verified),
        Just(KycStatus::Rejected),
    ]
}

fn contract_status_strategy() -> impl Strategy<Value = Option<ContractStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(ContractStatus::Draft)),
        Just(Some(ContractStatus::SignedInvestor)),
        Just(Some(ContractStatus::SignedAll)),
        Just(Some(ContractStatus::Rejected)),
    ]
}

fn certificate_status_strategy() -> impl Strategy<Value = Option<CertificateStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(CertificateStatus::Pending)),
        Just(Some(CertificateStatus::Allocated)),
        Just(Some(CertificateStatus::Active)),
    ]
}

prop_compose! {
    fn snapshot_strategy()(
        kyc_status in kyc_status_strategy(),
        bank_primary in any::<bool>(),
        two_fa_enabled in any::<bool>(),
        wallet_available in 0u64..=3_000_000,
        risk_acknowledged in any::<bool>(),
        contract_status in contract_status_strategy(),
        certificate_status in certificate_status_strategy(),
    ) -> ProfileSnapshot {
        ProfileSnapshot {
            kyc_status,
            bank_primary,
            two_fa_enabled,
            wallet_available,
            risk_acknowledged_at: risk_acknowledged
                .then(|| Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()),
            contract_status,
            certificate_status,
            intent_draft: None,
        }
    }
}

proptest! {
    #[test]
    fn percentage_is_bounded_and_equals_completed_weight_sum(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        let percentage = engine.aggregate_percentage(&results);

        prop_assert!(percentage <= 100);
        let expected: u32 = results
            .iter()
            .filter(|r| r.status == StepStatus::Completed)
            .map(|r| r.weight as u32)
            .sum();
        prop_assert_eq!(percentage as u32, expected);
    }

    #[test]
    fn evaluation_is_idempotent(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        prop_assert_eq!(engine.evaluate(&snapshot), engine.evaluate(&snapshot));
    }

    #[test]
    fn readiness_means_every_required_step_completed(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        let all_required_done = results
            .iter()
            .filter(|r| r.required)
            .all(|r| r.status == StepStatus::Completed);
        prop_assert_eq!(engine.is_ready_to_proceed(&results), all_required_done);
    }

    #[test]
    fn next_step_never_returns_a_completed_step(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        if let Some(next) = engine.next_step(&results) {
            prop_assert_ne!(next.status, StepStatus::Completed);
        }
    }

    #[test]
    fn next_step_prefers_required_steps(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        let open_required = results
            .iter()
            .any(|r| r.required && r.status != StepStatus::Completed);
        if let Some(next) = engine.next_step(&results) {
            if open_required {
                prop_assert!(next.required, "optional {} preempted a required step", next.id);
            }
        }
    }

    #[test]
    fn attempted_but_unverified_kyc_blocks_bank_and_risk(snapshot in snapshot_strategy()) {
        prop_assume!(matches!(snapshot.kyc_status, KycStatus::Processing | KycStatus::Rejected));
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        for id in [StepId::Bank, StepId::Risk] {
            let result = results.iter().find(|r| r.id == id).unwrap();
            prop_assert_eq!(result.status, StepStatus::Blocked);
            prop_assert!(result.blocking_reason.is_some());
        }
    }

    #[test]
    fn blocked_results_always_carry_a_reason(snapshot in snapshot_strategy()) {
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        for result in &results {
            prop_assert_eq!(
                result.status == StepStatus::Blocked,
                result.blocking_reason.is_some()
            );
        }
    }

    #[test]
    fn pristine_kyc_never_yields_blocked_steps(snapshot in snapshot_strategy()) {
        prop_assume!(snapshot.kyc_status == KycStatus::Pending);
        let engine = ProgressEngine::default();
        let results = engine.evaluate(&snapshot);
        for result in &results {
            prop_assert_ne!(result.status, StepStatus::Blocked);
        }
    }
}
