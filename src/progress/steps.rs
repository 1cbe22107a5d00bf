use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one onboarding step in the fixed rule table
///
/// Order and identity are fixed process-wide; evaluation always produces one
/// result per id in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Kyc,
    Bank,
    TwoFa,
    Topup,
    Risk,
    Esign,
    Certificate,
    Notify,
    Reinvest,
}

impl StepId {
    /// All step ids in table (display) order
    pub fn all() -> [StepId; 9] {
        [
            StepId::Kyc,
            StepId::Bank,
            StepId::TwoFa,
            StepId::Topup,
            StepId::Risk,
            StepId::Esign,
            StepId::Certificate,
            StepId::Notify,
            StepId::Reinvest,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Kyc => "kyc",
            StepId::Bank => "bank",
            StepId::TwoFa => "2fa",
            StepId::Topup => "topup",
            StepId::Risk => "risk",
            StepId::Esign => "esign",
            StepId::Certificate => "certificate",
            StepId::Notify => "notify",
            StepId::Reinvest => "reinvest",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static definition of one onboarding step
///
/// The `completion_criteria` text is documentation for support staff and
/// admin screens, not executable logic; the executable form lives in the
/// rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: StepId,
    pub name: &'static str,
    pub required: bool,
    pub weight: u8,
    pub deep_link: &'static str,
    pub description: &'static str,
    pub completion_criteria: &'static str,
}

/// The fixed 9-entry step table
///
/// Weighted steps (required plus the weighted optional 2FA step) sum to 100;
/// `notify` and `reinvest` carry weight 0 and never move the percentage.
pub const STEP_DEFINITIONS: [StepDefinition; 9] = [
    StepDefinition {
        id: StepId::Kyc,
        name: "Identity verification (KYC)",
        required: true,
        weight: 25,
        deep_link: "/account/kyc",
        description: "Verify your identity with a government-issued document",
        completion_criteria: "KYC review has come back verified",
    },
    StepDefinition {
        id: StepId::Bank,
        name: "Link payout bank account",
        required: true,
        weight: 15,
        deep_link: "/account/bank",
        description: "Add and verify a primary bank account for payouts",
        completion_criteria: "A primary verified payout account exists",
    },
    StepDefinition {
        id: StepId::TwoFa,
        name: "Two-factor authentication",
        required: false,
        weight: 10,
        deep_link: "/settings/security/2fa",
        description: "Protect your account with a second sign-in factor",
        completion_criteria: "Two-factor authentication is enabled",
    },
    StepDefinition {
        id: StepId::Topup,
        name: "Top up your wallet",
        required: true,
        weight: 15,
        deep_link: "/wallet/topup",
        description: "Fund your wallet up to the minimum investable balance",
        completion_criteria: "Available balance meets the configured threshold",
    },
    StepDefinition {
        id: StepId::Risk,
        name: "Risk acknowledgement",
        required: true,
        weight: 10,
        deep_link: "/onboarding/risk",
        description: "Read and acknowledge the investment risk disclosure",
        completion_criteria: "Risk disclosure has been acknowledged",
    },
    StepDefinition {
        id: StepId::Esign,
        name: "Sign investment contract",
        required: true,
        weight: 15,
        deep_link: "/contracts/sign",
        description: "Electronically sign the framework investment contract",
        completion_criteria: "Contract is signed by all parties",
    },
    StepDefinition {
        id: StepId::Certificate,
        name: "Certificate issuance",
        required: true,
        weight: 10,
        deep_link: "/portfolio/certificates",
        description: "Receive the certificate for your allocated interest",
        completion_criteria: "A certificate has been allocated",
    },
    StepDefinition {
        id: StepId::Notify,
        name: "Enable notifications",
        required: false,
        weight: 0,
        deep_link: "/settings/notifications",
        description: "Get notified about payouts and auction results",
        completion_criteria: "Push or email notifications are enabled",
    },
    StepDefinition {
        id: StepId::Reinvest,
        name: "Auto-reinvest preferences",
        required: false,
        weight: 0,
        deep_link: "/settings/reinvest",
        description: "Choose what happens to matured principal and interest",
        completion_criteria: "A reinvestment preference has been saved",
    },
];

/// Scan order for `next_step`: required steps first
pub const REQUIRED_ORDER: [StepId; 6] = [
    StepId::Kyc,
    StepId::Bank,
    StepId::Topup,
    StepId::Risk,
    StepId::Esign,
    StepId::Certificate,
];

/// Scan order for `next_step` once every required step is complete
pub const OPTIONAL_ORDER: [StepId; 3] = [StepId::TwoFa, StepId::Notify, StepId::Reinvest];

/// Look up the static definition for a step id
pub fn definition_for(id: StepId) -> &'static StepDefinition {
    STEP_DEFINITIONS
        .iter()
        .find(|definition| definition.id == id)
        .unwrap_or_else(|| unreachable!("every StepId has a table entry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_entry_per_id_in_order() {
        let ids: Vec<StepId> = STEP_DEFINITIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids, StepId::all().to_vec());
    }

    #[test]
    fn test_weighted_steps_sum_to_one_hundred() {
        let total: u32 = STEP_DEFINITIONS.iter().map(|d| d.weight as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_required_weights_define_the_baseline() {
        let required: u32 = STEP_DEFINITIONS
            .iter()
            .filter(|d| d.required)
            .map(|d| d.weight as u32)
            .sum();
        assert_eq!(required, 90);
    }

    #[test]
    fn test_zero_weight_steps_are_optional() {
        for definition in STEP_DEFINITIONS.iter().filter(|d| d.weight == 0) {
            assert!(!definition.required, "{} must be optional", definition.id);
        }
    }

    #[test]
    fn test_priority_orders_cover_every_step_once() {
        let mut ids: Vec<StepId> = REQUIRED_ORDER
            .iter()
            .chain(OPTIONAL_ORDER.iter())
            .copied()
            .collect();
        ids.sort_by_key(|id| id.as_str());
        let mut all: Vec<StepId> = StepId::all().to_vec();
        all.sort_by_key(|id| id.as_str());
        assert_eq!(ids, all);
    }

    #[test]
    fn test_required_order_entries_are_required_steps() {
        for id in REQUIRED_ORDER {
            assert!(definition_for(id).required, "{id} must be required");
        }
        for id in OPTIONAL_ORDER {
            assert!(!definition_for(id).required, "{id} must be optional");
        }
    }

    #[test]
    fn test_step_id_display() {
        assert_eq!(StepId::TwoFa.to_string(), "2fa");
        assert_eq!(StepId::Certificate.to_string(), "certificate");
    }
}
