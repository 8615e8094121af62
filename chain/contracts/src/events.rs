//! Contract events
//!
//! Events are immutable records emitted by contract operations and form the
//! canonical off-system audit trail. Each payload serializes losslessly so
//! external auditors can replay the full credit and payout history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::AccountId;

/// A pending credit was added for a beneficiary
///
/// Emitted once per successful credit-recording call; `amount_added` is the
/// delta, not the resulting balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRecorded {
    pub beneficiary: AccountId,
    pub amount_added: Decimal,
}

/// A beneficiary pulled their full pending credit
///
/// `amount_transferred` always equals the credit that was zeroed; partial
/// withdrawals do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalCompleted {
    pub beneficiary: AccountId,
    pub amount_transferred: Decimal,
}

/// Enum wrapper for all contract events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    CreditRecorded(CreditRecorded),
    WithdrawalCompleted(WithdrawalCompleted),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_recorded_serialization() {
        let event = CreditRecorded {
            beneficiary: AccountId::new(),
            amount_added: Decimal::from(17_000_000_000_000_000_000u64),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: CreditRecorded = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_withdrawal_completed_serialization() {
        let event = WithdrawalCompleted {
            beneficiary: AccountId::new(),
            amount_transferred: Decimal::from(100u64),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: WithdrawalCompleted = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_contract_event_enum_variant() {
        let event = ContractEvent::CreditRecorded(CreditRecorded {
            beneficiary: AccountId::new(),
            amount_added: Decimal::ONE,
        });
        assert!(matches!(event, ContractEvent::CreditRecorded(_)));
    }

    #[test]
    fn test_event_round_trip_through_wrapper() {
        let event = ContractEvent::WithdrawalCompleted(WithdrawalCompleted {
            beneficiary: AccountId::new(),
            amount_transferred: Decimal::from(42u64),
        });
        let json = serde_json::to_string(&event).unwrap();
        let deser: ContractEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }
}
