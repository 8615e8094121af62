//! Proceeds allocation: the phase-gated route into the escrow
//!
//! Sale logic that owes a party custodial value calls through here instead
//! of touching the ledger directly. The phase clock gates when credits may
//! be created at all, and the escrow invariant is checked up front: the
//! sum of pending credits never exceeds what the treasury holds, so every
//! outstanding credit stays honorable no matter which phase the system
//! enters later.

use rust_decimal::Decimal;
use types::ids::AccountId;

use crate::escrow::WithdrawalLedger;
use crate::phase::PhaseClock;
use crate::treasury::Treasury;

/// Record a credit for `beneficiary`, gated by sale phase and custody.
///
/// Returns `false` without mutating anything when the sale is not running
/// at `now`, when the resulting pending total would exceed the treasury
/// balance, or when the ledger itself rejects the input (missing or zero
/// identity, non-positive amount). Rejections are silent booleans in the
/// same probing style as the ledger's own recording operation.
pub fn allocate_proceeds(
    ledger: &mut WithdrawalLedger,
    treasury: &Treasury,
    clock: &PhaseClock,
    now: i64,
    beneficiary: Option<AccountId>,
    amount: Decimal,
) -> bool {
    if !clock.is_sale_running(now) {
        return false;
    }
    match ledger.total_pending().checked_add(amount) {
        Some(total) if total <= treasury.balance() => {}
        _ => return false,
    }
    ledger.record_credit(beneficiary, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (WithdrawalLedger, Treasury, PhaseClock) {
        let ledger = WithdrawalLedger::new(AccountId::new());
        let treasury = Treasury::with_opening_balance(Decimal::from(1000));
        let clock = PhaseClock::new(100, 200, 300).unwrap();
        (ledger, treasury, clock)
    }

    #[test]
    fn test_allocation_during_pre_open() {
        let (mut ledger, treasury, clock) = setup();
        let drawer = AccountId::new();

        assert!(allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(drawer),
            Decimal::from(100),
        ));
        assert_eq!(ledger.pending_credit_of(&drawer), Decimal::from(100));
    }

    #[test]
    fn test_allocation_during_open() {
        let (mut ledger, treasury, clock) = setup();
        let drawer = AccountId::new();

        assert!(allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            250,
            Some(drawer),
            Decimal::from(100),
        ));
    }

    #[test]
    fn test_allocation_rejected_before_sale() {
        let (mut ledger, treasury, clock) = setup();
        let drawer = AccountId::new();

        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            50,
            Some(drawer),
            Decimal::from(100),
        ));
        assert_eq!(ledger.pending_credit_of(&drawer), Decimal::ZERO);
    }

    #[test]
    fn test_allocation_rejected_after_close() {
        let (mut ledger, treasury, clock) = setup();
        let drawer = AccountId::new();

        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            300,
            Some(drawer),
            Decimal::from(100),
        ));
        assert_eq!(ledger.total_pending(), Decimal::ZERO);
    }

    #[test]
    fn test_allocation_cannot_outgrow_custody() {
        let (mut ledger, treasury, clock) = setup();
        let a = AccountId::new();
        let b = AccountId::new();

        assert!(allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(a),
            Decimal::from(900),
        ));
        // 900 + 200 > 1000 held: the credit must stay honorable
        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(b),
            Decimal::from(200),
        ));
        assert_eq!(ledger.pending_credit_of(&b), Decimal::ZERO);
        // Exactly the remaining headroom still fits
        assert!(allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(b),
            Decimal::from(100),
        ));
        assert_eq!(ledger.total_pending(), treasury.balance());
    }

    #[test]
    fn test_allocation_passes_ledger_validation_through() {
        let (mut ledger, treasury, clock) = setup();

        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            None,
            Decimal::from(10),
        ));
        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(AccountId::nil()),
            Decimal::from(10),
        ));
        assert!(!allocate_proceeds(
            &mut ledger,
            &treasury,
            &clock,
            150,
            Some(AccountId::new()),
            Decimal::ZERO,
        ));
        assert_eq!(ledger.total_pending(), Decimal::ZERO);
    }
}
