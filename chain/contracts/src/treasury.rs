//! Treasury: the custodial value pool backing the escrow
//!
//! Holds the total value the system custodies on behalf of all
//! beneficiaries collectively. Sale proceeds flow in through `fund`; value
//! leaves only through the escrow's withdrawal path, via the
//! `ValueTransfer` implementation, and only by an amount equal to a zeroed
//! pending credit.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::ids::AccountId;

use crate::errors::TreasuryError;
use crate::escrow::{ValueTransfer, WithdrawalLedger};

/// Custodial value pool.
///
/// `payouts` mirrors what the execution environment would credit each
/// recipient; it exists so payout totals stay auditable.
#[derive(Debug, Default)]
pub struct Treasury {
    /// Total custodial value currently held
    held: Decimal,
    /// Cumulative value paid out, per recipient
    payouts: HashMap<AccountId, Decimal>,
}

impl Treasury {
    /// Create an empty treasury.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a treasury holding an opening balance, as when the contract
    /// is deployed pre-funded.
    pub fn with_opening_balance(amount: Decimal) -> Self {
        Self {
            held: amount.max(Decimal::ZERO),
            payouts: HashMap::new(),
        }
    }

    /// Take sale proceeds into custody.
    pub fn fund(&mut self, amount: Decimal) -> Result<(), TreasuryError> {
        if amount <= Decimal::ZERO {
            return Err(TreasuryError::InvalidAmount);
        }
        self.held = self
            .held
            .checked_add(amount)
            .ok_or(TreasuryError::Overflow)?;
        Ok(())
    }

    /// Total custodial value currently held.
    pub fn balance(&self) -> Decimal {
        self.held
    }

    /// Cumulative value paid out to a recipient; zero if never paid.
    pub fn paid_out_to(&self, recipient: &AccountId) -> Decimal {
        self.payouts
            .get(recipient)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

impl ValueTransfer for Treasury {
    /// Move `amount` out of custody to `to`.
    ///
    /// Succeeds only when the amount is positive and fully covered by the
    /// pool. Both sides of the movement are computed before either is
    /// committed, so a rejected transfer leaves no trace.
    fn transfer(&mut self, to: &AccountId, amount: Decimal, _ledger: &WithdrawalLedger) -> bool {
        if amount <= Decimal::ZERO || amount > self.held {
            return false;
        }
        let new_held = match self.held.checked_sub(amount) {
            Some(v) => v,
            None => return false,
        };
        let current_paid = self.payouts.get(to).copied().unwrap_or(Decimal::ZERO);
        let new_paid = match current_paid.checked_add(amount) {
            Some(v) => v,
            None => return false,
        };

        self.held = new_held;
        self.payouts.insert(*to, new_paid);
        true
    }
}
