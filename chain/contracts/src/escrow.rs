//! Withdrawal escrow: pull-payment ledger over pending credits
//!
//! Records who is owed how much, and lets each beneficiary pull their own
//! credit exactly once per credit. Value is never pushed at the moment a
//! debt is recognized: sale logic records a credit, and the beneficiary
//! later calls `withdraw` to realize it.
//!
//! The caller's credit is zeroed BEFORE the value-transfer primitive runs.
//! Any recipient code triggered by the payout therefore observes a zero
//! balance, and only through a shared view of the ledger. A failed transfer
//! restores the credit exactly, so every call is all-or-nothing.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::ids::AccountId;

use crate::errors::EscrowError;
use crate::events::{ContractEvent, CreditRecorded, WithdrawalCompleted};
use crate::security::{Ownership, ReentrancyGuard};

/// Value-transfer primitive the escrow pays out through.
///
/// Implementations move `amount` of custodial value to `to` and report
/// success. A transfer may run arbitrary recipient code; such code receives
/// the `ledger` view and can inspect, but not mutate, escrow state
/// mid-payout.
pub trait ValueTransfer {
    fn transfer(&mut self, to: &AccountId, amount: Decimal, ledger: &WithdrawalLedger) -> bool;
}

/// Pull-payment escrow over pending credits.
///
/// Exclusively owns the beneficiary-to-credit mapping; absence of an entry
/// is a zero credit. Credits grow only through `record_credit` and are
/// zeroed in full only by a successful `withdraw` from the owning
/// beneficiary. Never decreased partially.
#[derive(Debug)]
pub struct WithdrawalLedger {
    /// Pending credits: beneficiary -> amount owed
    pending: HashMap<AccountId, Decimal>,
    /// Running sum of all pending credits
    total_pending: Decimal,
    /// Owner identity; barred from withdrawing through this path
    ownership: Ownership,
    /// Defense-in-depth behind the zero-before-transfer ordering
    reentrancy_guard: ReentrancyGuard,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl WithdrawalLedger {
    /// Create an empty ledger with the given owner.
    pub fn new(owner: AccountId) -> Self {
        Self {
            pending: HashMap::new(),
            total_pending: Decimal::ZERO,
            ownership: Ownership::new(owner),
            reentrancy_guard: ReentrancyGuard::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Credit Recording ─────────────────────────

    /// Add `amount` to a beneficiary's pending credit.
    ///
    /// Trusted internal callers only; external code reaches credits solely
    /// through the phase-gated path in `proceeds`. Rejections are silent
    /// booleans, never faults, so callers may probe validity before
    /// committing: a missing or zero identity, a non-positive amount, or an
    /// accumulation overflow all return `false` with nothing mutated.
    ///
    /// Accumulates across calls; an existing credit is never overwritten.
    /// Emits `CreditRecorded` with the amount added.
    pub(crate) fn record_credit(&mut self, beneficiary: Option<AccountId>, amount: Decimal) -> bool {
        let beneficiary = match beneficiary {
            Some(id) if !id.is_nil() => id,
            _ => return false,
        };
        if amount <= Decimal::ZERO {
            return false;
        }

        let current = self
            .pending
            .get(&beneficiary)
            .copied()
            .unwrap_or(Decimal::ZERO);

        // Compute both sums before touching state so a rejection is clean
        let new_credit = match current.checked_add(amount) {
            Some(v) => v,
            None => return false,
        };
        let new_total = match self.total_pending.checked_add(amount) {
            Some(v) => v,
            None => return false,
        };

        self.pending.insert(beneficiary, new_credit);
        self.total_pending = new_total;

        self.events
            .push(ContractEvent::CreditRecorded(CreditRecorded {
                beneficiary,
                amount_added: amount,
            }));
        true
    }

    // ───────────────────────── Withdrawal ─────────────────────────

    /// Pull the caller's full pending credit through `sink`.
    ///
    /// The caller identity is both the lookup key and the sole recipient;
    /// there is no withdraw-on-behalf-of form. The owner is rejected
    /// outright. A zero or absent credit is an error and moves no value.
    ///
    /// On success the credit is zeroed, the transfer runs, and a
    /// `WithdrawalCompleted` event is returned. If the transfer fails the
    /// credit is restored exactly and the whole call reports failure.
    pub fn withdraw(
        &mut self,
        caller: AccountId,
        sink: &mut dyn ValueTransfer,
    ) -> Result<ContractEvent, EscrowError> {
        if self.ownership.is_owner(&caller) {
            return Err(EscrowError::OwnerMayNotWithdraw);
        }
        if !self.reentrancy_guard.acquire() {
            return Err(EscrowError::Reentrancy);
        }

        let amount = match self.pending.remove(&caller) {
            Some(v) if v > Decimal::ZERO => v,
            _ => {
                self.reentrancy_guard.release();
                return Err(EscrowError::NothingPending);
            }
        };
        // Credit is gone before the transfer runs; `amount` was a component
        // of the total, so plain subtraction cannot underflow.
        self.total_pending -= amount;

        if !sink.transfer(&caller, amount, self) {
            // Full rollback: the exact credit comes back, enabling retry
            self.pending.insert(caller, amount);
            self.total_pending += amount;
            self.reentrancy_guard.release();
            return Err(EscrowError::TransferFailed);
        }

        let event = ContractEvent::WithdrawalCompleted(WithdrawalCompleted {
            beneficiary: caller,
            amount_transferred: amount,
        });
        self.events.push(event.clone());
        self.reentrancy_guard.release();
        Ok(event)
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Current pending credit for an identity; zero if none recorded.
    pub fn pending_credit_of(&self, identity: &AccountId) -> Decimal {
        self.pending
            .get(identity)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all pending credits.
    pub fn total_pending(&self) -> Decimal {
        self.total_pending
    }

    /// The current owner identity.
    pub fn owner(&self) -> &AccountId {
        self.ownership.owner()
    }

    /// Transfer ownership. Only the current owner may transfer.
    pub fn transfer_ownership(&mut self, current_owner: &AccountId, new_owner: AccountId) -> bool {
        self.ownership.transfer(current_owner, new_owner)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}
