//! Shared security primitives for contract modules
//!
//! Provides the reentrancy guard and ownership tracking used by the escrow
//! module.

use types::ids::AccountId;

/// Reentrancy guard preventing nested calls into protected functions.
///
/// A contract function acquires the guard before executing state-changing
/// logic and releases it on completion. Any nested call attempt fails.
#[derive(Debug, Clone)]
pub struct ReentrancyGuard {
    locked: bool,
}

impl ReentrancyGuard {
    /// Create a new unlocked guard.
    pub fn new() -> Self {
        Self { locked: false }
    }

    /// Acquire the guard. Returns `true` if successfully acquired.
    /// Returns `false` if already locked (reentrancy attempt).
    pub fn acquire(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    /// Release the guard.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Check if currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Default for ReentrancyGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner identity fixed at construction.
///
/// The owner is the privileged administrative identity. Ownership and
/// beneficiary-hood are disjoint: the escrow refuses withdrawals from
/// whichever identity this tracks. The caller identity is always threaded
/// in explicitly; there is no ambient caller context.
#[derive(Debug, Clone)]
pub struct Ownership {
    owner: AccountId,
}

impl Ownership {
    /// Create ownership tracking with an initial owner.
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    /// Check if a caller is the current owner.
    pub fn is_owner(&self, caller: &AccountId) -> bool {
        *caller == self.owner
    }

    /// Transfer ownership to a new identity. Only the current owner may
    /// transfer, and never to the zero identity.
    pub fn transfer(&mut self, current_owner: &AccountId, new_owner: AccountId) -> bool {
        if !self.is_owner(current_owner) || new_owner.is_nil() {
            return false;
        }
        self.owner = new_owner;
        true
    }

    /// Get the current owner identity.
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }
}
