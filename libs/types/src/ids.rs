//! Unique identifier types for sale participants
//!
//! Identities use UUID v7 for time-sortable ordering, enabling efficient
//! chronological queries over participation records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an account
///
/// Identity equality is exact; there is no notion of "similar" accounts.
/// The nil UUID is reserved as the zero identity and is never a valid
/// credit beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new AccountId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The zero identity (all-zero UUID)
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Check whether this is the zero identity
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
