//! Contract Logic for Sale-Proceeds Custody & Pull-Payment Escrow
//!
//! This crate implements the contract layer for the fundraising token sale,
//! covering the withdrawal escrow ledger, the sale phase clock, and the
//! custodial treasury the escrow pays out of.
//!
//! # Modules
//! - `events`: Contract events (credit recording, completed withdrawals)
//! - `errors`: Contract-specific error types
//! - `security`: Shared security primitives (reentrancy guard, ownership)
//! - `phase`: Sale phase clock derived from three configured instants
//! - `escrow`: Pull-payment withdrawal ledger and the value-transfer seam
//! - `treasury`: Custodial value pool backing the escrow
//! - `proceeds`: Phase-gated allocation path used by sale logic
//!
//! # Version
//! v0.1.0, initial implementation

pub mod errors;
pub mod events;
pub mod security;
pub mod phase;
pub mod escrow;
pub mod treasury;
pub mod proceeds;

/// Contract ABI version, frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
