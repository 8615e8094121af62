//! Contract-specific error types
//!
//! Error taxonomy for escrow, treasury, and phase clock operations.
//! Validation rejections on the credit-recording path are deliberately NOT
//! errors: trusted callers probe a boolean result instead of handling
//! propagated failures. Everything here aborts the whole call it occurs in,
//! leaving state untouched.

use thiserror::Error;

/// Escrow-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EscrowError {
    #[error("Owner may not withdraw through the escrow path")]
    OwnerMayNotWithdraw,

    #[error("No pending credit for caller")]
    NothingPending,

    #[error("Reentrancy detected")]
    Reentrancy,

    #[error("Value transfer failed; credit restored")]
    TransferFailed,
}

/// Treasury-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreasuryError {
    #[error("Funding amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Phase clock errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error(
        "Phase boundaries out of order: pre-opening {pre_opening}, opening {opening}, closing {closing}"
    )]
    MisorderedBoundaries {
        pre_opening: i64,
        opening: i64,
        closing: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escrow_error_display() {
        let err = EscrowError::NothingPending;
        assert_eq!(err.to_string(), "No pending credit for caller");
    }

    #[test]
    fn test_treasury_error_display() {
        let err = TreasuryError::Overflow;
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow in balance calculation"
        );
    }

    #[test]
    fn test_clock_error_display() {
        let err = ClockError::MisorderedBoundaries {
            pre_opening: 300,
            opening: 200,
            closing: 100,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("100"));
    }
}
