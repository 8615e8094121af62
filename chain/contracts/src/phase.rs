//! Sale phase clock
//!
//! Maps a caller-supplied instant onto the sale lifecycle. The clock holds
//! only its three configured boundaries; the phase is recomputed on every
//! query and never cached, so no call sequence can force a transition early
//! or roll one back.

use serde::{Deserialize, Serialize};

use crate::errors::ClockError;

/// A named interval of the sale lifecycle.
///
/// Phases are strictly time-ordered and never revisited:
/// `Unopened -> PreOpen -> Open -> Closed`. The `Ord` derive follows that
/// progression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Phase {
    /// Before the pre-opening instant
    Unopened,
    /// Pre-sale running
    PreOpen,
    /// Main sale running
    Open,
    /// At or after the closing instant; terminal
    Closed,
}

/// Pure time-to-phase mapping over three configured instants.
///
/// All instants are unix seconds. Construction rejects any ordering other
/// than `pre_opening <= opening <= closing`; an ill-ordered clock never
/// comes into existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseClock {
    pre_opening: i64,
    opening: i64,
    closing: i64,
}

impl PhaseClock {
    /// Create a clock from the three sale boundaries.
    pub fn new(pre_opening: i64, opening: i64, closing: i64) -> Result<Self, ClockError> {
        if pre_opening > opening || opening > closing {
            return Err(ClockError::MisorderedBoundaries {
                pre_opening,
                opening,
                closing,
            });
        }
        Ok(Self {
            pre_opening,
            opening,
            closing,
        })
    }

    /// Phase at the given instant. Total, idempotent, side-effect free.
    ///
    /// Each boundary belongs to the phase it opens: at exactly `opening`
    /// the sale is `Open`, at exactly `closing` it is `Closed`.
    pub fn current_phase(&self, now: i64) -> Phase {
        if now >= self.closing {
            Phase::Closed
        } else if now >= self.opening {
            Phase::Open
        } else if now >= self.pre_opening {
            Phase::PreOpen
        } else {
            Phase::Unopened
        }
    }

    /// Whether the sale accepts proceeds at the given instant.
    pub fn is_sale_running(&self, now: i64) -> bool {
        matches!(self.current_phase(now), Phase::PreOpen | Phase::Open)
    }

    /// The configured pre-opening instant.
    pub fn pre_opening(&self) -> i64 {
        self.pre_opening
    }

    /// The configured opening instant.
    pub fn opening(&self) -> i64 {
        self.opening
    }

    /// The configured closing instant.
    pub fn closing(&self) -> i64 {
        self.closing
    }
}
