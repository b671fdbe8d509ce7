//! Engine errors.
//!
//! Every failure is local and synchronous: a rejected operation leaves the
//! session exactly as it was, so callers can re-check state and retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;

/// Why a roll or move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// No session is in progress (still in setup, or already finished).
    NotInProgress,
    /// A rolled value is still waiting to be consumed.
    DiePending,
    /// A move was attempted before rolling.
    NoPendingDie,
    /// The color asking to act does not hold the turn.
    NotYourTurn { current: Color },
    /// The color is not taking part in this session.
    InactiveColor,
    /// The pending value cannot move this color's token.
    NoLegalMove { die: u8 },
    /// A forced die value outside 1..=6.
    DieOutOfRange { value: u8 },
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::NotInProgress => f.write_str("no session in progress"),
            MoveRejection::DiePending => f.write_str("a rolled value is still pending"),
            MoveRejection::NoPendingDie => f.write_str("roll the die first"),
            MoveRejection::NotYourTurn { current } => write!(f, "it is {current}'s turn"),
            MoveRejection::InactiveColor => f.write_str("color is not playing"),
            MoveRejection::NoLegalMove { die } => write!(f, "a {die} cannot be played"),
            MoveRejection::DieOutOfRange { value } => write!(f, "die value {value} outside 1..=6"),
        }
    }
}

/// Errors returned by rules engine operations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("illegal move: {0}")]
    IllegalMove(MoveRejection),
}

impl RulesError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RulesError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// The refusal reason, for `IllegalMove` errors.
    #[must_use]
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            RulesError::IllegalMove(r) => Some(*r),
            RulesError::InvalidConfiguration { .. } => None,
        }
    }
}

impl From<MoveRejection> for RulesError {
    fn from(rejection: MoveRejection) -> Self {
        RulesError::IllegalMove(rejection)
    }
}
