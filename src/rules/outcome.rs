//! Result of an applied move.

use serde::{Deserialize, Serialize};

use crate::core::{Captures, Color, Position};

/// What a successful `apply_move` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Color that moved.
    pub color: Color,

    /// Die value consumed by the move.
    pub die: u8,

    /// Position before the move.
    pub from: Position,

    /// Position after the move.
    pub new_position: Position,

    /// Opponents sent back to base, in turn order.
    pub captured: Captures,

    /// The move reached the center and ended the session.
    pub win: bool,

    /// The mover rolls again (rolled a six or captured).
    pub repeats_turn: bool,
}

impl MoveOutcome {
    /// True if at least one opponent was captured.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Cells advanced by this move.
    #[must_use]
    pub fn distance(&self) -> u8 {
        if self.from.is_at_base() {
            0
        } else {
            self.new_position.value().abs_diff(self.from.value())
        }
    }
}
