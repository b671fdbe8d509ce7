//! Linear token progress.
//!
//! A token's progress is a single integer counted from its owner's entry
//! cell:
//!
//! | value    | meaning                                   |
//! |----------|-------------------------------------------|
//! | `-1`     | at base, not yet entered                  |
//! | `0..=50` | on the shared track, owner-relative index |
//! | `51..=56`| in the owner's private home stretch       |
//! | `57`     | finished                                  |
//!
//! Progress only moves forward, except for the reset to base on capture.

use serde::{Deserialize, Serialize};

/// Owner-relative progress of a color's token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub i8);

impl Position {
    /// Token waiting at base.
    pub const BASE: Position = Position(-1);
    /// Owner's entry cell on the shared track.
    pub const START: Position = Position(0);
    /// Last shared-track cell before the home stretch.
    pub const LAST_TRACK: Position = Position(50);
    /// First home-stretch cell.
    pub const HOME_ENTRY: Position = Position(51);
    /// Token reached the center.
    pub const FINISHED: Position = Position(57);

    /// Raw progress value.
    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }

    #[must_use]
    pub const fn is_at_base(self) -> bool {
        self.0 == Self::BASE.0
    }

    /// On the shared track, where it can capture and be captured.
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        self.0 >= Self::START.0 && self.0 <= Self::LAST_TRACK.0
    }

    #[must_use]
    pub const fn is_in_home_stretch(self) -> bool {
        self.0 >= Self::HOME_ENTRY.0 && self.0 < Self::FINISHED.0
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 >= Self::FINISHED.0
    }

    /// Where a roll of `die` takes this token, if anywhere.
    ///
    /// Leaving base needs a six and lands on `START`. Otherwise the
    /// token moves `die` cells and may not overshoot `FINISHED`.
    ///
    /// ```
    /// use ludo_engine::core::Position;
    ///
    /// assert_eq!(Position::BASE.advance(6), Some(Position::START));
    /// assert_eq!(Position::BASE.advance(5), None);
    /// assert_eq!(Position(51).advance(6), Some(Position::FINISHED));
    /// assert_eq!(Position(52).advance(6), None);
    /// ```
    #[must_use]
    pub fn advance(self, die: u8) -> Option<Position> {
        if self.is_at_base() {
            return (die == 6).then_some(Self::START);
        }
        if self.0 < Self::START.0 || self.is_finished() {
            return None;
        }
        let target = i16::from(self.0) + i16::from(die);
        (target <= i16::from(Self::FINISHED.0)).then(|| Position(target as i8))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::BASE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_finished() {
            f.write_str("FINISHED")
        } else if self.is_at_base() {
            f.write_str("AT BASE")
        } else {
            write!(f, "STEP {}", self.0)
        }
    }
}
