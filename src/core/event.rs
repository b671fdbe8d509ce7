//! Game events.
//!
//! The engine buffers an event for everything the presentation layer may
//! want to react to (sounds, animations, banners). Events describe what
//! already happened; they never drive the rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{ActiveColors, Color};
use super::position::Position;

/// Colors sent back to base by one move.
pub type Captures = SmallVec<[Color; 3]>;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session replaced whatever came before.
    SessionStarted { colors: ActiveColors },

    /// The current color rolled the die.
    DieRolled { color: Color, value: u8 },

    /// A token moved, possibly capturing others.
    MoveApplied {
        color: Color,
        from: Position,
        to: Position,
        captured: Captures,
    },

    /// A token reached the center and the session is over.
    WinDetected { color: Color },

    /// A dead roll expired and the turn moved on.
    TurnAutoPassed { from: Color, to: Color, die: u8 },

    /// The session was discarded and the engine is back in setup.
    SessionReset,
}

impl GameEvent {
    /// The color this event is about, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            GameEvent::DieRolled { color, .. }
            | GameEvent::MoveApplied { color, .. }
            | GameEvent::WinDetected { color } => Some(*color),
            GameEvent::TurnAutoPassed { from, .. } => Some(*from),
            GameEvent::SessionStarted { .. } | GameEvent::SessionReset => None,
        }
    }

    /// True for moves that sent at least one token home.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, GameEvent::MoveApplied { captured, .. } if !captured.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_event_color() {
        let rolled = GameEvent::DieRolled { color: Color::Blue, value: 3 };
        assert_eq!(rolled.color(), Some(Color::Blue));

        let passed = GameEvent::TurnAutoPassed { from: Color::Red, to: Color::Green, die: 2 };
        assert_eq!(passed.color(), Some(Color::Red));

        assert_eq!(GameEvent::SessionReset.color(), None);
    }

    #[test]
    fn test_is_capture() {
        let quiet = GameEvent::MoveApplied {
            color: Color::Red,
            from: Position(3),
            to: Position(7),
            captured: Captures::new(),
        };
        assert!(!quiet.is_capture());

        let capture = GameEvent::MoveApplied {
            color: Color::Red,
            from: Position(3),
            to: Position(7),
            captured: smallvec![Color::Green],
        };
        assert!(capture.is_capture());
    }

    #[test]
    fn test_serde() {
        let event = GameEvent::WinDetected { color: Color::Yellow };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
