//! Rules engine: turn progression, move legality, captures and the win
//! condition.
//!
//! The engine owns the session and is the only code path that mutates it.
//! Presentation code reads `RulesEngine::session`, forwards user intents
//! (`roll_die`, `apply_move`), drives time with `tick` and drains
//! `take_events` for sounds and animations.

pub mod engine;
pub mod outcome;
pub mod timer;

pub use engine::{has_legal_move, RulesEngine};
pub use outcome::MoveOutcome;
pub use timer::{AutoPassTimer, ScheduledPass};
