//! Core engine types: colors, positions, RNG, configuration, errors,
//! events and session state.
//!
//! Nothing in here knows about board coordinates; see `board` for that.

pub mod color;
pub mod position;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use color::{ActiveColors, Color, ColorMap};
pub use position::Position;
pub use rng::{DiceRng, DiceRngState, DIE_FACES};
pub use config::{EngineConfig, SessionConfig, DEFAULT_AUTO_PASS_DELAY_MS};
pub use error::{MoveRejection, RulesError};
pub use event::{Captures, GameEvent};
pub use state::{GameSession, MoveRecord, Phase};
