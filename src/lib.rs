//! # ludo-engine
//!
//! Rules engine for single-board Ludo: 2-4 players sharing one device, one
//! token each.
//!
//! ## Design Principles
//!
//! 1. **One source of truth**: a `GameSession` owned by a `RulesEngine`.
//!    No module-level mutable state; independent engines can coexist.
//!
//! 2. **One chokepoint for geometry**: `board::coordinates_of` is the only
//!    translation from token progress to a board cell. Rendering, capture
//!    and safe-cell checks all route through it.
//!
//! 3. **Derived board**: red's quadrant is described once; the other three
//!    are rotations of it.
//!
//! ## Modules
//!
//! - `core`: Colors, positions, die RNG, configuration, errors, events, session
//! - `board`: Track, home stretches, base anchors, safe cells, cell layout
//! - `rules`: Rolling, moving, captures, turn order, auto-pass

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Position,
    DiceRng, DiceRngState,
    EngineConfig, SessionConfig,
    MoveRejection, RulesError,
    GameEvent, Captures,
    GameSession, MoveRecord, Phase,
};

pub use crate::board::{
    BoardGeometry, Coord, CellKind,
    coordinates_of, generate_common_path, is_closed_loop,
};

pub use crate::rules::{has_legal_move, MoveOutcome, RulesEngine};
