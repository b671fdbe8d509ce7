//! Session state.
//!
//! `GameSession` is the single mutable source of truth for one game:
//! - Phase, active colors and display names
//! - Token positions
//! - Whose turn it is and the pending die value
//! - Winner and move log
//!
//! Only the rules engine mutates a session. Everything else reads it.
//! Cloning is cheap: the move log is an `im` persistent vector.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{ActiveColors, Color, ColorMap};
use super::error::RulesError;
use super::event::Captures;
use super::position::Position;
use super::rng::DIE_FACES;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing players; no session yet.
    #[default]
    Setup,
    /// Turns are being played.
    InProgress,
    /// Someone won. Terminal until the next session starts.
    Finished,
}

/// One applied move, kept for replays and move lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn the move was made in (starts at 1).
    pub turn_number: u32,
    pub color: Color,
    pub die: u8,
    pub from: Position,
    pub to: Position,
    pub captured: Captures,
}

/// A single play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    phase: Phase,
    colors: ActiveColors,
    names: ColorMap<String>,
    positions: ColorMap<Position>,
    turn_index: usize,
    pending_die: Option<u8>,
    winner: Option<Color>,
    turn_number: u32,
    moves: Vector<MoveRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::setup()
    }
}

impl GameSession {
    /// An empty session in the setup phase.
    #[must_use]
    pub fn setup() -> Self {
        Self {
            phase: Phase::Setup,
            colors: ActiveColors::new(),
            names: ColorMap::new(|c| c.default_display_name().to_string()),
            positions: ColorMap::default(),
            turn_index: 0,
            pending_die: None,
            winner: None,
            turn_number: 0,
            moves: Vector::new(),
        }
    }

    /// A fresh in-progress session: everyone at base, first color to play.
    #[must_use]
    pub(crate) fn in_progress(colors: ActiveColors, names: ColorMap<String>) -> Self {
        debug_assert!((2..=4).contains(&colors.len()));
        Self {
            phase: Phase::InProgress,
            colors,
            names,
            positions: ColorMap::default(),
            turn_index: 0,
            pending_die: None,
            winner: None,
            turn_number: 1,
            moves: Vector::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Colors taking part, in turn order. Empty during setup.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn is_active(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Display name of a color.
    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        &self.names[color]
    }

    /// Current position of a color's token.
    #[must_use]
    pub fn position(&self, color: Color) -> Position {
        self.positions[color]
    }

    /// All positions, including inactive colors (always at base).
    #[must_use]
    pub fn positions(&self) -> &ColorMap<Position> {
        &self.positions
    }

    /// Index into `colors()` of the color holding the turn.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Color holding the turn, if a session exists.
    #[must_use]
    pub fn current_color(&self) -> Option<Color> {
        self.colors.get(self.turn_index).copied()
    }

    /// Rolled value not yet consumed by a move or auto-pass.
    #[must_use]
    pub fn pending_die(&self) -> Option<u8> {
        self.pending_die
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Turn counter (starts at 1, bumps each time the turn passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn moves(&self) -> &Vector<MoveRecord> {
        &self.moves
    }

    /// Active colors other than `color`, in turn order.
    pub fn opponents(&self, color: Color) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied().filter(move |&c| c != color)
    }

    /// Color that would hold the turn after the current one.
    #[must_use]
    pub fn next_color(&self) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        self.colors.get((self.turn_index + 1) % self.colors.len()).copied()
    }

    /// Check that a session built outside the engine (e.g. deserialized)
    /// is one the engine could have produced.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.phase == Phase::Setup {
            if !self.colors.is_empty() || self.pending_die.is_some() || self.winner.is_some() {
                return Err(RulesError::invalid("setup session carries game state"));
            }
            return Ok(());
        }

        let expected = Color::active_for(self.colors.len())
            .ok_or_else(|| RulesError::invalid(format!("{} active colors", self.colors.len())))?;
        if self.colors != expected {
            return Err(RulesError::invalid(format!("unexpected color set {:?}", self.colors)));
        }
        if self.turn_index >= self.colors.len() {
            return Err(RulesError::invalid(format!("turn index {} out of range", self.turn_index)));
        }
        if let Some(value) = self.pending_die {
            if !(1..=DIE_FACES).contains(&value) {
                return Err(RulesError::invalid(format!("pending die {value} out of range")));
            }
        }
        for &color in &self.colors {
            let position = self.positions[color];
            if !(Position::BASE..=Position::FINISHED).contains(&position) {
                return Err(RulesError::invalid(format!("{color} at {} out of range", position.value())));
            }
        }

        let finished: SmallVec<[Color; 4]> = self
            .colors
            .iter()
            .copied()
            .filter(|&c| self.positions[c].is_finished())
            .collect();
        match (self.phase, self.winner) {
            (Phase::InProgress, None) if finished.is_empty() => Ok(()),
            (Phase::Finished, Some(winner))
                if finished.len() == 1 && finished[0] == winner && self.pending_die.is_none() =>
            {
                Ok(())
            }
            _ => Err(RulesError::invalid("winner does not match finished tokens")),
        }
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn set_pending_die(&mut self, value: Option<u8>) {
        self.pending_die = value;
    }

    pub(crate) fn set_position(&mut self, color: Color, position: Position) {
        self.positions[color] = position;
    }

    pub(crate) fn set_name(&mut self, color: Color, name: String) {
        self.names[color] = name;
    }

    /// Hand the turn to the next color in cyclic order.
    pub(crate) fn advance_turn(&mut self) {
        if self.colors.is_empty() {
            return;
        }
        self.turn_index = (self.turn_index + 1) % self.colors.len();
        self.turn_number += 1;
    }

    pub(crate) fn finish(&mut self, winner: Color) {
        self.winner = Some(winner);
        self.phase = Phase::Finished;
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.moves.push_back(record);
    }
}
