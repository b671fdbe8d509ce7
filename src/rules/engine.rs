//! The Ludo rules engine.
//!
//! `RulesEngine` owns one `GameSession` and is the only thing that mutates
//! it. Every operation is synchronous and all-or-nothing: a rejected call
//! returns an error and leaves the session untouched.
//!
//! ## Turn flow
//!
//! 1. `roll_die` sets the pending die value.
//! 2. If the current color can use it, `apply_move` consumes it. A six or a
//!    capture keeps the turn; anything else hands it on.
//! 3. If it cannot, an auto-pass is scheduled. `tick` fires it once the
//!    configured delay has elapsed, clearing the die and passing the turn.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::core::{Color, EngineConfig, Position, SessionConfig};
//! use ludo_engine::rules::RulesEngine;
//!
//! let mut engine = RulesEngine::new(EngineConfig::default().with_seed(1));
//! engine.start_session(SessionConfig::new(2)).unwrap();
//!
//! engine.roll_die_with(6).unwrap();
//! let outcome = engine.apply_move(Color::Red).unwrap();
//! assert_eq!(outcome.new_position, Position::START);
//! assert!(outcome.repeats_turn);
//! ```

use log::{debug, info, warn};

use crate::board::{capturable_cell, coordinates_of, BoardGeometry};
use crate::core::{
    Captures, Color, DiceRng, DiceRngState, EngineConfig, GameEvent, GameSession, MoveRecord,
    MoveRejection, Position, RulesError, SessionConfig, DIE_FACES,
};
use crate::core::config::normalize_name;

use super::outcome::MoveOutcome;
use super::timer::AutoPassTimer;

/// Can a token at `position` use a roll of `die`?
///
/// From base only a six enters; otherwise the move must not overshoot the
/// center.
#[must_use]
pub fn has_legal_move(position: Position, die: u8) -> bool {
    (1..=DIE_FACES).contains(&die) && position.advance(die).is_some()
}

/// Rules engine for one board.
///
/// Several engines can coexist; each owns its own session, die and timer.
#[derive(Debug)]
pub struct RulesEngine {
    config: EngineConfig,
    rng: DiceRng,
    session: GameSession,
    auto_pass: AutoPassTimer,
    events: Vec<GameEvent>,
}

impl RulesEngine {
    /// Create an engine in the setup phase.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(DiceRng::from_entropy, DiceRng::new);
        Self {
            config,
            rng,
            session: GameSession::setup(),
            auto_pass: AutoPassTimer::new(),
            events: Vec::new(),
        }
    }

    /// Restore an engine around an existing session and die state.
    ///
    /// Fails with `InvalidConfiguration` if `session` is inconsistent. Any
    /// dead roll pending in it gets a fresh auto-pass delay.
    pub fn from_parts(
        config: EngineConfig,
        session: GameSession,
        rng: &DiceRngState,
    ) -> Result<Self, RulesError> {
        session.validate().inspect_err(|e| {
            warn!("[Rules] Session not restored: {e}");
        })?;
        let mut engine = Self {
            rng: DiceRng::from_state(rng),
            config,
            session,
            auto_pass: AutoPassTimer::new(),
            events: Vec::new(),
        };
        if let (Some(color), Some(die)) = (engine.session.current_color(), engine.session.pending_die()) {
            if engine.session.is_in_progress() && !engine.has_legal_move(color, die) {
                engine.auto_pass.schedule(color, die, engine.config.auto_pass_delay_ms);
            }
        }
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the live session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Die state, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> DiceRngState {
        self.rng.state()
    }

    /// The winner, once the session has finished.
    #[must_use]
    pub fn is_terminal(&self) -> Option<Color> {
        self.session.winner()
    }

    // === Session lifecycle ===

    /// Start a new session, replacing the current one.
    ///
    /// Fails with `InvalidConfiguration` for a color count outside 2..=4,
    /// in which case nothing changes. Otherwise any scheduled auto-pass is
    /// cancelled, unread events are dropped and every token starts at base
    /// with the first active color to play.
    pub fn start_session(&mut self, config: SessionConfig) -> Result<&GameSession, RulesError> {
        let colors = config.active_colors().inspect_err(|e| {
            warn!("[Rules] Session not started: {e}");
        })?;

        if self.auto_pass.cancel() {
            debug!("[AutoPass] Cancelled by new session");
        }
        self.events.clear();

        info!(
            "[Rules] Session started with {} colors: {:?}",
            colors.len(),
            colors.as_slice()
        );
        self.events.push(GameEvent::SessionStarted {
            colors: colors.clone(),
        });
        self.session = GameSession::in_progress(colors, config.resolved_names());
        Ok(&self.session)
    }

    /// Discard the session and return to setup.
    pub fn reset(&mut self) {
        if self.auto_pass.cancel() {
            debug!("[AutoPass] Cancelled by reset");
        }
        self.events.clear();
        self.session = GameSession::setup();
        self.events.push(GameEvent::SessionReset);
        info!("[Rules] Session reset");
    }

    /// Rename an active color.
    pub fn rename(&mut self, color: Color, name: &str) -> Result<(), RulesError> {
        if !self.session.is_active(color) {
            return Err(RulesError::invalid(format!("{color} is not playing")));
        }
        let name = normalize_name(name).ok_or_else(|| RulesError::invalid("name must not be blank"))?;
        debug!("[Rules] {color} renamed to {name:?}");
        self.session.set_name(color, name);
        Ok(())
    }

    // === Rolling ===

    /// Roll the die for the current color.
    ///
    /// Rejected unless a session is in progress and no rolled value is
    /// pending. A roll the current color cannot use schedules an auto-pass.
    pub fn roll_die(&mut self) -> Result<u8, RulesError> {
        let color = self.check_can_roll()?;
        let value = self.rng.roll();
        Ok(self.record_roll(color, value))
    }

    /// Roll a chosen value, with the same preconditions as `roll_die`.
    pub fn roll_die_with(&mut self, value: u8) -> Result<u8, RulesError> {
        if !(1..=DIE_FACES).contains(&value) {
            return Err(self.reject(MoveRejection::DieOutOfRange { value }));
        }
        let color = self.check_can_roll()?;
        Ok(self.record_roll(color, value))
    }

    fn check_can_roll(&self) -> Result<Color, RulesError> {
        if !self.session.is_in_progress() {
            return Err(self.reject(MoveRejection::NotInProgress));
        }
        if self.session.pending_die().is_some() {
            return Err(self.reject(MoveRejection::DiePending));
        }
        self.session
            .current_color()
            .ok_or_else(|| self.reject(MoveRejection::NotInProgress))
    }

    fn record_roll(&mut self, color: Color, value: u8) -> u8 {
        debug!("[Rules] {color} rolled {value}");
        self.session.set_pending_die(Some(value));
        self.events.push(GameEvent::DieRolled { color, value });

        if !self.has_legal_move(color, value) {
            debug!(
                "[AutoPass] {color} cannot play {value}, passing in {}ms",
                self.config.auto_pass_delay_ms
            );
            self.auto_pass
                .schedule(color, value, self.config.auto_pass_delay_ms);
        }
        value
    }

    // === Moving ===

    /// Can `color`'s token use a roll of `die` right now?
    #[must_use]
    pub fn has_legal_move(&self, color: Color, die: u8) -> bool {
        has_legal_move(self.session.position(color), die)
    }

    /// Where the current color's token would land with the pending die.
    #[must_use]
    pub fn pending_target(&self) -> Option<Position> {
        let color = self.session.current_color()?;
        let die = self.session.pending_die()?;
        self.session.position(color).advance(die)
    }

    /// Move `color`'s token by the pending die value.
    ///
    /// Preconditions: a session in progress, `color` holds the turn, a die
    /// value is pending and the token can use it. On success the die is
    /// consumed, captures are resolved and the turn either stays (six or
    /// capture) or passes to the next color.
    pub fn apply_move(&mut self, color: Color) -> Result<MoveOutcome, RulesError> {
        let (die, from, to) = self.check_move(color)?;

        self.session.set_pending_die(None);
        self.session.set_position(color, to);

        if to.is_finished() {
            return Ok(self.finish_move(color, die, from, to));
        }

        let captured = self.resolve_captures(color, to);
        let repeats_turn = die == DIE_FACES || !captured.is_empty();

        debug!(
            "[Rules] {color} moved {from} -> {to}{}",
            if captured.is_empty() { String::new() } else { format!(", captured {:?}", captured.as_slice()) }
        );

        self.session.record_move(MoveRecord {
            turn_number: self.session.turn_number(),
            color,
            die,
            from,
            to,
            captured: captured.clone(),
        });
        self.events.push(GameEvent::MoveApplied {
            color,
            from,
            to,
            captured: captured.clone(),
        });

        if !repeats_turn {
            self.session.advance_turn();
        }

        Ok(MoveOutcome {
            color,
            die,
            from,
            new_position: to,
            captured,
            win: false,
            repeats_turn,
        })
    }

    fn check_move(&self, color: Color) -> Result<(u8, Position, Position), RulesError> {
        if !self.session.is_in_progress() {
            return Err(self.reject(MoveRejection::NotInProgress));
        }
        if !self.session.is_active(color) {
            return Err(self.reject(MoveRejection::InactiveColor));
        }
        let current = self
            .session
            .current_color()
            .ok_or_else(|| self.reject(MoveRejection::NotInProgress))?;
        if current != color {
            return Err(self.reject(MoveRejection::NotYourTurn { current }));
        }
        let die = self
            .session
            .pending_die()
            .ok_or_else(|| self.reject(MoveRejection::NoPendingDie))?;
        let from = self.session.position(color);
        let to = from
            .advance(die)
            .ok_or_else(|| self.reject(MoveRejection::NoLegalMove { die }))?;
        Ok((die, from, to))
    }

    fn finish_move(&mut self, color: Color, die: u8, from: Position, to: Position) -> MoveOutcome {
        self.session.finish(color);
        self.session.record_move(MoveRecord {
            turn_number: self.session.turn_number(),
            color,
            die,
            from,
            to,
            captured: Captures::new(),
        });
        self.events.push(GameEvent::MoveApplied {
            color,
            from,
            to,
            captured: Captures::new(),
        });
        self.events.push(GameEvent::WinDetected { color });
        info!("[Rules] {color} ({}) wins", self.session.name(color));

        MoveOutcome {
            color,
            die,
            from,
            new_position: to,
            captured: Captures::new(),
            win: true,
            repeats_turn: false,
        }
    }

    /// Send every opponent sharing `mover`'s new cell back to base, unless
    /// the cell is safe.
    fn resolve_captures(&mut self, mover: Color, to: Position) -> Captures {
        let target = coordinates_of(mover, to);
        if BoardGeometry::get().is_safe(target) {
            return Captures::new();
        }

        let captured: Captures = self
            .session
            .opponents(mover)
            .filter(|&other| capturable_cell(other, self.session.position(other)) == Some(target))
            .collect();

        for &victim in &captured {
            self.session.set_position(victim, Position::BASE);
        }
        captured
    }

    // === Time ===

    /// Advance the auto-pass timer by `elapsed_ms`.
    ///
    /// Returns true if the turn was passed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pass) = self.auto_pass.advance(elapsed_ms) else {
            return false;
        };

        let still_current = self.session.is_in_progress()
            && self.session.current_color() == Some(pass.color)
            && self.session.pending_die() == Some(pass.die);
        if !still_current {
            warn!("[AutoPass] Dropped stale pass for {}", pass.color);
            return false;
        }

        self.session.set_pending_die(None);
        self.session.advance_turn();
        let to = self.session.current_color().unwrap_or(pass.color);

        info!("[AutoPass] {} could not play {}, turn passes to {to}", pass.color, pass.die);
        self.events.push(GameEvent::TurnAutoPassed {
            from: pass.color,
            to,
            die: pass.die,
        });
        true
    }

    /// Time left before a dead roll passes the turn.
    #[must_use]
    pub fn auto_pass_remaining_ms(&self) -> Option<u32> {
        self.auto_pass.scheduled().map(|p| p.remaining_ms())
    }

    // === Events ===

    /// Drain events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn reject(&self, rejection: MoveRejection) -> RulesError {
        warn!("[Rules] Rejected: {rejection}");
        RulesError::IllegalMove(rejection)
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn engine(count: usize) -> RulesEngine {
        let mut engine = RulesEngine::new(EngineConfig::default().with_seed(42));
        engine.start_session(SessionConfig::new(count)).unwrap();
        engine.take_events();
        engine
    }

    #[test]
    fn test_start_session() {
        let mut engine = RulesEngine::new(EngineConfig::default().with_seed(1));
        let session = engine
            .start_session(SessionConfig::new(3).with_name(Color::Green, "Bo"))
            .unwrap();

        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.colors(), &[Color::Red, Color::Green, Color::Yellow]);
        assert_eq!(session.current_color(), Some(Color::Red));
        assert_eq!(session.pending_die(), None);
        assert_eq!(session.name(Color::Green), "Bo");
        assert_eq!(session.name(Color::Red), "Player 1");

        let events = engine.take_events();
        assert!(matches!(events.as_slice(), [GameEvent::SessionStarted { .. }]));
    }

    #[test]
    fn test_invalid_color_count_keeps_session() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();
        engine.apply_move(Color::Red).unwrap();

        for bad in [0, 1, 5] {
            let err = engine.start_session(SessionConfig::new(bad)).unwrap_err();
            assert!(matches!(err, RulesError::InvalidConfiguration { .. }));
        }
        assert_eq!(engine.session().position(Color::Red), Position::START);
    }

    #[test]
    fn test_roll_rejected_outside_session() {
        let mut engine = RulesEngine::new(EngineConfig::default().with_seed(1));
        let err = engine.roll_die().unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::NotInProgress));
    }

    #[test]
    fn test_roll_rejected_while_pending() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();

        let err = engine.roll_die().unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::DiePending));
        assert_eq!(engine.session().pending_die(), Some(6));
    }

    #[test]
    fn test_roll_die_in_range() {
        let mut engine = engine(4);
        for _ in 0..50 {
            let value = engine.roll_die().unwrap();
            assert!((1..=6).contains(&value));
            // Clear the roll one way or the other.
            let current = engine.session().current_color().unwrap();
            if engine.has_legal_move(current, value) {
                engine.apply_move(current).unwrap();
            } else {
                assert!(engine.tick(1000));
            }
            if engine.is_terminal().is_some() {
                break;
            }
        }
    }

    #[test]
    fn test_forced_roll_out_of_range() {
        let mut engine = engine(2);
        for bad in [0, 7] {
            let err = engine.roll_die_with(bad).unwrap_err();
            assert_eq!(err.rejection(), Some(MoveRejection::DieOutOfRange { value: bad }));
        }
        assert_eq!(engine.session().pending_die(), None);
    }

    #[test]
    fn test_has_legal_move() {
        assert!(has_legal_move(Position::BASE, 6));
        for die in 1..=5 {
            assert!(!has_legal_move(Position::BASE, die));
        }
        assert!(has_legal_move(Position(51), 6));
        assert!(!has_legal_move(Position(52), 6));
        assert!(has_legal_move(Position(56), 1));
        assert!(!has_legal_move(Position(10), 0));
        assert!(!has_legal_move(Position(10), 7));
    }

    #[test]
    fn test_move_preconditions() {
        let mut engine = engine(2);

        let err = engine.apply_move(Color::Red).unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::NoPendingDie));

        engine.roll_die_with(6).unwrap();
        let err = engine.apply_move(Color::Yellow).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(MoveRejection::NotYourTurn { current: Color::Red })
        );

        let err = engine.apply_move(Color::Green).unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::InactiveColor));

        // Nothing changed.
        assert_eq!(engine.session().pending_die(), Some(6));
        assert_eq!(engine.session().position(Color::Red), Position::BASE);
    }

    #[test]
    fn test_dead_roll_cannot_be_played() {
        let mut engine = engine(2);
        engine.roll_die_with(3).unwrap();

        let err = engine.apply_move(Color::Red).unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::NoLegalMove { die: 3 }));
        assert_eq!(engine.auto_pass_remaining_ms(), Some(1000));
    }

    #[test]
    fn test_six_enters_and_repeats() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();
        let outcome = engine.apply_move(Color::Red).unwrap();

        assert_eq!(outcome.from, Position::BASE);
        assert_eq!(outcome.new_position, Position::START);
        assert!(outcome.repeats_turn);
        assert!(!outcome.win);
        assert_eq!(engine.session().current_color(), Some(Color::Red));
        assert_eq!(engine.session().pending_die(), None);
    }

    #[test]
    fn test_plain_move_passes_turn() {
        let mut engine = engine(2);
        engine.session.set_position(Color::Red, Position(10));
        engine.roll_die_with(4).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();
        assert_eq!(outcome.new_position, Position(14));
        assert!(!outcome.repeats_turn);
        assert_eq!(engine.session().current_color(), Some(Color::Yellow));
        assert_eq!(engine.session().turn_number(), 2);
    }

    #[test]
    fn test_capture_sends_home_and_repeats() {
        let mut engine = engine(2);
        engine.session.set_position(Color::Red, Position(48));
        engine.session.set_position(Color::Yellow, Position(24));
        engine.roll_die_with(2).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();

        assert_eq!(outcome.new_position, Position(50));
        assert_eq!(outcome.captured.as_slice(), &[Color::Yellow]);
        assert!(outcome.repeats_turn);
        assert_eq!(engine.session().position(Color::Yellow), Position::BASE);
        assert_eq!(engine.session().current_color(), Some(Color::Red));
    }

    #[test]
    fn test_no_capture_on_safe_cell() {
        let mut engine = engine(4);
        // Green's entry cell is red's step 13.
        engine.session.set_position(Color::Red, Position(9));
        engine.session.set_position(Color::Green, Position::START);
        engine.roll_die_with(4).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();
        assert_eq!(
            coordinates_of(Color::Red, outcome.new_position),
            coordinates_of(Color::Green, Position::START)
        );
        assert!(outcome.captured.is_empty());
        assert_eq!(engine.session().position(Color::Green), Position::START);
        assert_eq!(engine.session().current_color(), Some(Color::Green));
    }

    #[test]
    fn test_multiple_captures() {
        let mut engine = engine(4);
        // Red step 30 is track index 30: green step 17, blue step 43.
        engine.session.set_position(Color::Red, Position(27));
        engine.session.set_position(Color::Green, Position(17));
        engine.session.set_position(Color::Blue, Position(43));
        engine.roll_die_with(3).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();
        assert_eq!(outcome.captured.as_slice(), &[Color::Green, Color::Blue]);
        assert_eq!(engine.session().position(Color::Green), Position::BASE);
        assert_eq!(engine.session().position(Color::Blue), Position::BASE);
    }

    #[test]
    fn test_home_stretch_tokens_not_capturable() {
        let mut engine = engine(2);
        engine.session.set_position(Color::Yellow, Position(53));
        engine.session.set_position(Color::Red, Position(20));
        engine.roll_die_with(5).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(engine.session().position(Color::Yellow), Position(53));
    }

    #[test]
    fn test_win_from_home_stretch() {
        let mut engine = engine(2);
        engine.session.set_position(Color::Red, Position(51));
        engine.roll_die_with(6).unwrap();

        let outcome = engine.apply_move(Color::Red).unwrap();
        assert!(outcome.win);
        assert!(!outcome.repeats_turn);
        assert_eq!(engine.session().phase(), Phase::Finished);
        assert_eq!(engine.is_terminal(), Some(Color::Red));

        let events = engine.take_events();
        assert!(matches!(events.last(), Some(GameEvent::WinDetected { color: Color::Red })));

        let err = engine.roll_die().unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::NotInProgress));
    }

    #[test]
    fn test_apply_move_outside_session() {
        let mut idle = RulesEngine::new(EngineConfig::default().with_seed(1));
        for color in [Color::Red, Color::Yellow] {
            let err = idle.apply_move(color).unwrap_err();
            assert_eq!(err.rejection(), Some(MoveRejection::NotInProgress));
        }
        assert_eq!(idle.session(), &GameSession::setup());

        let mut engine = engine(2);
        engine.session.set_position(Color::Red, Position(51));
        engine.session.set_position(Color::Yellow, Position(10));
        engine.roll_die_with(6).unwrap();
        engine.apply_move(Color::Red).unwrap();

        let finished = engine.session().clone();
        for color in [Color::Red, Color::Yellow] {
            let err = engine.apply_move(color).unwrap_err();
            assert_eq!(err.rejection(), Some(MoveRejection::NotInProgress));
        }
        assert_eq!(engine.session(), &finished);
        assert_eq!(engine.session().winner(), Some(Color::Red));
        assert_eq!(engine.session().position(Color::Yellow), Position(10));
    }

    #[test]
    fn test_move_needs_a_current_color() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();

        let mut value = serde_json::to_value(engine.session()).unwrap();
        value["turn_index"] = serde_json::json!(7);
        engine.session = serde_json::from_value(value).unwrap();
        assert_eq!(engine.session().current_color(), None);

        let err = engine.apply_move(Color::Yellow).unwrap_err();
        assert_eq!(err.rejection(), Some(MoveRejection::NotInProgress));
        assert_eq!(engine.session().position(Color::Yellow), Position::BASE);
    }

    #[test]
    fn test_from_parts_rejects_inconsistent_session() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();
        let good = serde_json::to_value(engine.session()).unwrap();

        let corruptions: [(&str, serde_json::Value); 5] = [
            ("/turn_index", serde_json::json!(7)),
            ("/colors", serde_json::json!(["red", "red"])),
            ("/positions/data/0", serde_json::json!(60)),
            ("/pending_die", serde_json::json!(9)),
            ("/winner", serde_json::json!("red")),
        ];
        for (pointer, bad) in corruptions {
            let mut value = good.clone();
            *value.pointer_mut(pointer).unwrap() = bad;
            let session: GameSession = serde_json::from_value(value).unwrap();

            let err = RulesEngine::from_parts(EngineConfig::default(), session, &engine.rng_state())
                .unwrap_err();
            assert!(matches!(err, RulesError::InvalidConfiguration { .. }), "{pointer}");
        }
    }

    #[test]
    fn test_auto_pass_after_delay() {
        let mut engine = engine(2);
        engine.roll_die_with(2).unwrap();

        assert!(!engine.tick(999));
        assert_eq!(engine.session().pending_die(), Some(2));
        assert_eq!(engine.session().current_color(), Some(Color::Red));

        assert!(engine.tick(1));
        assert_eq!(engine.session().pending_die(), None);
        assert_eq!(engine.session().current_color(), Some(Color::Yellow));
        assert_eq!(engine.auto_pass_remaining_ms(), None);

        let events = engine.take_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::TurnAutoPassed { from: Color::Red, to: Color::Yellow, die: 2 })
        );
    }

    #[test]
    fn test_new_session_cancels_auto_pass() {
        let mut engine = engine(2);
        engine.roll_die_with(1).unwrap();
        assert!(engine.auto_pass_remaining_ms().is_some());

        engine.start_session(SessionConfig::new(4)).unwrap();
        assert_eq!(engine.auto_pass_remaining_ms(), None);
        assert!(!engine.tick(5000));
        assert_eq!(engine.session().current_color(), Some(Color::Red));
    }

    #[test]
    fn test_reset_cancels_auto_pass() {
        let mut engine = engine(3);
        engine.roll_die_with(4).unwrap();
        engine.reset();

        assert_eq!(engine.session().phase(), Phase::Setup);
        assert!(!engine.tick(5000));
        assert_eq!(engine.take_events(), vec![GameEvent::SessionReset]);
    }

    #[test]
    fn test_rename() {
        let mut engine = engine(2);
        engine.rename(Color::Yellow, "  Zed ").unwrap();
        assert_eq!(engine.session().name(Color::Yellow), "Zed");

        assert!(engine.rename(Color::Yellow, "  ").is_err());
        assert!(engine.rename(Color::Blue, "Nope").is_err());
        assert_eq!(engine.session().name(Color::Yellow), "Zed");
    }

    #[test]
    fn test_pending_target() {
        let mut engine = engine(2);
        assert_eq!(engine.pending_target(), None);

        engine.roll_die_with(6).unwrap();
        assert_eq!(engine.pending_target(), Some(Position::START));
    }

    #[test]
    fn test_move_log() {
        let mut engine = engine(2);
        engine.roll_die_with(6).unwrap();
        engine.apply_move(Color::Red).unwrap();
        engine.roll_die_with(5).unwrap();
        engine.apply_move(Color::Red).unwrap();

        let moves = engine.session().moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].to, Position::START);
        assert_eq!(moves[1].from, Position::START);
        assert_eq!(moves[1].to, Position(5));
        assert_eq!(moves[1].turn_number, 1);
    }

    #[test]
    fn test_from_parts_reschedules_dead_roll() {
        let mut engine = engine(2);
        engine.roll_die_with(3).unwrap();

        let session = engine.session().clone();
        let mut restored = RulesEngine::from_parts(
            EngineConfig::default().with_auto_pass_delay_ms(10),
            session,
            &engine.rng_state(),
        )
        .unwrap();
        assert_eq!(restored.auto_pass_remaining_ms(), Some(10));
        assert!(restored.tick(10));
        assert_eq!(restored.session().current_color(), Some(Color::Yellow));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = RulesEngine::new(EngineConfig::default().with_seed(9));
        let mut b = RulesEngine::new(EngineConfig::default().with_seed(9));
        a.start_session(SessionConfig::new(2)).unwrap();
        b.start_session(SessionConfig::new(2)).unwrap();

        for _ in 0..20 {
            if a.is_terminal().is_some() {
                break;
            }
            assert_eq!(a.roll_die().unwrap(), b.roll_die().unwrap());
            a.tick(1000);
            b.tick(1000);
            let current = a.session().current_color().unwrap();
            if a.session().pending_die().is_some() {
                a.apply_move(current).unwrap();
                b.apply_move(current).unwrap();
            }
        }
        assert_eq!(a.session(), b.session());
    }
}
