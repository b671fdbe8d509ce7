//! Deferred turn pass after a dead roll.
//!
//! When a roll leaves the current color with no legal move, the value stays
//! on screen for a short while before the turn moves on. The engine owns one
//! `AutoPassTimer`; the host drives it with elapsed time through
//! `RulesEngine::tick`. Starting or resetting a session cancels it, so a
//! pass scheduled for one session can never fire into the next.

use crate::core::Color;

/// A pass waiting to happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledPass {
    /// Color whose turn will be passed.
    pub color: Color,
    /// The dead roll being shown.
    pub die: u8,
    remaining_ms: u32,
}

impl ScheduledPass {
    /// Time left before the pass fires.
    #[must_use]
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

/// Cancellable single-shot timer.
#[derive(Clone, Debug, Default)]
pub struct AutoPassTimer {
    pending: Option<ScheduledPass>,
}

impl AutoPassTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a pass, replacing any earlier one.
    pub fn schedule(&mut self, color: Color, die: u8, delay_ms: u32) {
        self.pending = Some(ScheduledPass {
            color,
            die,
            remaining_ms: delay_ms,
        });
    }

    /// Drop the scheduled pass. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn scheduled(&self) -> Option<&ScheduledPass> {
        self.pending.as_ref()
    }

    /// Let `elapsed_ms` pass. Returns the pass once its delay has run out;
    /// the timer is then empty.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<ScheduledPass> {
        let pass = self.pending.as_mut()?;
        pass.remaining_ms = pass.remaining_ms.saturating_sub(elapsed_ms);
        if pass.remaining_ms == 0 {
            self.pending.take()
        } else {
            None
        }
    }
}
