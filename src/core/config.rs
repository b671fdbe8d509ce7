//! Engine and session configuration.
//!
//! - `EngineConfig`: fixed for the lifetime of a `RulesEngine` (die seed,
//!   auto-pass delay)
//! - `SessionConfig`: chosen on the setup screen for each session (color
//!   count and display names)

use serde::{Deserialize, Serialize};

use super::color::{ActiveColors, Color, ColorMap};
use super::error::RulesError;

/// Default time a dead roll stays visible before the turn passes.
pub const DEFAULT_AUTO_PASS_DELAY_MS: u32 = 1000;

/// Rules engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Die seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How long a roll with no legal move stays pending before the
    /// engine passes the turn.
    pub auto_pass_delay_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            auto_pass_delay_ms: DEFAULT_AUTO_PASS_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Use a fixed die seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the auto-pass delay.
    #[must_use]
    pub fn with_auto_pass_delay_ms(mut self, delay_ms: u32) -> Self {
        self.auto_pass_delay_ms = delay_ms;
        self
    }
}

/// Settings for a single session.
///
/// Names left unset, empty or blank fall back to the color's default
/// display name. Names for colors that do not play are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of colors playing (2, 3 or 4).
    pub color_count: usize,

    /// Requested display names.
    pub names: ColorMap<Option<String>>,
}

impl SessionConfig {
    /// Create a session config for `color_count` players with default names.
    pub fn new(color_count: usize) -> Self {
        Self {
            color_count,
            names: ColorMap::default(),
        }
    }

    /// Set one color's display name.
    #[must_use]
    pub fn with_name(mut self, color: Color, name: impl Into<String>) -> Self {
        self.names[color] = Some(name.into());
        self
    }

    /// Set several display names at once.
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = (Color, S)>) -> Self {
        for (color, name) in names {
            self.names[color] = Some(name.into());
        }
        self
    }

    /// Colors taking part, in turn order.
    pub fn active_colors(&self) -> Result<ActiveColors, RulesError> {
        Color::active_for(self.color_count).ok_or_else(|| {
            RulesError::invalid(format!(
                "color count must be 2, 3 or 4 (got {})",
                self.color_count
            ))
        })
    }

    /// Final display names with defaults applied.
    #[must_use]
    pub fn resolved_names(&self) -> ColorMap<String> {
        ColorMap::new(|color| {
            self.names[color]
                .as_deref()
                .and_then(normalize_name)
                .unwrap_or_else(|| color.default_display_name().to_string())
        })
    }
}

/// Trim a display name, rejecting blank ones.
pub(crate) fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
