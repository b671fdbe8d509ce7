//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The closed set of four Ludo colors. `Color::ALL` is the one and only
//! turn-order table: red → green → yellow → blue. Any subset of colors
//! taking part in a session keeps this relative order.
//!
//! ## ColorMap
//!
//! Fixed per-color storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Colors taking part in a session, in turn order.
pub type ActiveColors = SmallVec<[Color; 4]>;

/// One of the four Ludo colors.
///
/// The declaration order is the turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Board quadrant owned by this color, counted clockwise from red.
    ///
    /// Every per-color board table is red's table rotated this many
    /// quarter turns about the center.
    #[must_use]
    pub const fn quadrant(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
        }
    }

    /// Index into per-color storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.quadrant()
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    /// Default display name shown before a player picks one.
    #[must_use]
    pub const fn default_display_name(self) -> &'static str {
        match self {
            Color::Red => "Player 1",
            Color::Green => "Player 2",
            Color::Yellow => "Player 3",
            Color::Blue => "Player 4",
        }
    }

    /// Colors that play in a session of `count` players.
    ///
    /// Two players sit at opposite corners. Returns `None` for counts
    /// outside 2..=4.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// let two = Color::active_for(2).unwrap();
    /// assert_eq!(two.as_slice(), &[Color::Red, Color::Yellow]);
    /// assert!(Color::active_for(5).is_none());
    /// ```
    #[must_use]
    pub fn active_for(count: usize) -> Option<ActiveColors> {
        let colors: &[Color] = match count {
            2 => &[Color::Red, Color::Yellow],
            3 => &[Color::Red, Color::Green, Color::Yellow],
            4 => &Color::ALL,
            _ => return None,
        };
        Some(SmallVec::from_slice(colors))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// Always holds exactly one entry per color, whether or not the color
/// is active in the current session.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut steps: ColorMap<u32> = ColorMap::with_value(0);
/// steps[Color::Green] += 3;
/// assert_eq!(steps[Color::Green], 3);
/// assert_eq!(steps[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
