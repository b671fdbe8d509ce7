//! Position to coordinate mapping.
//!
//! `coordinates_of` is the only place that turns owner-relative progress
//! into a board cell. Rendering, collision checks and safe-cell checks all
//! go through it.

use crate::core::{Color, Position};

use super::geometry::{path_offset, BoardGeometry, Coord, COMMON_PATH_LEN, HOME_STRETCH_LEN};

/// Board cell of `color`'s token at `position`.
///
/// Total over every `Position` value:
/// - at base: the color's base anchor
/// - `0..=50`: the shared track, shifted by the color's path offset
/// - `51..=56`: the color's home stretch
/// - `57` and beyond: the center
///
/// ```
/// use ludo_engine::board::{coordinates_of, Coord};
/// use ludo_engine::core::{Color, Position};
///
/// assert_eq!(coordinates_of(Color::Red, Position::START), Coord::new(1, 6));
/// assert_eq!(coordinates_of(Color::Green, Position::START), Coord::new(8, 1));
/// assert_eq!(coordinates_of(Color::Blue, Position::FINISHED), Coord::CENTER);
/// ```
#[must_use]
pub fn coordinates_of(color: Color, position: Position) -> Coord {
    let geo = BoardGeometry::get();
    let pos = position.value();

    if pos < 0 {
        return geo.base_position(color);
    }

    let pos = pos as usize;
    if pos >= Position::HOME_ENTRY.value() as usize {
        let home_idx = pos - Position::HOME_ENTRY.value() as usize;
        return geo
            .home_path(color)
            .get(home_idx)
            .copied()
            .unwrap_or(Coord::CENTER);
    }

    geo.common_path()[(pos + path_offset(color)) % COMMON_PATH_LEN]
}

/// Board cell of a token, but only while it can be captured.
///
/// Tokens at base, in a home stretch or finished are out of reach.
#[must_use]
pub fn capturable_cell(color: Color, position: Position) -> Option<Coord> {
    position
        .is_on_track()
        .then(|| coordinates_of(color, position))
}

/// Cells a token passes through on its way from `from` to `to`, `to`
/// included. Used by presentation code to animate a move.
#[must_use]
pub fn route(color: Color, from: Position, to: Position) -> Vec<Coord> {
    if to.is_at_base() || to <= from {
        return Vec::new();
    }
    let first = if from.is_at_base() { 0 } else { from.value() + 1 };
    (first..=to.value())
        .map(|p| coordinates_of(color, Position(p)))
        .collect()
}

const _: () = assert!(Position::FINISHED.value() as usize == Position::HOME_ENTRY.value() as usize + HOME_STRETCH_LEN);
