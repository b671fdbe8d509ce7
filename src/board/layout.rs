//! Cell classification for drawing the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, GameSession};

use super::geometry::{BoardGeometry, Coord, BOARD_SIZE};
use super::mapper::coordinates_of;

/// What occupies a board cell, independent of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// A color's corner yard.
    Base(Color),
    /// Shared track cell.
    Track { safe: bool },
    /// A color's private home stretch.
    HomeStretch(Color),
    /// The 3×3 finishing block.
    Center,
    /// Outside the board.
    Void,
}

/// Classify a cell.
#[must_use]
pub fn cell_kind(coord: Coord) -> CellKind {
    if !coord.in_bounds() {
        return CellKind::Void;
    }

    let geo = BoardGeometry::get();
    if geo.track_index(coord).is_some() {
        return CellKind::Track {
            safe: geo.is_safe(coord),
        };
    }
    if let Some(&color) = Color::ALL
        .iter()
        .find(|&&c| geo.home_path(c).contains(&coord))
    {
        return CellKind::HomeStretch(color);
    }
    if (6..=8).contains(&coord.x) && (6..=8).contains(&coord.y) {
        return CellKind::Center;
    }
    Color::ALL
        .into_iter()
        .find(|&c| in_red_yard(coord.rotated(4 - c.quadrant())))
        .map_or(CellKind::Void, CellKind::Base)
}

fn in_red_yard(coord: Coord) -> bool {
    coord.x < 6 && coord.y > 8
}

/// Active colors whose token is drawn on `coord`.
///
/// Tokens at base sit on their base anchor; finished tokens are not drawn.
#[must_use]
pub fn tokens_at(session: &GameSession, coord: Coord) -> SmallVec<[Color; 4]> {
    session
        .colors()
        .iter()
        .copied()
        .filter(|&color| {
            let position = session.position(color);
            !position.is_finished() && coordinates_of(color, position) == coord
        })
        .collect()
}

/// Plain-text board, one line per row.
///
/// Tokens are uppercase initials (a digit when several share a cell),
/// home stretches lowercase initials, `.` track, `+` safe cell, `#` center.
#[must_use]
pub fn render_ascii(session: &GameSession) -> String {
    let size = usize::from(BOARD_SIZE);
    let mut out = String::with_capacity(size * (size + 1));

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let coord = Coord::new(x, y);
            let tokens = tokens_at(session, coord);
            let ch = match tokens.as_slice() {
                [] => background(cell_kind(coord)),
                [color] => initial(*color).to_ascii_uppercase(),
                many => char::from_digit(many.len() as u32, 10).unwrap_or('*'),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn background(kind: CellKind) -> char {
    match kind {
        CellKind::Track { safe: true } => '+',
        CellKind::Track { safe: false } => '.',
        CellKind::HomeStretch(color) => initial(color),
        CellKind::Center => '#',
        CellKind::Base(_) | CellKind::Void => ' ',
    }
}

fn initial(color: Color) -> char {
    match color {
        Color::Red => 'r',
        Color::Green => 'g',
        Color::Yellow => 'y',
        Color::Blue => 'b',
    }
}
