//! Fixed board tables.
//!
//! The 15×15 board is a cross of four arms around a 3×3 center block. Each
//! arm is three cells wide: the outer columns carry the shared track, the
//! middle column is the owning color's home stretch.
//!
//! Only red's quadrant is described here. Every other quadrant is red's
//! rotated a quarter turn clockwise about the center per step, so the
//! shared track, the home stretches, the base anchors and the safe cells
//! all come from one description:
//!
//! ```text
//!  quadrant 0 track segment (13 cells, red entry first)
//!    (1,6) .. (5,6)   five cells along row 6 towards the center
//!    (6,5) .. (6,0)   six cells up column 6
//!    (7,0)            across the end of the top arm
//!    (8,0)            first cell down column 8
//! ```
//!
//! Tables are built once per process and shared by reference.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap};

/// Cells per board side.
pub const BOARD_SIZE: u8 = 15;

/// Cells on the shared track.
pub const COMMON_PATH_LEN: usize = 52;

/// Cells in each private home stretch.
pub const HOME_STRETCH_LEN: usize = 6;

/// Track cells contributed by each quadrant.
pub const ARM_LEN: usize = COMMON_PATH_LEN / 4;

/// Distance from a color's entry cell to its quadrant's star cell.
pub const STAR_OFFSET: usize = 8;

/// A cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// The finishing cell.
    pub const CENTER: Coord = Coord::new(7, 7);

    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Rotate a quarter turn clockwise about the center.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::new(BOARD_SIZE - 1 - self.y, self.x)
    }

    /// Rotate `quarter_turns` quarter turns clockwise about the center.
    #[must_use]
    pub fn rotated(self, quarter_turns: usize) -> Self {
        (0..quarter_turns % 4).fold(self, |c, _| c.rotate_cw())
    }

    /// Neighbouring cell, diagonals included.
    ///
    /// The track turns diagonally around the corners of the center block,
    /// e.g. from (5,6) to (6,5).
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        self != other && dx <= 1 && dy <= 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Red's part of the shared track, entry cell first.
fn arm_segment() -> impl Iterator<Item = Coord> {
    let approach = (1..=5).map(|x| Coord::new(x, 6));
    let climb = (0..=5).rev().map(|y| Coord::new(6, y));
    let crossing = [Coord::new(7, 0), Coord::new(8, 0)];
    approach.chain(climb).chain(crossing)
}

/// Enumerate the shared track in traversal order, starting at red's entry
/// cell and running clockwise.
///
/// Pure: every call returns the same 52 cells.
#[must_use]
pub fn generate_common_path() -> Vec<Coord> {
    (0..4)
        .flat_map(|quadrant| arm_segment().map(move |c| c.rotated(quadrant)))
        .collect()
}

/// Check that `path` is a closed track of 52 distinct in-bounds cells,
/// each adjacent to the next and the last adjacent to the first.
#[must_use]
pub fn is_closed_loop(path: &[Coord]) -> bool {
    if path.len() != COMMON_PATH_LEN || !path.iter().all(|c| c.in_bounds()) {
        return false;
    }

    let distinct: FxHashSet<Coord> = path.iter().copied().collect();
    if distinct.len() != path.len() {
        return false;
    }

    let steps_connected = path.windows(2).all(|w| w[0].is_adjacent(w[1]));
    steps_connected && path[path.len() - 1].is_adjacent(path[0])
}

/// Index into the common path of a color's logical position 0.
#[must_use]
pub const fn path_offset(color: Color) -> usize {
    color.quadrant() * ARM_LEN
}

/// Immutable board tables.
#[derive(Debug)]
pub struct BoardGeometry {
    common_path: Vec<Coord>,
    home_paths: ColorMap<[Coord; HOME_STRETCH_LEN]>,
    base_positions: ColorMap<Coord>,
    safe_cells: FxHashSet<Coord>,
    track_index: FxHashMap<Coord, usize>,
}

static GEOMETRY: Lazy<BoardGeometry> = Lazy::new(BoardGeometry::build);

impl BoardGeometry {
    /// The process-wide board tables.
    #[must_use]
    pub fn get() -> &'static BoardGeometry {
        &GEOMETRY
    }

    fn build() -> Self {
        let common_path = generate_common_path();
        debug_assert!(is_closed_loop(&common_path));

        let home_paths = ColorMap::new(|color| {
            std::array::from_fn(|i| Coord::new(1 + i as u8, 7).rotated(color.quadrant()))
        });
        let base_positions = ColorMap::new(|color| Coord::new(2, 12).rotated(color.quadrant()));

        let safe_cells = Color::ALL
            .iter()
            .flat_map(|&color| {
                let entry = path_offset(color);
                [common_path[entry], common_path[entry + STAR_OFFSET]]
            })
            .collect();

        let track_index = common_path
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        Self {
            common_path,
            home_paths,
            base_positions,
            safe_cells,
            track_index,
        }
    }

    /// The shared track in traversal order.
    #[must_use]
    pub fn common_path(&self) -> &[Coord] {
        &self.common_path
    }

    /// A color's private lane, outermost cell first.
    #[must_use]
    pub fn home_path(&self, color: Color) -> &[Coord; HOME_STRETCH_LEN] {
        &self.home_paths[color]
    }

    /// Where a color's token rests while at base.
    #[must_use]
    pub fn base_position(&self, color: Color) -> Coord {
        self.base_positions[color]
    }

    /// A color's entry cell on the shared track.
    #[must_use]
    pub fn entry_cell(&self, color: Color) -> Coord {
        self.common_path[path_offset(color)]
    }

    /// Captures never happen on safe cells.
    #[must_use]
    pub fn is_safe(&self, coord: Coord) -> bool {
        self.safe_cells.contains(&coord)
    }

    /// All safe cells.
    pub fn safe_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.safe_cells.iter().copied()
    }

    /// Index of `coord` on the shared track, if it is a track cell.
    #[must_use]
    pub fn track_index(&self, coord: Coord) -> Option<usize> {
        self.track_index.get(&coord).copied()
    }
}
