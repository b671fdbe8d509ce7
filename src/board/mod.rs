//! Board geometry: the shared track, home stretches, base anchors and safe
//! cells, plus the mapping from token progress to board cells.

pub mod geometry;
pub mod mapper;
pub mod layout;

pub use geometry::{
    generate_common_path, is_closed_loop, path_offset, BoardGeometry, Coord, BOARD_SIZE,
    COMMON_PATH_LEN, HOME_STRETCH_LEN,
};
pub use mapper::{capturable_cell, coordinates_of, route};
pub use layout::{cell_kind, render_ascii, tokens_at, CellKind};
