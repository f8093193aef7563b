//! lattice_core
//!
//! Core geometry for the lattice grid widget: cell border rectangles with
//! per-edge stroke styles, plus the row grouping that the border renderer
//! relies on for early-exit culling.
//!
//! This crate is pure data and sorting. Nothing here knows about surfaces,
//! brushes, or path data; see `lattice_svg` for the rendering side.

pub mod border;
pub mod grouping;

pub use border::{BorderRect, ClipRect, EdgeStyle, StyledEdge};
pub use grouping::group_by_row;
