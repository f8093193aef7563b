//! lattice_svg
//!
//! SVG border rendering for the lattice grid widget.
//!
//! Cell borders for a virtualized grid are drawn as one retained SVG
//! surface: a single path element per distinct stroke style, rebuilt
//! incrementally on every scroll or resize. The renderer culls against the
//! viewport clip using the row order produced by
//! [`lattice_core::group_by_row`], and contiguous segments coalesce into
//! compact move/draw command runs so that a path's data is only rewritten
//! when a pass actually changed it.
//!
//! # Example
//!
//! ```rust
//! use lattice_core::{group_by_row, BorderRect, ClipRect};
//! use lattice_svg::{BorderRenderer, SvgScene};
//!
//! let rects = vec![
//!     BorderRect::new(0.0, 0.0, 80.0, 24.0).with_top("1px black"),
//!     BorderRect::new(0.0, 24.0, 80.0, 48.0).with_top("1px black"),
//! ];
//! let grouped = group_by_row(&rects);
//!
//! let mut renderer = BorderRenderer::new(SvgScene::new())?;
//! renderer.render(800.0, 600.0, &grouped, ClipRect::new(0.0, 0.0, 800.0, 600.0))?;
//!
//! assert_eq!(renderer.surface().path_count(), 1); // one shared style, one path
//! # Ok::<(), lattice_svg::SurfaceError>(())
//! ```

pub mod brush;
pub mod renderer;
pub mod surface;

pub use brush::Brush;
pub use renderer::{BorderRenderer, DEFAULT_STROKE};
pub use surface::{
    PathKey, RenderHint, ScenePath, StrokeStyle, Surface, SurfaceError, SvgScene,
};
