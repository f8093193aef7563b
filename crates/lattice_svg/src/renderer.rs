//! Culling border renderer.

use lattice_core::{BorderRect, ClipRect, StyledEdge};
use rustc_hash::FxHashMap;

use crate::brush::Brush;
use crate::surface::{RenderHint, StrokeStyle, Surface, SurfaceError};

/// Stroke applied when an edge carries an empty style string.
pub const DEFAULT_STROKE: &str = "1px black";

/// Draws cell border lines onto one vector surface.
///
/// A renderer owns its surface and all per-surface state: the last applied
/// size and the style-to-brush cache. Construct one renderer per grid
/// surface and keep it for the surface's lifetime; brush count is bounded by
/// distinct stroke styles, not by rectangle count. Multiple grid widgets
/// each get their own renderer instance.
pub struct BorderRenderer<S: Surface> {
    surface: S,
    last_width: Option<f32>,
    last_height: Option<f32>,
    brushes: Vec<Brush>,
    by_style: FxHashMap<String, usize>,
}

impl<S: Surface> BorderRenderer<S> {
    /// Bind a surface, applying the render hint once.
    pub fn new(surface: S) -> Result<Self, SurfaceError> {
        Self::with_hint(surface, RenderHint::OptimizeSpeed)
    }

    pub fn with_hint(mut surface: S, hint: RenderHint) -> Result<Self, SurfaceError> {
        surface.set_render_hint(hint)?;
        tracing::debug!(hint = hint.as_attr(), "border renderer bound to surface");
        Ok(Self {
            surface,
            last_width: None,
            last_height: None,
            brushes: Vec::new(),
            by_style: FxHashMap::default(),
        })
    }

    /// Shared access to the surface, e.g. for serialization.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Exclusive access to the surface, e.g. to detach it at teardown.
    ///
    /// The renderer assumes nothing else rewrites its path elements between
    /// passes; external mutation defeats the change-detected flush.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the renderer, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Render one pass of border lines clipped to `clip`.
    ///
    /// `grouped` must come from [`lattice_core::group_by_row`] or an
    /// equivalent producer: rows ordered by non-decreasing `y1` with uniform
    /// `y1` per row, and rectangles within a row ordered by non-decreasing
    /// `x1`. The early exits below are only correct under that order;
    /// feeding unsorted data culls the wrong subset, it does not panic.
    ///
    /// Only the surface is mutated, and only where something changed: the
    /// size attributes when a total differs from the previous pass, and each
    /// brush's path data when its rebuilt instruction differs from the last
    /// flushed one. Two identical consecutive passes perform zero writes.
    pub fn render(
        &mut self,
        total_width: f32,
        total_height: f32,
        grouped: &[Vec<BorderRect>],
        clip: ClipRect,
    ) -> Result<(), SurfaceError> {
        if self.last_width != Some(total_width) {
            self.surface.set_width(total_width)?;
            self.last_width = Some(total_width);
            tracing::trace!(width = total_width, "surface width applied");
        }
        if self.last_height != Some(total_height) {
            self.surface.set_height(total_height)?;
            self.last_height = Some(total_height);
            tracing::trace!(height = total_height, "surface height applied");
        }

        for brush in &mut self.brushes {
            brush.reset();
        }

        'rows: for row in grouped {
            for rect in row {
                let outside = rect.x1 > clip.x2
                    || rect.x2 < clip.x1
                    || rect.y1 > clip.y2
                    || rect.y2 < clip.y1;
                if outside {
                    if rect.y1 > clip.y2 {
                        // Rows are y1-ascending: every remaining row starts
                        // below the clip as well.
                        break 'rows;
                    }
                    if rect.x1 > clip.x2 {
                        // The row is x1-ascending: the rest of it is past
                        // the clip's right edge.
                        break;
                    }
                    continue;
                }

                for edge in rect.styled_edges() {
                    match edge {
                        StyledEdge::Horizontal { x1, y, x2, stroke } => {
                            self.brush_for_style(stroke)?.line_h(x1, y, x2);
                        }
                        StyledEdge::Vertical { x, y1, y2, stroke } => {
                            self.brush_for_style(stroke)?.line_v(x, y1, y2);
                        }
                    }
                }
            }

            // Flushing per row bounds write latency on large scans. A
            // brush still matching a prefix of its flushed content is left
            // alone here: it may complete to the identical value, and then
            // nothing needs writing at all.
            self.flush_diverged()?;
        }

        // Exact-diff flush: covers rows skipped by the early exit and
        // brushes whose content shrank to a prefix of the previous pass,
        // including brushes that drew nothing and clear to empty.
        self.flush_changed()
    }

    /// Get or create the brush for `style`.
    ///
    /// Lookup is by exact string equality. Styles differing in whitespace or
    /// token order are distinct on purpose: normalizing would observably
    /// change which rectangles share a path element. An empty style is its
    /// own cache key but draws with [`DEFAULT_STROKE`] attributes.
    fn brush_for_style(&mut self, style: &str) -> Result<&mut Brush, SurfaceError> {
        let index = match self.by_style.get(style) {
            Some(&index) => index,
            None => {
                let effective = if style.is_empty() { DEFAULT_STROKE } else { style };
                let path = self.surface.create_path(&StrokeStyle::parse(effective))?;
                tracing::trace!(style, "brush created");
                self.by_style.insert(style.to_owned(), self.brushes.len());
                self.brushes.push(Brush::new(path));
                self.brushes.len() - 1
            }
        };
        Ok(&mut self.brushes[index])
    }

    /// Write out every brush whose instruction diverged from its flushed
    /// content. Used mid-pass, where a prefix of the flushed content may
    /// still complete to an identical value.
    fn flush_diverged(&mut self) -> Result<(), SurfaceError> {
        for brush in &mut self.brushes {
            if brush.diverged() {
                self.surface.set_path_data(brush.path(), brush.instruction())?;
                brush.mark_flushed();
            }
        }
        Ok(())
    }

    /// Write out every brush whose instruction differs from its flushed
    /// content, exactly. Used once per pass, after the scan.
    fn flush_changed(&mut self) -> Result<(), SurfaceError> {
        for brush in &mut self.brushes {
            if brush.needs_flush() {
                self.surface.set_path_data(brush.path(), brush.instruction())?;
                brush.mark_flushed();
            }
        }
        Ok(())
    }
}
