//! Cell border geometry.

use smallvec::SmallVec;

/// Stroke style for one edge of a cell border.
///
/// The style is an opaque `"<width><unit> <color>"` token pair, e.g.
/// `"1px black"`. It is carried verbatim: equality is byte equality and no
/// normalization is applied, so `"1px black"` and `"1px  black"` are two
/// different styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeStyle {
    pub stroke: String,
}

impl EdgeStyle {
    pub fn new(stroke: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
        }
    }
}

/// One cell's border rectangle: bounds plus up to four styled edges.
///
/// Bounds are expected to satisfy `x1 <= x2` and `y1 <= y2`. Ill-formed
/// bounds are not rejected; they produce undefined visual output, not a
/// panic.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub top: Option<EdgeStyle>,
    pub right: Option<EdgeStyle>,
    pub bottom: Option<EdgeStyle>,
    pub left: Option<EdgeStyle>,
}

impl BorderRect {
    /// Bounds with no styled edges.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    pub fn with_top(mut self, stroke: impl Into<String>) -> Self {
        self.top = Some(EdgeStyle::new(stroke));
        self
    }

    pub fn with_right(mut self, stroke: impl Into<String>) -> Self {
        self.right = Some(EdgeStyle::new(stroke));
        self
    }

    pub fn with_bottom(mut self, stroke: impl Into<String>) -> Self {
        self.bottom = Some(EdgeStyle::new(stroke));
        self
    }

    pub fn with_left(mut self, stroke: impl Into<String>) -> Self {
        self.left = Some(EdgeStyle::new(stroke));
        self
    }

    /// Styled edges as drawable line segments, in clockwise order.
    ///
    /// Bottom and left run reversed (right-to-left, bottom-to-top) so that
    /// each edge starts where the previous one ended whenever the two are
    /// spatially contiguous. A pen-tracking consumer can then skip the move
    /// command between them.
    pub fn styled_edges(&self) -> SmallVec<[StyledEdge<'_>; 4]> {
        let mut edges = SmallVec::new();
        if let Some(ref top) = self.top {
            edges.push(StyledEdge::Horizontal {
                x1: self.x1,
                y: self.y1,
                x2: self.x2,
                stroke: &top.stroke,
            });
        }
        if let Some(ref right) = self.right {
            edges.push(StyledEdge::Vertical {
                x: self.x2,
                y1: self.y1,
                y2: self.y2,
                stroke: &right.stroke,
            });
        }
        if let Some(ref bottom) = self.bottom {
            edges.push(StyledEdge::Horizontal {
                x1: self.x2,
                y: self.y2,
                x2: self.x1,
                stroke: &bottom.stroke,
            });
        }
        if let Some(ref left) = self.left {
            edges.push(StyledEdge::Vertical {
                x: self.x1,
                y1: self.y2,
                y2: self.y1,
                stroke: &left.stroke,
            });
        }
        edges
    }
}

/// A line segment contributed by one styled edge of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyledEdge<'a> {
    /// Horizontal run at `y` from `x1` to `x2` (`x2` may be left of `x1`).
    Horizontal {
        x1: f32,
        y: f32,
        x2: f32,
        stroke: &'a str,
    },
    /// Vertical run at `x` from `y1` to `y2` (`y2` may be above `y1`).
    Vertical {
        x: f32,
        y1: f32,
        y2: f32,
        stroke: &'a str,
    },
}

/// Visible viewport region, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl ClipRect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True when `rect` has any overlap with this clip. Rectangles that
    /// merely touch the clip edge count as overlapping.
    pub fn overlaps(&self, rect: &BorderRect) -> bool {
        !(rect.x1 > self.x2 || rect.x2 < self.x1 || rect.y1 > self.y2 || rect.y2 < self.y1)
    }
}
