//! Retained vector surface for border rendering.
//!
//! A [`Surface`] is the seam between the border renderer and whatever
//! actually displays the lines, such as a browser DOM element behind a wasm
//! bridge or the in-memory [`SvgScene`] provided here. The renderer creates
//! one `<path>` child per distinct stroke style and then only ever rewrites
//! path-data attributes, so implementations should treat element creation
//! as rare and attribute writes as the hot operation.

use std::fmt::Write as _;

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Key of one retained path element within a surface.
    pub struct PathKey;
}

/// Shape-rendering hint applied once when a renderer binds a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderHint {
    /// Favor raster throughput over edge quality. Grid borders are axis
    /// aligned, where the difference is not visible.
    #[default]
    OptimizeSpeed,
    /// Let the backing implementation decide.
    Auto,
}

impl RenderHint {
    /// Attribute value understood by SVG `shape-rendering`.
    pub fn as_attr(self) -> &'static str {
        match self {
            RenderHint::OptimizeSpeed => "optimizeSpeed",
            RenderHint::Auto => "auto",
        }
    }
}

/// Fault raised by a backing surface.
///
/// The render path itself has no failure modes: malformed styles degrade
/// silently and ill-formed geometry draws garbage rather than erroring. The
/// only faults are those of the surface being drawn to, and the renderer
/// propagates them to the caller unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface is detached")]
    Detached,
}

/// Parsed form of an edge stroke style string.
///
/// A style splits on single spaces into at most two tokens: width first,
/// color second. Parsing never fails. A missing token leaves the matching
/// attribute absent, anything after the second token is ignored, and no
/// normalization happens. Multi-word colors are unsupported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrokeStyle {
    pub width: Option<String>,
    pub color: Option<String>,
}

impl StrokeStyle {
    pub fn parse(style: &str) -> Self {
        let mut tokens = style.split(' ');
        Self {
            width: tokens.next().filter(|t| !t.is_empty()).map(str::to_owned),
            color: tokens.next().filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }
}

/// Mutating operations a border renderer performs against its surface.
///
/// Implementations own a collection of child path elements, created once per
/// stroke style and mutated in place; elements are released only when the
/// surface itself is torn down. Operations are infallible apart from faults
/// of the backing surface (a detached element tree, a dropped platform
/// handle).
pub trait Surface {
    /// Apply the shape-rendering hint. Called once when a renderer binds
    /// this surface.
    fn set_render_hint(&mut self, hint: RenderHint) -> Result<(), SurfaceError>;

    /// Set the displayed width, in pixels.
    fn set_width(&mut self, width: f32) -> Result<(), SurfaceError>;

    /// Set the displayed height, in pixels.
    fn set_height(&mut self, height: f32) -> Result<(), SurfaceError>;

    /// Create a child path element with no fill and the given stroke
    /// attributes, appended after all existing children.
    fn create_path(&mut self, stroke: &StrokeStyle) -> Result<PathKey, SurfaceError>;

    /// Replace the path-data attribute of a previously created element.
    fn set_path_data(&mut self, key: PathKey, data: &str) -> Result<(), SurfaceError>;
}

/// One retained path child of an [`SvgScene`].
///
/// Paths carry stroke lines only and never a fill.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenePath {
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
    pub data: String,
}

/// In-memory model of one `<svg>` element and its path children.
///
/// This is the reference [`Surface`]: a headless retained element tree that
/// embedders can mirror into a real DOM or serialize with
/// [`SvgScene::to_markup`]. Every mutating operation, element creation
/// included, bumps a write counter so callers can observe how much churn a
/// render pass produced.
#[derive(Clone, Debug, Default)]
pub struct SvgScene {
    render_hint: Option<RenderHint>,
    width_px: Option<String>,
    height_px: Option<String>,
    paths: SlotMap<PathKey, ScenePath>,
    order: Vec<PathKey>,
    write_count: usize,
    detached: bool,
}

impl SvgScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutating operations performed since creation.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn render_hint(&self) -> Option<RenderHint> {
        self.render_hint
    }

    /// Displayed width as a pixel-unit string, once set.
    pub fn width_px(&self) -> Option<&str> {
        self.width_px.as_deref()
    }

    /// Displayed height as a pixel-unit string, once set.
    pub fn height_px(&self) -> Option<&str> {
        self.height_px.as_deref()
    }

    pub fn path_count(&self) -> usize {
        self.order.len()
    }

    pub fn path(&self, key: PathKey) -> Option<&ScenePath> {
        self.paths.get(key)
    }

    /// Path children in document order.
    pub fn paths(&self) -> impl Iterator<Item = (PathKey, &ScenePath)> {
        self.order.iter().map(move |&key| (key, &self.paths[key]))
    }

    /// Mark the scene as torn down. Every later surface operation fails
    /// with [`SurfaceError::Detached`]; existing children stay readable.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn ensure_attached(&self) -> Result<(), SurfaceError> {
        if self.detached {
            Err(SurfaceError::Detached)
        } else {
            Ok(())
        }
    }

    /// Serialize the retained tree as SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\"");
        if let Some(hint) = self.render_hint {
            let _ = write!(out, " shape-rendering=\"{}\"", hint.as_attr());
        }
        if let (Some(w), Some(h)) = (&self.width_px, &self.height_px) {
            let _ = write!(out, " style=\"width: {w}; height: {h}\"");
        }
        out.push('>');
        for (_, path) in self.paths() {
            out.push_str("<path fill=\"none\"");
            if let Some(ref stroke) = path.stroke {
                let _ = write!(out, " stroke=\"{stroke}\"");
            }
            if let Some(ref width) = path.stroke_width {
                let _ = write!(out, " stroke-width=\"{width}\"");
            }
            if !path.data.is_empty() {
                let _ = write!(out, " d=\"{}\"", path.data.trim_end());
            }
            out.push_str("/>");
        }
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgScene {
    fn set_render_hint(&mut self, hint: RenderHint) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.render_hint = Some(hint);
        self.write_count += 1;
        Ok(())
    }

    fn set_width(&mut self, width: f32) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.width_px = Some(format!("{width}px"));
        self.write_count += 1;
        Ok(())
    }

    fn set_height(&mut self, height: f32) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.height_px = Some(format!("{height}px"));
        self.write_count += 1;
        Ok(())
    }

    fn create_path(&mut self, stroke: &StrokeStyle) -> Result<PathKey, SurfaceError> {
        self.ensure_attached()?;
        let key = self.paths.insert(ScenePath {
            stroke: stroke.color.clone(),
            stroke_width: stroke.width.clone(),
            data: String::new(),
        });
        self.order.push(key);
        self.write_count += 1;
        Ok(key)
    }

    fn set_path_data(&mut self, key: PathKey, data: &str) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        let Some(path) = self.paths.get_mut(key) else {
            return Ok(());
        };
        path.data.clear();
        path.data.push_str(data);
        self.write_count += 1;
        Ok(())
    }
}
