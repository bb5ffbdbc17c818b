use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};

#[derive(Clone, Debug)]
/// Backend-agnostic description of one figure.
///
/// Ops are painted in order over a background fill, so later ops sit on top.
pub struct RenderPlan {
    /// Output size.
    pub canvas: Canvas,
    /// Fill applied to the whole canvas before any op.
    pub background: Rgba8,
    /// Draw operations in paint order.
    pub ops: Vec<DrawOp>,
}

impl RenderPlan {
    /// An empty plan with a background color.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
        }
    }

    /// Append an op on top of the current ones.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Text ops only, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }
}

#[derive(Clone, Debug)]
/// Draw operation emitted by the figure compiler.
pub enum DrawOp {
    /// Solid axis-aligned rectangle.
    FillRect {
        /// Rectangle in pixels.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroked open path (polylines, axis lines, tick marks).
    Stroke {
        /// Path in pixels.
        path: BezPath,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A single line of text.
    Text(TextOp),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Horizontal alignment of text relative to its anchor point.
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Font weight used for text ops.
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Semibold (600).
    SemiBold,
}

#[derive(Clone, Debug)]
/// Text drawn vertically centered on `pos`.
pub struct TextOp {
    /// Anchor point in pixels.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in pixels.
    pub size: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Font weight.
    pub weight: FontWeight,
    /// Clockwise rotation around `pos`, in degrees.
    pub rotate_deg: f64,
}

/// Open polyline through `points`; empty input yields an empty path.
pub(crate) fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

/// Straight segment from `a` to `b`.
pub(crate) fn segment(a: Point, b: Point) -> BezPath {
    polyline(&[a, b])
}
