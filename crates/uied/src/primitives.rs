use crate::color::Color;

/// A 2D point in surface space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<[f32; 2]> for Point {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Rectangle from a top-left corner and a size, in the argument order
    /// callers usually write element positions in.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_min_size([x, y], [width, height])
    }

    pub fn x(&self) -> f32 {
        self.min[0]
    }

    pub fn y(&self) -> f32 {
        self.min[1]
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// Get the intersection of this rect with another
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min[0].max(other.min[0]);
        let min_y = self.min[1].max(other.min[1]);
        let max_x = self.max[0].min(other.max[0]);
        let max_y = self.max[1].min(other.max[1]);

        if min_x <= max_x && min_y <= max_y {
            Some(Rect {
                min: [min_x, min_y],
                max: [max_x, max_y],
            })
        } else {
            None
        }
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Corner shape for rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerShape {
    /// Sharp 90-degree corners
    None,
    /// Circular arc rounding with the given radius
    Round(f32),
}

impl CornerShape {
    pub fn radius(&self) -> f32 {
        match self {
            CornerShape::None => 0.0,
            CornerShape::Round(r) => *r,
        }
    }
}

/// Rectangle with corner shape, fill, and optional stroke
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    pub corner_shape: CornerShape,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl StyledRect {
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            corner_shape: CornerShape::None,
            fill,
            stroke: None,
        }
    }

    /// Outline only, nothing filled
    pub fn outline(rect: Rect, stroke: Stroke) -> Self {
        Self::new(rect, Color::transparent()).with_stroke(stroke)
    }

    pub fn with_corner_shape(mut self, corner_shape: CornerShape) -> Self {
        self.corner_shape = corner_shape;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Straight line segment
#[derive(Clone, Debug, PartialEq)]
pub struct LineShape {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// Font family used for a text run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    /// Proportional interface font (buttons, labels, inputs)
    Ui,
    /// Fixed-width font (terminal)
    Mono,
}

/// Horizontal text alignment inside the text rect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment inside the text rect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Single line of text, clipped to its rect
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Bounding box where the text should be rendered
    pub rect: Rect,
    /// The text content to render
    pub text: String,
    pub font: Font,
    /// Font size in pixels
    pub font_size: f32,
    pub color: Color,
    pub h_align: HorizontalAlign,
    pub v_align: VerticalAlign,
}

impl TextShape {
    pub fn new(
        rect: Rect,
        text: impl Into<String>,
        font: Font,
        font_size: f32,
        color: Color,
    ) -> Self {
        Self {
            rect,
            text: text.into(),
            font,
            font_size,
            color,
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Top,
        }
    }

    pub fn with_align(mut self, h_align: HorizontalAlign, v_align: VerticalAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

/// Shapes that a [`Surface`](crate::Surface) can draw
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
    Line(LineShape),
    Text(TextShape),
}
