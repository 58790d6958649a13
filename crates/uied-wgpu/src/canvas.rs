//! CPU framebuffer the UI is painted into before presentation
//!
//! Shapes are rasterized with signed distance coverage, so every edge is
//! anti-aliased over one pixel. Colors are blended in sRGB space with
//! straight alpha. The finished frame is uploaded as a single texture by
//! [`Presenter`](crate::Presenter).

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Wrap};
use uied::{
    Color, ElementId, Font, HorizontalAlign, LineShape, Point, Rect, Shape, StyledRect, Surface,
    TextShape, VerticalAlign,
};

/// Line height as a multiple of the font size
const LINE_SPACING: f32 = 1.2;

/// RGBA8 pixel buffer, row-major, top-left origin
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Resize, discarding the current contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill([color.r, color.g, color.b, 255]);
    }

    /// Color at a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from(self.pixels[(y * self.width + x) as usize]))
    }

    fn bounds(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Blend `color` over one pixel, scaled by `coverage` in `[0, 1]`
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let dst = &mut self.pixels[(y as u32 * self.width + x as u32) as usize];
        let src = [color.r, color.g, color.b];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = (s as f32 * alpha + *d as f32 * (1.0 - alpha)).round() as u8;
        }
        dst[3] = 255;
    }

    /// Visit every pixel whose square intersects `area`, passing its center
    fn for_each_pixel(&mut self, area: Rect, mut f: impl FnMut(&mut Self, i32, i32, Point)) {
        let Some(area) = area.intersect(&self.bounds()) else {
            return;
        };
        let (x0, y0) = (area.min[0].floor() as i32, area.min[1].floor() as i32);
        let (x1, y1) = (area.max[0].ceil() as i32, area.max[1].ceil() as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                f(self, x, y, Point::new(x as f32 + 0.5, y as f32 + 0.5));
            }
        }
    }

    /// Fill and optional inner stroke of a possibly rounded rectangle
    pub fn fill_rect(&mut self, shape: &StyledRect) {
        let rect = shape.rect;
        let radius = shape
            .corner_shape
            .radius()
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0)
            .max(0.0);

        self.for_each_pixel(rect, |canvas, x, y, center| {
            let d = rounded_rect_distance(rect, radius, center);
            let inside = edge_coverage(d);
            canvas.blend(x, y, shape.fill, inside);

            if let Some(stroke) = shape.stroke {
                let band = inside - edge_coverage(d + stroke.width);
                canvas.blend(x, y, stroke.color, band);
            }
        });
    }

    /// Segment with round caps
    pub fn draw_line(&mut self, line: &LineShape) {
        let half = line.stroke.width / 2.0;
        let area = Rect::new(
            [line.from.x.min(line.to.x) - half, line.from.y.min(line.to.y) - half],
            [line.from.x.max(line.to.x) + half, line.from.y.max(line.to.y) + half],
        );
        self.for_each_pixel(area, |canvas, x, y, center| {
            let d = segment_distance(line.from, line.to, center) - half;
            canvas.blend(x, y, line.stroke.color, edge_coverage(d));
        });
    }
}

/// Fraction of a pixel covered by a shape, given the signed distance from
/// the pixel center to the shape edge (negative inside)
fn edge_coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}

fn rounded_rect_distance(rect: Rect, radius: f32, p: Point) -> f32 {
    let cx = (rect.min[0] + rect.max[0]) / 2.0;
    let cy = (rect.min[1] + rect.max[1]) / 2.0;
    let qx = (p.x - cx).abs() - (rect.width() / 2.0 - radius);
    let qy = (p.y - cy).abs() - (rect.height() / 2.0 - radius);
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

fn segment_distance(a: Point, b: Point, p: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (apx, apy) = (p.x - a.x, p.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (apx - abx * t).hypot(apy - aby * t)
}

/// Shapes and rasterizes text runs with cosmic-text
pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer").finish_non_exhaustive()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Loads the system font database; slow, create once
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn layout(&mut self, shape: &TextShape) -> Buffer {
        let metrics = Metrics::new(shape.font_size, (shape.font_size * LINE_SPACING).ceil());
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_wrap(&mut self.font_system, Wrap::None);
        buffer.set_size(&mut self.font_system, None, None);

        let family = match shape.font {
            Font::Ui => Family::SansSerif,
            Font::Mono => Family::Monospace,
        };
        buffer.set_text(
            &mut self.font_system,
            &shape.text,
            &Attrs::new().family(family),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Draw a text run aligned inside and clipped to its rect
    pub fn draw(&mut self, canvas: &mut Canvas, shape: &TextShape) {
        if shape.text.is_empty() {
            return;
        }
        let Some(clip) = shape.rect.intersect(&canvas.bounds()) else {
            return;
        };

        let buffer = self.layout(shape);
        let (width, height) = measure_buffer(&buffer);
        let rect = shape.rect;
        let left = match shape.h_align {
            HorizontalAlign::Left => rect.x(),
            HorizontalAlign::Center => rect.x() + (rect.width() - width) / 2.0,
            HorizontalAlign::Right => rect.max[0] - width,
        };
        let top = match shape.v_align {
            VerticalAlign::Top => rect.y(),
            VerticalAlign::Center => rect.y() + (rect.height() - height) / 2.0,
            VerticalAlign::Bottom => rect.max[1] - height,
        };
        let (ox, oy) = (left.round() as i32, top.round() as i32);

        let c = shape.color;
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgba(c.r, c.g, c.b, c.a),
            |x, y, w, h, color| {
                let paint = Color::rgba(color.r(), color.g(), color.b(), color.a());
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        let (px, py) = (ox + x + dx, oy + y + dy);
                        if clip.contains(Point::new(px as f32 + 0.5, py as f32 + 0.5)) {
                            canvas.blend(px, py, paint, 1.0);
                        }
                    }
                }
            },
        );
    }
}

fn measure_buffer(buffer: &Buffer) -> (f32, f32) {
    buffer.layout_runs().fold((0.0f32, 0.0f32), |(w, h), run| {
        (w.max(run.line_w), h.max(run.line_top + run.line_height))
    })
}

/// [`Surface`] that rasterizes straight into a [`Canvas`]
pub struct CanvasPainter<'a> {
    canvas: &'a mut Canvas,
    text: &'a mut TextRenderer,
    current: Option<ElementId>,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(canvas: &'a mut Canvas, text: &'a mut TextRenderer) -> Self {
        Self {
            canvas,
            text,
            current: None,
        }
    }
}

impl Surface for CanvasPainter<'_> {
    fn begin_element(&mut self, id: ElementId) {
        self.current = Some(id);
    }

    fn draw(&mut self, shape: &Shape) {
        log::trace!("paint {:?}: {:?}", self.current, shape);
        match shape {
            Shape::Rect(rect) => self.canvas.fill_rect(rect),
            Shape::Line(line) => self.canvas.draw_line(line),
            Shape::Text(text) => self.text.draw(self.canvas, text),
        }
    }
}
