use crate::model::{Color, MarkerShape, Primitive};

pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const AXIS_LABEL_SIZE: f64 = 12.0;
pub const DASH_PATTERN: [f64; 2] = [3.0, 3.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CirclePaint {
    Fill(Color),
    Stroke { color: Color, width: f64, dashed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left edge at x, baseline at y.
    Start,
    /// Centered on (x, y) both ways.
    Middle,
}

/// Drawing target the primitives are replayed against. Implementations own
/// whatever backing store they draw into; the renderers never see it.
pub trait Surface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);
    /// Open polyline through `points` in order.
    fn path(&mut self, points: &[(f64, f64)], color: Color, width: f64);
    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: CirclePaint);
    fn text(&mut self, x: f64, y: f64, text: &str, color: Color, size: f64, anchor: TextAnchor);
}

/// Replays `prims` in order. Returns the number of primitives that drew something.
pub fn execute<S: Surface + ?Sized>(prims: &[Primitive], surface: &mut S) -> usize {
    let mut drawn = 0usize;
    for p in prims {
        match p {
            Primitive::Background { width, height, color } => {
                surface.clear(0.0, 0.0, *width, *height);
                surface.fill_rect(0.0, 0.0, *width, *height, *color);
            }
            Primitive::GridLine { x1, y1, x2, y2, color } => {
                surface.line(*x1, *y1, *x2, *y2, *color, GRID_LINE_WIDTH);
            }
            Primitive::GridCircle { cx, cy, r, color, dashed } => {
                surface.circle(
                    *cx,
                    *cy,
                    *r,
                    CirclePaint::Stroke { color: *color, width: GRID_LINE_WIDTH, dashed: *dashed },
                );
            }
            Primitive::AxisLabel { x, y, text, color } => {
                surface.text(*x, *y, text, *color, AXIS_LABEL_SIZE, TextAnchor::Middle);
            }
            Primitive::Marker { x, y, radius, color, shape } => match shape {
                MarkerShape::Square => {
                    let side = radius * 2.0;
                    surface.fill_rect(x - radius, y - radius, side, side, *color);
                }
                MarkerShape::Circle => surface.circle(*x, *y, *radius, CirclePaint::Fill(*color)),
            },
            Primitive::Path { points, color, width } => {
                if points.len() < 2 {
                    continue;
                }
                surface.path(points, *color, *width);
            }
            Primitive::Text { x, y, text, color, size } => {
                surface.text(*x, *y, text, *color, *size, TextAnchor::Start);
            }
        }
        drawn += 1;
    }
    drawn
}
