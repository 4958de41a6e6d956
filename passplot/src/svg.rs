use crate::model::{Color, Primitive};
use crate::surface::{self, CirclePaint, Surface, TextAnchor, DASH_PATTERN};
use std::fmt::Write;

/// Accumulates SVG elements; `finish` wraps them in a document.
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface { width, height, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{}</svg>",
            self.body,
            w = self.width,
            h = self.height
        )
    }
}

fn paint_attrs(c: Color) -> String {
    if c.a == 255 {
        format!("rgb({},{},{})", c.r, c.g, c.b)
    } else {
        c.to_css()
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// fmt::Write into a String is infallible
impl Surface for SvgSurface {
    fn clear(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        // whole-surface clears reset the document; partial clears have no SVG analogue
        self.body.clear();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            x,
            y,
            w,
            h,
            paint_attrs(color)
        );
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        let _ = write!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            x1,
            y1,
            x2,
            y2,
            paint_attrs(color),
            width
        );
    }

    fn path(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
        let mut d = String::new();
        for (i, (x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{} {} {}", cmd, x, y);
        }
        let _ = write!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            d,
            paint_attrs(color),
            width
        );
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: CirclePaint) {
        match paint {
            CirclePaint::Fill(c) => {
                let _ = write!(
                    self.body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                    cx,
                    cy,
                    r,
                    paint_attrs(c)
                );
            }
            CirclePaint::Stroke { color, width, dashed } => {
                let dash = if dashed {
                    format!(" stroke-dasharray=\"{},{}\"", DASH_PATTERN[0], DASH_PATTERN[1])
                } else {
                    String::new()
                };
                let _ = write!(
                    self.body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                    cx,
                    cy,
                    r,
                    paint_attrs(color),
                    width,
                    dash
                );
            }
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color, size: f64, anchor: TextAnchor) {
        let align = match anchor {
            TextAnchor::Start => "",
            TextAnchor::Middle => " text-anchor=\"middle\" dominant-baseline=\"middle\"",
        };
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}px\" fill=\"{}\"{}>{}</text>",
            x,
            y,
            size,
            paint_attrs(color),
            align,
            escape_xml(text)
        );
    }
}

/// Renders a primitive list into a standalone SVG document.
pub fn render_svg(prims: &[Primitive], width: f64, height: f64) -> String {
    let mut s = SvgSurface::new(width, height);
    surface::execute(prims, &mut s);
    s.finish()
}
