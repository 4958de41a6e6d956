use crate::interop;
use passplot::surface::{CirclePaint, Surface, TextAnchor, DASH_PATTERN};
use passplot::Color;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

/// 2D canvas context bound to one element. The element is always supplied by
/// the caller; nothing here looks it up by id.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { ctx, width: canvas.width() as f64, height: canvas.height() as f64 })
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }

    fn set_fill(&self, c: Color) {
        let _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("fillStyle"),
            &JsValue::from_str(&c.to_css()),
        );
    }

    fn set_stroke(&self, c: Color, width: f64) {
        let _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("strokeStyle"),
            &JsValue::from_str(&c.to_css()),
        );
        self.ctx.set_line_width(width);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn path(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
        let Some((&(x0, y0), rest)) = points.split_first() else { return };
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        self.ctx.stroke();
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: CirclePaint) {
        self.ctx.begin_path();
        // negative radii throw IndexSizeError; such circles are skipped
        if self.ctx.arc(cx, cy, r, 0.0, std::f64::consts::TAU).is_err() {
            return;
        }
        match paint {
            CirclePaint::Fill(c) => {
                self.set_fill(c);
                self.ctx.fill();
            }
            CirclePaint::Stroke { color, width, dashed } => {
                self.set_stroke(color, width);
                if dashed {
                    let _ = self.ctx.set_line_dash(&interop::dash(&DASH_PATTERN));
                }
                self.ctx.stroke();
                if dashed {
                    let _ = self.ctx.set_line_dash(&interop::dash(&[]));
                }
            }
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color, size: f64, anchor: TextAnchor) {
        self.ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
        match anchor {
            TextAnchor::Start => {
                self.ctx.set_text_align("start");
                self.ctx.set_text_baseline("alphabetic");
            }
            TextAnchor::Middle => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
            }
        }
        self.set_fill(color);
        let _ = self.ctx.fill_text(text, x, y);
    }
}
