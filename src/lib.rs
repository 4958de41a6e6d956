use wasm_bindgen::prelude::*;
mod api;
mod canvas;
mod error;
mod interop;
mod logging;

pub use api::{
    constellation_primitives, constellation_svg, init_logging, project_polar, set_panic_hook,
    skyplot_primitives, skyplot_svg,
};

/// A caller-supplied `<canvas>` the plots are drawn onto.
#[wasm_bindgen]
pub struct CanvasTarget { pub(crate) surface: canvas::CanvasSurface }

impl CanvasTarget {
    pub fn rs_new(el: &web_sys::HtmlCanvasElement) -> Result<CanvasTarget, JsValue> {
        Ok(CanvasTarget { surface: canvas::CanvasSurface::from_canvas(el)? })
    }
    pub fn rs_size(&self) -> (f64, f64) { (self.surface.width(), self.surface.height()) }
}
