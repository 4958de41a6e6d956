use crate::{error, interop, CanvasTarget};
use passplot::{
    constellation, ingest_iq, ingest_pass, polar, skyplot, ConstellationStyle, IqPayload,
    IqPoint, PassPayload, PassTrack, Primitive, SkyplotStyle, Surface,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes crate logging to the browser console. Returns false on an unknown level name.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    match crate::logging::parse_level(level) {
        Some(filter) => {
            crate::logging::install(filter);
            true
        }
        None => false,
    }
}

/// Polar projection of one az/el sample onto a disk of `radius_px`, as `[x, y]`
/// relative to the disk center.
#[wasm_bindgen]
pub fn project_polar(az_deg: f64, el_deg: f64, radius_px: f64) -> js_sys::Float64Array {
    let (x, y) = polar::project(az_deg, el_deg, radius_px);
    interop::arr_f64(&[x, y])
}

fn check_size(width: f64, height: f64) -> Result<(), JsValue> {
    if !width.is_finite() {
        return Err(error::non_finite("width"));
    }
    if !height.is_finite() {
        return Err(error::non_finite("height"));
    }
    if width <= 0.0 {
        return Err(error::out_of_range("width", 0.0, f64::INFINITY, width));
    }
    if height <= 0.0 {
        return Err(error::out_of_range("height", 0.0, f64::INFINITY, height));
    }
    Ok(())
}

fn iq_from_js(payload: JsValue) -> Result<Vec<IqPoint>, JsValue> {
    let payload: IqPayload = interop::from_js(payload).map_err(error::json_parse)?;
    ingest_iq(payload).map_err(|e| error::render(&e))
}

fn pass_from_js(payload: JsValue) -> Result<PassTrack, JsValue> {
    let payload: PassPayload = interop::from_js(payload).map_err(error::json_parse)?;
    ingest_pass(payload).map_err(|e| error::render(&e))
}

fn constellation_prims(
    payload: JsValue,
    width: f64,
    height: f64,
    style: JsValue,
) -> Result<Vec<Primitive>, JsValue> {
    check_size(width, height)?;
    let style: ConstellationStyle = interop::style_or_default(style).map_err(error::invalid_style)?;
    let points = iq_from_js(payload)?;
    Ok(constellation::render(&points, width, height, &style))
}

fn skyplot_style(style: JsValue) -> Result<SkyplotStyle, JsValue> {
    let style: SkyplotStyle = interop::style_or_default(style).map_err(error::invalid_style)?;
    check_size(style.width, style.height)?;
    Ok(style)
}

fn skyplot_prims(payload: JsValue, style: &SkyplotStyle) -> Result<Vec<Primitive>, JsValue> {
    let pass = pass_from_js(payload)?;
    skyplot::render(&pass.points, style).map_err(|e| error::render(&e))
}

fn prims_to_js(prims: &[Primitive]) -> JsValue {
    match interop::to_js(prims) {
        Ok(v) => error::ok(v),
        Err(e) => error::err("serialize", e, None),
    }
}

fn envelope(r: Result<JsValue, JsValue>) -> JsValue {
    r.unwrap_or_else(|e| e)
}

/// `{ok, value: Primitive[]}` for an IQ payload (`{iq_data}` or `[[i,q],...]`).
#[wasm_bindgen]
pub fn constellation_primitives(payload: JsValue, width: f64, height: f64, style: JsValue) -> JsValue {
    envelope(constellation_prims(payload, width, height, style).map(|p| prims_to_js(&p)))
}

/// `{ok, value: Primitive[]}` for a pass payload, or `invalid_input` on an empty track.
#[wasm_bindgen]
pub fn skyplot_primitives(payload: JsValue, style: JsValue) -> JsValue {
    envelope(skyplot_style(style).and_then(|s| skyplot_prims(payload, &s)).map(|p| prims_to_js(&p)))
}

/// `{ok, value: string}` with a standalone SVG document.
#[wasm_bindgen]
pub fn constellation_svg(payload: JsValue, width: f64, height: f64, style: JsValue) -> JsValue {
    envelope(
        constellation_prims(payload, width, height, style)
            .map(|p| error::ok(JsValue::from_str(&passplot::render_svg(&p, width, height)))),
    )
}

#[wasm_bindgen]
pub fn skyplot_svg(payload: JsValue, style: JsValue) -> JsValue {
    envelope(skyplot_style(style).and_then(|s| {
        let prims = skyplot_prims(payload, &s)?;
        Ok(error::ok(JsValue::from_str(&passplot::render_svg(&prims, s.width, s.height))))
    }))
}

#[wasm_bindgen]
impl CanvasTarget {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasTarget, JsValue> {
        CanvasTarget::rs_new(&canvas).map_err(|e| {
            let msg = e.as_string().unwrap_or_else(|| "2d context unavailable".into());
            error::canvas(msg)
        })
    }
    pub fn width(&self) -> f64 {
        self.rs_size().0
    }
    pub fn height(&self) -> f64 {
        self.rs_size().1
    }

    /// Clears the canvas and draws the constellation. `value` is the number of
    /// primitives drawn.
    pub fn draw_constellation(&mut self, payload: JsValue, style: JsValue) -> JsValue {
        let (w, h) = self.rs_size();
        envelope(constellation_prims(payload, w, h, style).map(|prims| {
            let n = passplot::execute(&prims, &mut self.surface);
            error::ok(JsValue::from_f64(n as f64))
        }))
    }

    /// Draws the skyplot sized to this canvas; style width/height are overridden.
    /// Nothing is drawn when the pass has no points.
    pub fn draw_skyplot(&mut self, payload: JsValue, style: JsValue) -> JsValue {
        let (w, h) = self.rs_size();
        let r = interop::style_or_default::<SkyplotStyle>(style)
            .map_err(error::invalid_style)
            .and_then(|s| {
                let s = SkyplotStyle { width: w, height: h, ..s };
                check_size(s.width, s.height)?;
                let prims = skyplot_prims(payload, &s)?;
                self.surface.clear(0.0, 0.0, w, h);
                let n = passplot::execute(&prims, &mut self.surface);
                Ok(error::ok(JsValue::from_f64(n as f64)))
            });
        envelope(r)
    }
}
