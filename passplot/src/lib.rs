pub mod constellation;
pub mod error;
pub mod json;
pub mod model;
pub mod polar;
pub mod scale;
pub mod skyplot;
pub mod style;
pub mod surface;
pub mod svg;
pub mod geometry {
    pub mod limits;
    pub mod tolerance;
}

pub use error::{RenderError, Result};
pub use json::{ingest_iq, ingest_pass, parse_iq_payload, parse_pass_payload, IqPayload, PassPayload};
pub use model::{Color, IqPoint, MarkerShape, PassTrack, Primitive, TrackPoint};
pub use style::{ConstellationStyle, SkyplotStyle};
pub use surface::{execute, Surface};
pub use svg::{render_svg, SvgSurface};

/// Constellation plot as an SVG document of `width` x `height`.
pub fn constellation_svg(points: &[IqPoint], width: f64, height: f64, style: &ConstellationStyle) -> String {
    let prims = constellation::render(points, width, height, style);
    render_svg(&prims, width, height)
}

/// Skyplot as an SVG document sized by `style`.
pub fn skyplot_svg(track: &[TrackPoint], style: &SkyplotStyle) -> Result<String> {
    let prims = skyplot::render(track, style)?;
    Ok(render_svg(&prims, style.width, style.height))
}
