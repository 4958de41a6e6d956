use crate::error::{RenderError, Result};
use crate::geometry::limits::{COMPASS, ELEVATION_RINGS};
use crate::model::{Color, MarkerShape, Primitive, TrackPoint};
use crate::polar;
use crate::style::SkyplotStyle;
use log::{debug, warn};

// AOS/LOS label offset from the marker center
const ENDPOINT_LABEL_DX: f64 = 5.0;
const ENDPOINT_LABEL_DY: f64 = -5.0;

/// Projects a track point into surface pixels for the given style.
pub fn to_canvas(p: &TrackPoint, style: &SkyplotStyle) -> (f64, f64) {
    let (cx, cy) = style.center();
    let (x, y) = polar::project(p.az, p.el, style.radius());
    (cx + x, cy + y)
}

/// Grid, compass, track path and AOS/LOS markers for one pass.
///
/// Fails with [`RenderError::InvalidInput`] on an empty track, since the
/// first and last samples are always drawn.
pub fn render(track: &[TrackPoint], style: &SkyplotStyle) -> Result<Vec<Primitive>> {
    let (first, last) = match (track.first(), track.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => {
            warn!("skyplot: refusing to render an empty track");
            return Err(RenderError::InvalidInput("track must contain at least one point".into()));
        }
    };
    let radius = style.radius();
    // A non-positive radius would mirror the plot through its center.
    if radius.is_nan() || radius <= 0.0 {
        warn!("skyplot: margin {} leaves no room in {}x{}", style.margin, style.width, style.height);
        return Err(RenderError::InvalidInput(format!(
            "plot radius must be positive (got {} from margin {})",
            radius, style.margin
        )));
    }
    let (cx, cy) = style.center();
    let mut out = Vec::with_capacity(ELEVATION_RINGS.len() + COMPASS.len() * 2 + 5);

    for el in ELEVATION_RINGS {
        out.push(Primitive::GridCircle {
            cx,
            cy,
            r: polar::elevation_radius(el, radius),
            color: style.grid_color,
            dashed: true,
        });
    }

    for (az, _) in COMPASS {
        let (x, y) = polar::project(az, 0.0, radius);
        out.push(Primitive::GridLine { x1: cx, y1: cy, x2: cx + x, y2: cy + y, color: style.grid_color });
    }
    // Labels sit past the rim, so project with the enlarged radius at the horizon.
    for (az, label) in COMPASS {
        let (x, y) = polar::project(az, 0.0, radius + style.label_offset);
        out.push(Primitive::AxisLabel {
            x: cx + x,
            y: cy + y,
            text: label.to_string(),
            color: style.label_color,
        });
    }

    out.push(Primitive::Path {
        points: track.iter().map(|p| to_canvas(p, style)).collect(),
        color: style.path_color,
        width: style.path_width,
    });

    push_endpoint(&mut out, to_canvas(first, style), "AOS", style.aos_color, style);
    push_endpoint(&mut out, to_canvas(last, style), "LOS", style.los_color, style);

    debug!("skyplot: {} track points, radius={}", track.len(), radius);
    Ok(out)
}

fn push_endpoint(
    out: &mut Vec<Primitive>,
    (x, y): (f64, f64),
    label: &str,
    color: Color,
    style: &SkyplotStyle,
) {
    out.push(Primitive::Marker { x, y, radius: style.endpoint_radius, color, shape: MarkerShape::Circle });
    out.push(Primitive::Text {
        x: x + ENDPOINT_LABEL_DX,
        y: y + ENDPOINT_LABEL_DY,
        text: label.to_string(),
        color,
        size: style.endpoint_font_size,
    });
}
