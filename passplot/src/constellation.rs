use crate::model::{IqPoint, Primitive};
use crate::scale;
use crate::style::ConstellationStyle;
use log::debug;

/// Maps an IQ sample to surface pixels. Q grows upward, so it is subtracted.
#[inline]
pub fn to_canvas(p: IqPoint, width: f64, height: f64, px_per_unit: f64) -> (f64, f64) {
    (width / 2.0 + p.i * px_per_unit, height / 2.0 - p.q * px_per_unit)
}

/// Background, crosshair and one marker per point, in input order.
pub fn render(
    points: &[IqPoint],
    width: f64,
    height: f64,
    style: &ConstellationStyle,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(points.len() + 3);
    out.push(Primitive::Background { width, height, color: style.background });
    out.push(Primitive::GridLine {
        x1: 0.0,
        y1: height / 2.0,
        x2: width,
        y2: height / 2.0,
        color: style.grid_color,
    });
    out.push(Primitive::GridLine {
        x1: width / 2.0,
        y1: 0.0,
        x2: width / 2.0,
        y2: height,
        color: style.grid_color,
    });

    let range = scale::estimate(points);
    let px_per_unit = (width / 2.0) / range;
    for &p in points {
        let (x, y) = to_canvas(p, width, height, px_per_unit);
        out.push(Primitive::Marker {
            x,
            y,
            radius: style.marker_radius,
            color: style.marker_color,
            shape: style.marker_shape,
        });
    }
    debug!(
        "constellation: {} points, range={} px_per_unit={}",
        points.len(),
        range,
        px_per_unit
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MarkerShape;

    #[test]
    fn empty_input_draws_background_and_grid() {
        let prims = render(&[], 300.0, 200.0, &ConstellationStyle::default());
        assert_eq!(prims.len(), 3);
        assert!(matches!(prims[0], Primitive::Background { width, height, .. } if width == 300.0 && height == 200.0));
        assert!(!prims.iter().any(Primitive::is_marker));
    }

    #[test]
    fn crosshair_passes_through_center() {
        let prims = render(&[], 300.0, 200.0, &ConstellationStyle::default());
        match (&prims[1], &prims[2]) {
            (
                Primitive::GridLine { x1, y1, x2, y2, .. },
                Primitive::GridLine { x1: vx1, y1: vy1, x2: vx2, y2: vy2, .. },
            ) => {
                assert_eq!((*x1, *y1, *x2, *y2), (0.0, 100.0, 300.0, 100.0));
                assert_eq!((*vx1, *vy1, *vx2, *vy2), (150.0, 0.0, 150.0, 200.0));
            }
            other => panic!("unexpected grid {:?}", other),
        }
    }

    #[test]
    fn q_axis_is_inverted() {
        let (x, y) = to_canvas(IqPoint::new(0.0, 1.0), 400.0, 400.0, 100.0);
        assert_eq!((x, y), (200.0, 100.0));
    }

    #[test]
    fn marker_shape_follows_style() {
        let style = ConstellationStyle { marker_shape: MarkerShape::Circle, marker_radius: 2.0, ..Default::default() };
        let prims = render(&[IqPoint::new(0.5, 0.5)], 100.0, 100.0, &style);
        match &prims[3] {
            Primitive::Marker { shape, radius, .. } => {
                assert_eq!(*shape, MarkerShape::Circle);
                assert_eq!(*radius, 2.0);
            }
            other => panic!("expected marker, got {:?}", other),
        }
    }
}
