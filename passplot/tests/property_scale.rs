use passplot::geometry::limits::SCALE_FLOOR;
use passplot::polar;
use passplot::scale::estimate;
use passplot::IqPoint;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = IqPoint> {
    (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_map(|(i, q)| IqPoint::new(i, q))
}

proptest! {
    #[test]
    fn estimate_never_below_floor(pts in prop::collection::vec(point(), 0..64)) {
        prop_assert!(estimate(&pts) >= SCALE_FLOOR);
    }

    #[test]
    fn estimate_pads_large_magnitudes(pts in prop::collection::vec(point(), 1..64)) {
        let m = pts.iter().fold(0.0f64, |acc, p| acc.max(p.i.abs()).max(p.q.abs()));
        prop_assume!(m > SCALE_FLOOR / 1.2);
        let e = estimate(&pts);
        prop_assert!((e - 1.2 * m).abs() <= 1e-9 * (1.0 + m));
    }

    #[test]
    fn estimate_ignores_order(mut pts in prop::collection::vec(point(), 0..32)) {
        let a = estimate(&pts);
        pts.reverse();
        prop_assert_eq!(a, estimate(&pts));
    }

    #[test]
    fn projection_radius_is_linear_in_elevation(az in -720.0f64..720.0, el in -30.0f64..120.0) {
        let (x, y) = polar::project(az, el, 100.0);
        let r = (x * x + y * y).sqrt();
        prop_assert!((r - (100.0 * (1.0 - el / 90.0)).abs()).abs() < 1e-6);
    }
}
