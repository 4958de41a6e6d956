use crate::geometry::limits::ZENITH_DEG;

/// Radius for an elevation: horizon at `radius_px`, zenith at 0.
/// Linear and unclamped, so elevations outside 0..=90 extrapolate.
#[inline]
pub fn elevation_radius(el_deg: f64, radius_px: f64) -> f64 {
    radius_px * (1.0 - el_deg / ZENITH_DEG)
}

/// Projects azimuth/elevation onto a disk centered at the origin.
/// North is up (negative y), east is right, azimuth grows clockwise.
pub fn project(az_deg: f64, el_deg: f64, radius_px: f64) -> (f64, f64) {
    let r = elevation_radius(el_deg, radius_px);
    let a = az_deg.to_radians();
    (r * a.sin(), -r * a.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::approx_eq_pt;

    const EPS: f64 = 1e-9;

    #[test]
    fn horizon_north_is_top_of_rim() {
        assert!(approx_eq_pt(project(0.0, 0.0, 100.0), (0.0, -100.0), EPS));
    }

    #[test]
    fn zenith_is_center() {
        assert!(approx_eq_pt(project(0.0, 90.0, 100.0), (0.0, 0.0), EPS));
        assert!(approx_eq_pt(project(217.0, 90.0, 100.0), (0.0, 0.0), EPS));
    }

    #[test]
    fn east_is_right() {
        assert!(approx_eq_pt(project(90.0, 0.0, 100.0), (100.0, 0.0), EPS));
    }

    #[test]
    fn south_and_west() {
        assert!(approx_eq_pt(project(180.0, 0.0, 100.0), (0.0, 100.0), EPS));
        assert!(approx_eq_pt(project(270.0, 0.0, 100.0), (-100.0, 0.0), EPS));
    }

    #[test]
    fn elevation_is_linear() {
        assert!((elevation_radius(30.0, 90.0) - 60.0).abs() < EPS);
        assert!((elevation_radius(60.0, 90.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn out_of_range_inputs_extrapolate() {
        // below horizon lands outside the rim
        assert!((elevation_radius(-9.0, 90.0) - 99.0).abs() < EPS);
        // past zenith flips through the center
        let (x, y) = project(0.0, 135.0, 100.0);
        assert!(approx_eq_pt((x, y), (0.0, 50.0), EPS));
        // azimuth wraps
        assert!(approx_eq_pt(project(450.0, 0.0, 100.0), project(90.0, 0.0, 100.0), 1e-6));
        assert!(approx_eq_pt(project(-90.0, 0.0, 100.0), project(270.0, 0.0, 100.0), 1e-6));
    }
}
