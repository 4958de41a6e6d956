use crate::geometry::limits::{SCALE_FLOOR, SCALE_PADDING};
use crate::model::IqPoint;

/// Symmetric half-range covering every point with 20% padding, never below 2.0.
///
/// Empty input yields the floor. NaN or infinite components are not filtered;
/// they propagate through `f64::max` like any other value.
pub fn estimate(points: &[IqPoint]) -> f64 {
    let max_val = points
        .iter()
        .fold(0.0f64, |acc, p| acc.max(p.i.abs()).max(p.q.abs()));
    SCALE_FLOOR.max(max_val * SCALE_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_floor() {
        assert_eq!(estimate(&[]), 2.0);
    }

    #[test]
    fn small_points_clamp_to_floor() {
        let pts = [IqPoint::new(0.7, -0.7), IqPoint::new(-1.0, 1.0)];
        assert_eq!(estimate(&pts), 2.0);
    }

    #[test]
    fn large_points_get_padding() {
        let pts = [IqPoint::new(3.0, -0.5), IqPoint::new(-1.0, -5.0)];
        assert!((estimate(&pts) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn negative_components_count_by_magnitude() {
        let pts = [IqPoint::new(-4.0, 0.0)];
        assert!((estimate(&pts) - 4.8).abs() < 1e-12);
    }
}
