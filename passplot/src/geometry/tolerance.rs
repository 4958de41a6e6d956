// Comparison tolerances for projected geometry

pub const EPS_PX: f64 = 1e-9; // coordinate equality in pixels

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn approx_eq_pt(a: (f64, f64), b: (f64, f64), eps: f64) -> bool {
    approx_eq(a.0, b.0, eps) && approx_eq(a.1, b.1, eps)
}
