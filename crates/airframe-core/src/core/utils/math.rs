/// Relative tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 0.000_000_01;

/// Compares two values with a relative tolerance of [`EPSILON`].
///
/// Values whose magnitude is below half the tolerance are compared against zero instead,
/// so that `approx_eq(0.0, 1e-12)` holds.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let abs_b = b.abs();
    if abs_b < EPSILON / 2.0 {
        return a.abs() < EPSILON / 2.0;
    }
    (a - b).abs() < EPSILON * abs_b
}

#[inline]
pub fn pow2(x: f64) -> f64 {
    x * x
}
