use approx::assert_relative_eq;
use numkern::prelude::*;

// ============================================================================
// Extrapolation Tests
// ============================================================================

#[test]
fn test_extrapolate_endpoints_exact() {
    let (x1, x2, y1, y2) = (0.3_f64, 1.7, -2.1, 5.9);
    assert_eq!(extrapolate(x1, x1, x2, y1, y2), y1);
    assert_relative_eq!(extrapolate(x2, x1, x2, y1, y2), y2, epsilon = 1e-14);
}

#[test]
fn test_extrapolate_outside_segment() {
    assert_relative_eq!(extrapolate(3.0, 0.0, 1.0, 0.0, 2.0), 6.0);
    assert_relative_eq!(extrapolate(-1.0, 0.0, 1.0, 1.0, 2.0), 0.0);
}

// ============================================================================
// Interpolation Tests
// ============================================================================

#[test]
fn test_interpolate_clamps() {
    assert_eq!(interpolate(-1.0, 0.0, 1.0, 10.0, 20.0), 10.0);
    assert_eq!(interpolate(2.0, 0.0, 1.0, 10.0, 20.0), 20.0);
    assert_relative_eq!(interpolate(0.25, 0.0, 1.0, 10.0, 20.0), 12.5);
}

#[test]
fn test_farray_interpolate_knots() {
    let xa = [0.0, 1.0, 3.0, 6.0];
    let ya = [1.0, -1.0, 4.0, 2.5];
    for (&x, &y) in xa.iter().zip(&ya) {
        assert_eq!(farray_interpolate(x, &xa, &ya), y);
    }
}

#[test]
fn test_farray_interpolate_between_and_outside() {
    let xa = [0.0_f32, 1.0, 3.0];
    let ya = [0.0_f32, 2.0, 6.0];
    assert_relative_eq!(farray_interpolate(2.0, &xa, &ya), 4.0);
    assert_eq!(farray_interpolate(-3.0, &xa, &ya), 0.0);
    assert_eq!(farray_interpolate(10.0, &xa, &ya), 6.0);
}

#[test]
fn test_farray_interpolate_single_knot() {
    assert_eq!(farray_interpolate(5.0, &[1.0], &[7.0]), 7.0);
    assert_eq!(farray_interpolate(-5.0, &[1.0], &[7.0]), 7.0);
}
