use approx::assert_relative_eq;
use numkern::prelude::*;

// ============================================================================
// Gauss-Legendre Tests
// ============================================================================

#[test]
fn test_gauss_exact_for_degree() {
    // Order k integrates x^(2k-1) exactly
    for (order, degree) in [
        (GaussOrder::One, 1),
        (GaussOrder::Two, 3),
        (GaussOrder::Three, 5),
        (GaussOrder::Four, 7),
    ] {
        let f = |x: f64| x.powi(degree) + 1.0;
        let exact = (2.0_f64.powi(degree + 1) - 1.0) / f64::from(degree + 1) + 1.0;
        assert_relative_eq!(
            gauss_integral(f, 1.0, 2.0, order),
            exact,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_gauss_order_points() {
    assert_eq!(GaussOrder::One.points(), 1);
    assert_eq!(GaussOrder::Four.points(), 4);
    assert_eq!(GaussOrder::default(), GaussOrder::Four);
}

#[test]
fn test_integral_default_order() {
    let value = integral(|x: f64| x.sin(), 0.0, core::f64::consts::PI);
    assert_relative_eq!(value, 2.0, epsilon = 1e-4);
}

#[test]
fn test_integral_reversed_bounds() {
    let forward = integral(|x: f64| x * x, 0.0, 3.0);
    let backward = integral(|x: f64| x * x, 3.0, 0.0);
    assert_relative_eq!(forward, 9.0, epsilon = 1e-12);
    assert_relative_eq!(backward, -9.0, epsilon = 1e-12);
}

#[test]
fn test_integral_single_precision() {
    let value = integral(|x: f32| 3.0 * x * x, 0.0_f32, 1.0);
    assert_relative_eq!(value, 1.0_f32, epsilon = 1e-5);
}

// ============================================================================
// Tabulated Integration Tests
// ============================================================================

#[test]
fn test_farray_integral_whole_table() {
    let xa = [0.0, 1.0, 3.0];
    let ya = [0.0, 2.0, 2.0];
    // Triangle (1) plus rectangle (4)
    assert_relative_eq!(farray_integral(&xa, &ya, 0.0, 3.0), 5.0);
}

#[test]
fn test_farray_integral_inside_one_segment() {
    let xa = [0.0, 2.0];
    let ya = [0.0, 4.0];
    // y = 2x on [0.5, 1.5]
    assert_relative_eq!(farray_integral(&xa, &ya, 0.5, 1.5), 2.0, epsilon = 1e-14);
}

#[test]
fn test_farray_integral_outside_data() {
    let xa = [1.0, 2.0];
    let ya = [3.0, 5.0];
    // Left of the data: constant 3
    assert_relative_eq!(farray_integral(&xa, &ya, -1.0, 0.0), 3.0);
    // Right of the data: constant 5
    assert_relative_eq!(farray_integral(&xa, &ya, 4.0, 6.0), 10.0);
    // Spanning everything: 3 * 2 + 4 + 5 * 1
    assert_relative_eq!(farray_integral(&xa, &ya, -1.0, 3.0), 15.0);
}

#[test]
fn test_farray_integral_reversed_and_empty_interval() {
    let xa = [0.0, 1.0, 2.0];
    let ya = [1.0, 1.0, 3.0];
    let forward = farray_integral(&xa, &ya, 0.5, 1.5);
    assert_relative_eq!(forward, 1.25, epsilon = 1e-14);
    assert_relative_eq!(farray_integral(&xa, &ya, 1.5, 0.5), -forward);
    assert_eq!(farray_integral(&xa, &ya, 0.7, 0.7), 0.0);
}

#[test]
fn test_farray_integral_single_knot() {
    assert_relative_eq!(farray_integral(&[2.0], &[4.0], 0.0, 5.0), 20.0);
}
