use numkern::prelude::*;

// ============================================================================
// Scalar Trait Tests
// ============================================================================

#[test]
fn test_small_per_width() {
    assert!(1e-9_f32.small());
    assert!(!1e-9_f64.small());
    assert!(1e-17_f64.small());
    assert!(!0.5_f32.small());
    assert!(0.0_f64.small());
}

#[test]
fn test_lit_conversion() {
    assert_eq!(f32::lit(0.5), 0.5_f32);
    assert_eq!(f64::lit(1.0 / 3.0), 1.0 / 3.0);
}

#[test]
fn test_parse_field() {
    assert_eq!(f64::parse_field("2.5"), Some(2.5));
    assert_eq!(f32::parse_field(" -1e3 "), Some(-1000.0));
    assert_eq!(f64::parse_field("abc"), None);
    assert_eq!(f64::parse_field(""), None);
}

// ============================================================================
// Elementary Primitive Tests
// ============================================================================

#[test]
fn test_min_max_integers_and_floats() {
    assert_eq!(min(3_i32, -2), -2);
    assert_eq!(max(3_i64, -2), 3);
    assert_eq!(min(1_i128 << 100, 5), 5);
    assert_eq!(max(1.5_f32, 2.5), 2.5);
    assert_eq!(min(1.5_f64, 2.5), 1.5);
}

#[test]
fn test_modmin() {
    // Same sign: smaller magnitude
    assert_eq!(modmin(3_i32, 5), 3);
    assert_eq!(modmin(-3_i64, -5), -3);
    assert_eq!(modmin(7.0_f64, 2.0), 2.0);
    assert_eq!(modmin(-7.0_f32, -2.0), -2.0);

    // Opposite signs or zero: zero
    assert_eq!(modmin(3_i32, -5), 0);
    assert_eq!(modmin(0.0_f64, 2.0), 0.0);
    assert_eq!(modmin(-1_i128, 1), 0);
}

#[test]
fn test_sqr_dbl() {
    assert_eq!(sqr(-4_i32), 16);
    assert_eq!(sqr(1.5_f64), 2.25);
    assert_eq!(dbl(21_i64), 42);
    assert_eq!(dbl(0.25_f32), 0.5);
}

#[test]
fn test_precision_aliases_are_scalars() {
    fn width<T: Scalar>() -> usize {
        core::mem::size_of::<T>()
    }
    assert!(width::<Low>() <= width::<High>());
}

#[test]
fn test_widen_narrow() {
    assert_eq!(<f32 as Scalar>::narrow(0.1_f32.widen()), 0.1_f32);
    assert_eq!(2.5_f64.widen(), 2.5_f64);
    assert_eq!(<f64 as Scalar>::narrow(2.5), 2.5_f64);
    assert!(core::mem::size_of::<<f32 as Scalar>::Wide>() == core::mem::size_of::<High>());
}
