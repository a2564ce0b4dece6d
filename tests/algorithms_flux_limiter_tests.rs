use approx::assert_relative_eq;
use numkern::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Individual Limiter Tests
// ============================================================================

#[test]
fn test_minmod_values() {
    assert_eq!(flux_limiter::minmod(1.0, 2.0), 0.5);
    assert_eq!(flux_limiter::minmod(-1.0, 2.0), 0.0);
    assert_eq!(flux_limiter::minmod(4.0, 2.0), 1.0);
}

#[test]
fn test_constant_limiters() {
    assert_eq!(flux_limiter::total(3.0, -1.0), 0.0);
    assert_eq!(flux_limiter::null(3.0, -1.0), 1.0);
    assert_eq!(flux_limiter::null(0.0, 0.0), 1.0);
}

#[test]
fn test_limiter_formulas_at_r() {
    // d1 = 1, d2 = 2 gives r = 0.5; d1 = 3, d2 = 1 gives r = 3
    assert_relative_eq!(flux_limiter::centred(1.0, 2.0), 0.5);
    assert_relative_eq!(flux_limiter::superbee(1.0, 2.0), 1.0);
    assert_relative_eq!(flux_limiter::superbee(3.0, 1.0), 2.0);
    assert_relative_eq!(flux_limiter::superbee(0.25, 1.0), 0.5);
    assert_relative_eq!(flux_limiter::van_leer(1.0, 2.0), 2.0 / 3.0);
    assert_relative_eq!(flux_limiter::van_albada(1.0, 2.0), 0.6);
    assert_relative_eq!(flux_limiter::minsuper(3.0, 1.0), 2.0);
    assert_relative_eq!(flux_limiter::minsuper(1.0, 2.0), 0.5);
    assert_relative_eq!(flux_limiter::supermin(1.0, 2.0), 1.0);
    assert_relative_eq!(flux_limiter::supermin(0.25, 1.0), 0.5);
    assert_relative_eq!(flux_limiter::monotonized_central(0.25, 1.0), 0.5);
    assert_relative_eq!(flux_limiter::monotonized_central(1.0, 2.0), 0.75);
    assert_relative_eq!(flux_limiter::monotonized_central(4.0, 1.0), 2.0);
    assert_relative_eq!(flux_limiter::mean(1.0, 2.0), 0.75);
}

#[test]
fn test_limiters_single_precision() {
    assert_eq!(flux_limiter::minmod(1.0_f32, 2.0), 0.5);
    assert_relative_eq!(flux_limiter::van_leer(1.0_f32, 1.0), 1.0);
}

// ============================================================================
// Selector Tests
// ============================================================================

#[test]
fn test_selector_matches_functions() {
    let cases: [(FluxLimiter, fn(f64, f64) -> f64); 11] = [
        (FluxLimiter::Total, flux_limiter::total),
        (FluxLimiter::Null, flux_limiter::null),
        (FluxLimiter::Centred, flux_limiter::centred),
        (FluxLimiter::Superbee, flux_limiter::superbee),
        (FluxLimiter::Minmod, flux_limiter::minmod),
        (FluxLimiter::VanLeer, flux_limiter::van_leer),
        (FluxLimiter::VanAlbada, flux_limiter::van_albada),
        (FluxLimiter::Minsuper, flux_limiter::minsuper),
        (FluxLimiter::Supermin, flux_limiter::supermin),
        (FluxLimiter::MonotonizedCentral, flux_limiter::monotonized_central),
        (FluxLimiter::Mean, flux_limiter::mean),
    ];
    for (limiter, f) in cases {
        for (d1, d2) in [(1.0, 2.0), (3.0, 1.0), (-2.0, -0.5), (1.0, -1.0)] {
            assert_eq!(limiter.apply(d1, d2), f(d1, d2), "{:?}", limiter);
            assert_eq!((limiter.function::<f64>())(d1, d2), f(d1, d2));
        }
    }
}

#[test]
fn test_selector_catalogue() {
    assert_eq!(FluxLimiter::ALL.len(), 11);
    assert_eq!(FluxLimiter::default(), FluxLimiter::Minmod);
    let sign_limited = FluxLimiter::ALL
        .iter()
        .filter(|l| l.is_sign_limited())
        .count();
    assert_eq!(sign_limited, 9);
}

// ============================================================================
// TVD Properties
// ============================================================================

#[test]
fn test_consistency_at_equal_slopes() {
    for limiter in FluxLimiter::ALL {
        if limiter == FluxLimiter::Total {
            continue;
        }
        for d in [0.5, 1.0, -2.0, 1e3] {
            assert_relative_eq!(limiter.apply(d, d), 1.0, epsilon = 1e-12);
        }
    }
}

proptest! {
    #[test]
    fn prop_opposite_slopes_give_zero(
        d1 in -1e3f64..1e3,
        d2 in -1e3f64..1e3,
    ) {
        prop_assume!(d1 * d2 <= 0.0);
        for limiter in FluxLimiter::ALL {
            if limiter.is_sign_limited() {
                prop_assert_eq!(limiter.apply(d1, d2), 0.0);
            }
        }
    }

    #[test]
    fn prop_bounded_limiters_stay_in_tvd_region(
        d1 in 1e-3f64..1e3,
        d2 in 1e-3f64..1e3,
    ) {
        let r = d1 / d2;
        let bounded = [
            FluxLimiter::Minmod,
            FluxLimiter::Superbee,
            FluxLimiter::VanLeer,
            FluxLimiter::VanAlbada,
            FluxLimiter::MonotonizedCentral,
        ];
        for limiter in bounded {
            let psi = limiter.apply(d1, d2);
            prop_assert!(psi >= 0.0);
            prop_assert!(psi <= 2.0 * r + 1e-12);
            prop_assert!(psi <= 2.0 + 1e-12);
        }
    }
}
