use numkern::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_interior() {
    let a = [1.0, 2.0, 4.0, 8.0];
    assert_eq!(search(3.0, &a), 1);
    assert_eq!(search(5.0, &a), 2);
    assert_eq!(search(1.5, &a), 0);
}

#[test]
fn test_search_knots() {
    let a = [1.0, 2.0, 4.0, 8.0];
    assert_eq!(search(1.0, &a), 0);
    assert_eq!(search(8.0, &a), 2);
    let i = search(2.0, &a);
    assert!(a[i] <= 2.0 && 2.0 <= a[i + 1]);
}

#[test]
fn test_search_clamps_outside() {
    let a = [1.0, 2.0, 4.0, 8.0];
    assert_eq!(search(-5.0, &a), 0);
    assert_eq!(search(50.0, &a), 2);
}

#[test]
fn test_search_integers() {
    let a = [0_i32, 10, 20, 30, 40];
    assert_eq!(search(25, &a), 2);
}

#[test]
fn test_search_degenerate_arrays() {
    assert_eq!(search(1.0, &[5.0]), 0);
    assert_eq!(search(1.0, &[] as &[f64]), 0);
}

// ============================================================================
// Extended Search Tests
// ============================================================================

#[test]
fn test_search_extended_sentinels() {
    let a = [1.0, 2.0, 4.0, 8.0];
    assert_eq!(search_extended(0.5, &a), Bracket::Below);
    assert_eq!(search_extended(8.0, &a), Bracket::Above);
    assert_eq!(search_extended(9.0, &a), Bracket::Above);
    assert_eq!(search_extended(3.0, &a), Bracket::Within(1));
    assert_eq!(search_extended(1.0, &a), Bracket::Within(0));
}

#[test]
fn test_bracket_index() {
    let n = 3;
    assert_eq!(Bracket::Below.index(n), -1);
    assert_eq!(Bracket::Within(2).index(n), 2);
    assert_eq!(Bracket::Above.index(n), 3);
}

#[test]
fn test_search_extended_empty() {
    assert_eq!(search_extended(1.0, &[] as &[f64]), Bracket::Above);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_search_brackets_value(
        mut a in prop::collection::vec(-1e6f64..1e6, 2..64),
        t in 0.0f64..=1.0,
    ) {
        a.sort_by(|p, q| p.partial_cmp(q).unwrap());
        let x = (a[0] + t * (a[a.len() - 1] - a[0])).min(a[a.len() - 1]);
        let i = search(x, &a);
        prop_assert!(i + 1 < a.len());
        prop_assert!(a[i] <= x && x <= a[i + 1]);
    }
}
