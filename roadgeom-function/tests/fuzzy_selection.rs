use proptest::prelude::*;
use roadgeom_function::{ConcatenatedFunction, UnivariateFunction};

fn three_piece() -> ConcatenatedFunction {
    ConcatenatedFunction::of_polynomial_functions(
        &[0.0, 10.0, 25.0],
        &[vec![1.0], vec![2.0], vec![3.0]],
        Some(0.0),
    )
    .unwrap()
    .value
}

proptest! {
    #[test]
    fn fuzzy_member_selection_is_stable_near_an_internal_boundary(delta in -1e-8_f64..1e-8_f64) {
        let f = three_piece();
        let tol = 1e-7;
        let v = f.value_fuzzy(10.0 + delta, tol).unwrap();
        prop_assert!(v == 1.0 || v == 2.0);
    }

    #[test]
    fn strict_and_fuzzy_selection_agree_strictly_inside_a_piece(offset in 0.1_f64..9.9_f64) {
        let f = three_piece();
        let strict = f.value(10.0 + offset).unwrap();
        let fuzzy = f.value_fuzzy(10.0 + offset, 1e-7).unwrap();
        prop_assert_eq!(strict, fuzzy);
    }
}

#[test]
fn prefix_covers_everything_below_the_first_start() {
    let f = three_piece();
    assert_eq!(f.value(-1e6).unwrap(), 0.0);
}

#[test]
fn sum_invariant_holds_for_a_stacked_function() {
    use roadgeom_base::Range;
    use roadgeom_function::{LinearFunction, StackedFunction};
    use std::sync::Arc;

    let a: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(LinearFunction::new(1.0, 2.0, Range::closed(0.0, 10.0)));
    let b: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(LinearFunction::new(-1.0, 5.0, Range::closed(0.0, 10.0)));
    let sum = StackedFunction::of_sum(vec![a.clone(), b.clone()]);
    for x in [0.0, 2.5, 10.0] {
        assert_eq!(sum.value(x).unwrap(), a.value(x).unwrap() + b.value(x).unwrap());
    }
}
