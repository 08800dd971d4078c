//! Property-based tests for the composition and flip laws.

#![cfg(feature = "compose")]

use foldkit::compose;
use foldkit::compose::{flip, identity};
use proptest::prelude::*;

fn add_one(x: i64) -> i64 {
    x.wrapping_add(1)
}

fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

fn negate(x: i64) -> i64 {
    x.wrapping_neg()
}

proptest! {
    // =========================================================================
    // Composition laws
    // =========================================================================

    #[test]
    fn prop_compose_is_associative(input: i64) {
        let left = compose!(add_one, compose!(double, negate));
        let right = compose!(compose!(add_one, double), negate);
        prop_assert_eq!(left(input), right(input));
    }

    #[test]
    fn prop_identity_is_a_left_unit(input: i64) {
        let composed = compose!(identity, double);
        prop_assert_eq!(composed(input), double(input));
    }

    #[test]
    fn prop_identity_is_a_right_unit(input: i64) {
        let composed = compose!(double, identity);
        prop_assert_eq!(composed(input), double(input));
    }

    #[test]
    fn prop_compose_matches_nested_application(input: i64) {
        let composed = compose!(add_one, double, negate);
        prop_assert_eq!(composed(input), add_one(double(negate(input))));
    }

    // =========================================================================
    // Flip laws
    // =========================================================================

    #[test]
    fn prop_flip_swaps_arguments(a: i64, b: i64) {
        let subtract = |x: i64, y: i64| x.wrapping_sub(y);
        let flipped = flip(subtract);
        prop_assert_eq!(flipped(a, b), subtract(b, a));
    }

    #[test]
    fn prop_double_flip_is_identity(a: i64, b: i64) {
        let subtract = |x: i64, y: i64| x.wrapping_sub(y);
        let flipped_twice = flip(flip(subtract));
        prop_assert_eq!(flipped_twice(a, b), subtract(a, b));
    }
}
