//! Unit tests for compose!, pipe!, and the point-free combinators.

#![cfg(feature = "compose")]

use foldkit::compose::{constant, flip, identity, uncurry};
use foldkit::{compose, pipe};

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

fn square(x: i32) -> i32 {
    x * x
}

// =============================================================================
// compose!
// =============================================================================

#[test]
fn compose_applies_right_to_left() {
    let composed = compose!(add_one, double);
    assert_eq!(composed(5), 11);
}

#[test]
fn compose_of_one_function_is_the_function() {
    let composed = compose!(double);
    assert_eq!(composed(5), 10);
}

#[test]
fn compose_chains_many_functions() {
    // add_one(double(square(3))) = add_one(18) = 19
    let composed = compose!(add_one, double, square);
    assert_eq!(composed(3), 19);
}

#[test]
fn compose_threads_type_changes() {
    fn to_string(x: i32) -> String {
        x.to_string()
    }
    fn length(s: String) -> usize {
        s.len()
    }

    let composed = compose!(length, to_string);
    assert_eq!(composed(12345), 5);
}

#[test]
fn compose_accepts_capturing_closures() {
    let multiplier = 3;
    let multiply = |x: i32| x * multiplier;

    let composed = compose!(add_one, multiply);
    assert_eq!(composed(5), 16);
}

// =============================================================================
// pipe!
// =============================================================================

#[test]
fn pipe_applies_left_to_right() {
    assert_eq!(pipe!(5, add_one, double), 12);
    assert_eq!(pipe!(5, double, add_one), 11);
}

#[test]
fn pipe_of_a_bare_value_is_the_value() {
    assert_eq!(pipe!(42), 42);
}

// =============================================================================
// Combinators
// =============================================================================

#[test]
fn identity_returns_its_argument() {
    assert_eq!(identity(5), 5);
    assert_eq!(identity(String::from("abc")), "abc");
}

#[test]
fn constant_ignores_its_argument() {
    let one = constant::<_, i32>(1);
    assert_eq!(one(2), 1);
    assert_eq!(one(3), 1);
}

#[test]
fn flip_swaps_the_arguments() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), 7);
}

#[test]
fn double_flip_is_the_original_function() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped_twice = flip(flip(subtract));
    assert_eq!(flipped_twice(10, 3), subtract(10, 3));
}

#[test]
fn uncurry_adapts_a_binary_function_to_pairs() {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    let add_pair = uncurry(add);
    assert_eq!(add_pair((1, 2)), 3);
}

// =============================================================================
// Sequence pipelines
// =============================================================================

#[cfg(feature = "sequence")]
mod sequence_pipelines {
    use foldkit::sequence::ops;
    use foldkit::{compose, pipe};

    #[test]
    fn composed_sequence_operations_preserve_shape() {
        let trim_ends = compose!(ops::init::<String>, ops::tail);
        assert_eq!(trim_ends(String::from("foobar")), "ooba");
        assert_eq!(trim_ends(String::from("a")), "");
    }

    #[test]
    fn piped_sequence_operations_read_in_data_order() {
        let result = pipe!(
            vec![1, 2, 3, 4],
            ops::tail,
            ops::init,
            |sequence| ops::prepend(0, sequence),
        );
        assert_eq!(result, vec![0, 2, 3]);
    }
}
