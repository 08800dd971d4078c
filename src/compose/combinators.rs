//! Point-free combinators for function composition.
//!
//! The classic building blocks, named after their combinatory-logic
//! counterparts where one exists:
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: the C combinator
//! - [`uncurry`]: adapts a binary function to accept a pair

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` are both
/// equivalent to `f`.
///
/// # Examples
///
/// ```
/// use foldkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use foldkit::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // Replace all elements with zeros
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g` such that
/// `g(b, a) == f(a, b)`. Useful for partial application when the second
/// argument should be fixed instead of the first, and for adapting
/// element-first functions into fold combiners.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use foldkit::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert!((flipped(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Converts a binary function into a function on pairs.
///
/// # Examples
///
/// ```
/// use foldkit::compose::uncurry;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_pair = uncurry(add);
/// assert_eq!(add_pair((1, 2)), 3);
/// ```
#[inline]
pub fn uncurry<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first_argument, second_argument)| function(first_argument, second_argument)
}

/// Placeholder marker type for partial application.
///
/// This type is used internally by the [`partial!`](crate::partial) macro.
/// Users should write `__` (double underscore) directly in the macro
/// invocation as a literal token, without importing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: Do NOT import this constant when using
/// [`partial!`](crate::partial). The macro matches `__` as a literal
/// token; importing the constant would defeat that matching. It exists
/// only for programmatic use cases.
///
/// Note: this is named `__` (double underscore) because `macro_rules!`
/// cannot match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
