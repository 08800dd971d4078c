//! The `partial!` macro for partial function application.
//!
//! Where the curry macros supply arguments strictly one at a time,
//! `partial!` fixes any subset of a function's arguments in a single
//! step, leaving the rest as parameters of the returned closure.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that
/// should remain as parameters in the resulting function.
///
/// **Important**: do NOT import `foldkit::compose::__`; the macro matches
/// `__` as a literal token.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// All placeholder combinations are likewise supported for 3-argument
/// functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the partial function may be
///   called multiple times)
/// - The function must implement [`Fn`]
///
/// # Examples
///
/// ## Fixing the first argument
///
/// ```
/// use foldkit::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing the second argument
///
/// ```
/// use foldkit::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Supplying several arguments at once
///
/// ```
/// use foldkit::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let to_percent = partial!(clamp, 0, 100, __);
/// assert_eq!(to_percent(250), 100);
/// assert_eq!(to_percent(-4), 0);
/// ```
///
/// ## With sequence operations
///
/// ```
/// use foldkit::partial;
/// use foldkit::sequence::ops;
///
/// let bracket = partial!(ops::surround::<String>, '[', ']', __);
/// assert_eq!(bracket(String::from("x")), "[x]");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (most placeholders first)
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| function(first.clone(), second, third.clone())
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| function(first, second.clone(), third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || function(first.clone(), second.clone(), third.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(first.clone(), second.clone())
    }};
}

#[cfg(test)]
mod tests {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    #[test]
    fn fixing_no_arguments_forwards_the_call() {
        let forwarded = partial!(add, __, __);
        assert_eq!(forwarded(1, 2), 3);
    }

    #[test]
    fn fixing_all_arguments_yields_a_thunk() {
        let thunk = partial!(add, 3, 5);
        assert_eq!(thunk(), 8);
    }

    #[test]
    fn fixing_the_middle_argument() {
        let around_ten = partial!(add_three, __, 10, __);
        assert_eq!(around_ten(1, 2), 13);
    }

    #[test]
    fn partial_is_reusable() {
        let add_five = partial!(add, 5, __);
        for offset in 0..10 {
            assert_eq!(add_five(offset), 5 + offset);
        }
    }
}
