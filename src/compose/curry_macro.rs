//! The curry macro family for converting multi-argument functions to
//! curried form.
//!
//! Currying transforms a function that takes multiple arguments into a
//! chain of closures, each taking a single argument. The arity of the
//! wrapped function is declared by the macro name (`curry2!` for two
//! arguments, and so on) and fixed at wrap time; there is no runtime
//! arity inspection. Zero- and one-argument functions are already in
//! curried form, so the family starts at two.
//!
//! The macros share the function and the accumulated arguments through
//! `std::rc::Rc`, which is what makes a partial application reusable:
//! applying one more argument clones the shared prefix into a new closure
//! and leaves the original application untouched.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`], so that
///   partial applications can be reused
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use foldkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Reusable partial application
///
/// ```
/// use foldkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## With sequence operations
///
/// ```
/// use foldkit::curry2;
/// use foldkit::sequence::ops;
///
/// let curried_prepend = curry2!(ops::prepend::<String>);
/// let herald = curried_prepend('!');
/// assert_eq!(herald(String::from("bang")), "!bang");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that take
/// one argument at a time. Applying arguments one at a time, or mixing in
/// [`partial!`](crate::partial) for several at once, reaches the same
/// result as the direct call.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use foldkit::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// assert_eq!(curried(1)(2)(3), add_three(1, 2, 3));
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// Given a function `f(a, b, c, d) -> e`, returns nested closures that
/// take one argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use foldkit::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::rc::Rc::clone(&first);
                    let second = ::std::rc::Rc::clone(&second);
                    let third = ::std::rc::Rc::new(third);
                    move |fourth| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
