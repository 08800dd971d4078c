//! Function composition and arity adaptation utilities.
//!
//! This module lets a function declared with a fixed parameter count be
//! invoked through partial application, one argument at a time, or with a
//! collected trailing argument list, and lets any number of functions be
//! chained into one.
//!
//! # Overview
//!
//! - [`compose!`]: compose functions right-to-left (mathematical order)
//! - [`pipe!`]: compose functions left-to-right (data flow order)
//! - [`curry2!`] through [`curry4!`]: convert a multi-argument function
//!   into nested single-argument closures
//! - [`partial!`]: fix any subset of a function's arguments with `__`
//!   placeholders
//! - [`variadic!`]: collect a call site's trailing arguments into one
//!   list argument
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`uncurry`]: converts a binary function into a function on pairs
//!
//! # Examples
//!
//! ## Currying and partial application
//!
//! ```
//! use foldkit::{curry3, partial};
//!
//! fn add_three(first: i32, second: i32, third: i32) -> i32 {
//!     first + second + third
//! }
//!
//! // One argument at a time...
//! let curried = curry3!(add_three);
//! assert_eq!(curried(1)(2)(3), 6);
//!
//! // ...or several at once, leaving the rest as parameters.
//! let add_to_three = partial!(add_three, 1, 2, __);
//! assert_eq!(add_to_three(3), 6);
//! ```
//!
//! ## Variadic collection
//!
//! ```
//! use foldkit::variadic;
//!
//! fn join(separator: char, pieces: Vec<String>) -> String {
//!     pieces.join(separator.to_string().as_str())
//! }
//!
//! let joined = variadic!(join; '-'; String::from("a"), String::from("b"));
//! assert_eq!(joined, "a-b");
//! ```
//!
//! ## Composition
//!
//! ```
//! use foldkit::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//!
//! ## Curry Law
//!
//! - **Round Trip**: `curry3!(f)(a)(b)(c) == f(a, b, c)`

mod combinators;
mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod variadic_macro;

// Re-export helper functions
pub use combinators::{__, Placeholder, constant, flip, identity, uncurry};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
pub use crate::variadic;
