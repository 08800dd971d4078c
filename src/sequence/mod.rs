//! Shape-preserving operations over sequence-like values.
//!
//! A *sequence* is either an indexable collection (`Vec<T>`) or a string
//! of characters (`String`). Both shapes support the same catalogue of
//! operations through the [`Sequence`] trait, and every operation returns
//! a value of the same shape as its input: `tail` of a `String` is a
//! `String`, `tail` of a `Vec<T>` is a `Vec<T>`, even when the input or
//! the result is empty.
//!
//! The shape is carried by the type, so the empty value of the right
//! shape is always available as `Monoid::empty()`, and operations over
//! mixed shapes (say, concatenating a collection with a string) simply do
//! not type-check.
//!
//! # Organization
//!
//! - [`Sequence`]: the core trait: element access and the structural
//!   operations (`head`, `last`, `tail`, `init`, `append`, `prepend`,
//!   `surround`, `inits`, `tails`)
//! - [`Foldable`]: folds, scans, and the derived reductions (`maximum`,
//!   `minimum`, `sum`, `product`), plus `concat_map`
//! - [`Sublist`]: sublist extraction (`take`, `skip`, `span`, `group`, ...)
//!   and the prefix/suffix/infix predicates
//! - [`ops`]: point-free free functions, argument-ordered for use with the
//!   currying and composition macros
//! - [`zip`]: zipping and unzipping between sequences
//!
//! # Laws
//!
//! For all sequences `s` and `t` of one shape:
//!
//! ```text
//! concat([s, empty]) == s                            // right identity
//! concat([empty, s]) == s                            // left identity
//! length(concat([s, t])) == length(s) + length(t)
//! prepend(head(s), tail(s)) == s                     // s non-empty
//! inits(s).len() == tails(s).len() == length(s) + 1
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldkit::sequence::{Foldable, Sequence};
//!
//! // Structural operations preserve shape.
//! assert_eq!(String::from("foo").tails(), vec!["foo", "oo", "o", ""]);
//! assert_eq!(vec![1, 2, 3].tails(), vec![vec![1, 2, 3], vec![2, 3], vec![3], vec![]]);
//!
//! // Reductions are defined through the numeric monoids.
//! assert_eq!(vec![1, 2, 3].sum(), 6);
//! assert_eq!(Vec::<i32>::new().product(), 1);
//! ```

mod base;
mod fold;
mod sublist;

pub mod ops;
pub mod zip;

pub use base::Sequence;
pub use fold::Foldable;
pub use sublist::Sublist;
