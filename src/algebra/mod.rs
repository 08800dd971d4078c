//! Algebraic structures underpinning the sequence operations.
//!
//! This module provides the two type classes that the sequence algebra is
//! built on, together with the numeric wrapper monoids used by the fold
//! reductions:
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Product`]: numeric wrappers selecting the additive and
//!   multiplicative monoids
//!
//! The identity element is what makes shape preservation work: every
//! concatenation seeds its accumulator with `Monoid::empty()` of the
//! result type, so an empty result still has the right shape: an empty
//! `String` stays a string, an empty `Vec` stays a collection.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use foldkit::algebra::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let left = vec![1, 2];
//! let right = vec![3, 4];
//! assert_eq!(left.combine(right), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use foldkit::algebra::{Monoid, Semigroup, Sum};
//!
//! // Combining with the identity element yields the original value
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! // Folding a collection with combine_all
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
