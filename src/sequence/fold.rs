//! Fold operations over sequences.
//!
//! [`Foldable`] extends every [`Sequence`] with reductions: directional
//! folds, scans that keep the intermediate accumulators, map-then-concat,
//! and the derived numeric/order reductions.
//!
//! Directionality is part of each contract: `fold_left` consumes elements
//! left to right and its combining function receives
//! `(accumulator, element)`; `fold_right` consumes right to left and its
//! combining function receives `(element, accumulator)`, mirroring the
//! traversal direction.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::compose::flip;
//! use foldkit::sequence::{ops, Foldable};
//!
//! // Reversal, on both shapes, with the same fold.
//! let reversed = vec![1, 2, 3].fold_left(vec![], flip(ops::prepend::<Vec<i32>>));
//! assert_eq!(reversed, vec![3, 2, 1]);
//!
//! let reversed = String::from("foo").fold_left(String::new(), flip(ops::prepend::<String>));
//! assert_eq!(reversed, "oof");
//! ```

use crate::algebra::{Monoid, Product, Semigroup, Sum};

use super::base::Sequence;

/// Fold operations for sequences.
///
/// This trait is implemented for every [`Sequence`]; it only adds derived
/// behavior.
///
/// # Laws
///
/// For all sequences `s`, seeds `z`, and combining functions `f`:
///
/// ```text
/// scan_left(z, f).len() == length + 1
/// scan_left(z, f).first() == Some(z)
/// scan_left(z, f).last() == Some(fold_left(z, f))
/// ```
pub trait Foldable: Sequence {
    /// Folds the sequence from left to right with an accumulator.
    ///
    /// The combining function receives `(accumulator, element)`. Elements
    /// are visited exactly once, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// let sum = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.items().fold(init, function)
    }

    /// Folds the sequence from right to left with an accumulator.
    ///
    /// The combining function receives `(element, accumulator)`: the
    /// rightmost element is processed first, so the element always comes
    /// before the accumulator-so-far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::{ops, Foldable};
    ///
    /// let reversed = vec![1, 2, 3].fold_right(vec![], ops::append::<Vec<i32>>);
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(Self::Item, B) -> B,
    {
        let elements: Vec<Self::Item> = self.items().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Like [`fold_left`](Foldable::fold_left), but returns every
    /// intermediate accumulator, starting with the seed.
    ///
    /// The result is collection-shaped regardless of the input's shape (it
    /// is a sequence of accumulator values, not text) and always has
    /// `length() + 1` entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// let running = vec![1, 2, 3].scan_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(running, vec![0, 1, 3, 6]);
    /// ```
    fn scan_left<B, F>(&self, init: B, mut function: F) -> Vec<B>
    where
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut result = Vec::with_capacity(self.length() + 1);
        let mut accumulator = init;
        for element in self.items() {
            result.push(accumulator.clone());
            accumulator = function(accumulator, element);
        }
        result.push(accumulator);
        result
    }

    /// Like [`fold_right`](Foldable::fold_right), but returns every
    /// intermediate accumulator; the seed is the *last* entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::{ops, Foldable};
    ///
    /// let suffixes = vec![1, 2, 3].scan_right(vec![], ops::append::<Vec<i32>>);
    /// assert_eq!(suffixes, vec![vec![3, 2, 1], vec![3, 2], vec![3], vec![]]);
    /// ```
    fn scan_right<B, F>(&self, init: B, mut function: F) -> Vec<B>
    where
        B: Clone,
        F: FnMut(Self::Item, B) -> B,
    {
        let elements: Vec<Self::Item> = self.items().collect();
        let mut result = Vec::with_capacity(elements.len() + 1);
        let mut accumulator = init;
        result.push(accumulator.clone());
        for element in elements.into_iter().rev() {
            accumulator = function(element, accumulator);
            result.push(accumulator.clone());
        }
        result.reverse();
        result
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// The result has the shape of the input, including when the input is
    /// empty or the function only produces empty pieces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::{Foldable, Sequence};
    ///
    /// let doubled = vec![1, 2, 3].concat_map(|element| vec![element, 0]);
    /// assert_eq!(doubled, vec![1, 0, 2, 0, 3, 0]);
    ///
    /// let dashed = String::from("foo").concat_map(|c| String::from(c).append('-'));
    /// assert_eq!(dashed, "f-o-o-");
    /// ```
    #[must_use]
    fn concat_map<F>(&self, function: F) -> Self
    where
        F: FnMut(Self::Item) -> Self,
    {
        self.items()
            .map(function)
            .fold(Self::empty(), Semigroup::combine)
    }

    /// Returns the greatest element, or `None` when the sequence is empty.
    ///
    /// The fold is seeded from the first element, so there is no identity
    /// requirement on the element type; the price is the `None` on empty
    /// input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// assert_eq!(vec![1, 3, 2].maximum(), Some(3));
    /// assert_eq!(String::from("abc").maximum(), Some('c'));
    /// assert_eq!(Vec::<i32>::new().maximum(), None);
    /// ```
    fn maximum(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.items()
            .reduce(|best, element| if element > best { element } else { best })
    }

    /// Returns the least element, or `None` when the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// assert_eq!(vec![2, 1, 3].minimum(), Some(1));
    /// assert_eq!(String::from("abc").minimum(), Some('a'));
    /// ```
    fn minimum(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.items()
            .reduce(|best, element| if element < best { element } else { best })
    }

    /// Returns the sum of the elements; `0` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].sum(), 6);
    /// assert_eq!(Vec::<i32>::new().sum(), 0);
    /// ```
    fn sum(&self) -> Self::Item
    where
        Sum<Self::Item>: Monoid,
    {
        self.fold_left(Sum::empty(), |accumulator, element| {
            accumulator.combine(Sum::new(element))
        })
        .into_inner()
    }

    /// Returns the product of the elements; `1` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].product(), 6);
    /// assert_eq!(Vec::<i32>::new().product(), 1);
    /// ```
    fn product(&self) -> Self::Item
    where
        Product<Self::Item>: Monoid,
    {
        self.fold_left(Product::empty(), |accumulator, element| {
            accumulator.combine(Product::new(element))
        })
        .into_inner()
    }
}

impl<S: Sequence> Foldable for S {}
