//! Zipping and unzipping between sequences.
//!
//! Zipping pairs up the elements of two sequences positionally; the
//! result is always collection-shaped (a `Vec` of pairs or of combined
//! values), because pairs are not text even when both inputs are strings.
//! Unzipping rebuilds two sequences from an iterator of pairs; the output
//! shapes are chosen by the caller's types, so a pair-of-strings result
//! is expressed as `(String, String)`.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::sequence::zip::{unzip, zip};
//!
//! let pairs = zip(&vec![1, 2, 3], &String::from("abc"));
//! assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
//!
//! let (letters, digits): (String, Vec<i32>) = unzip(vec![('f', 1), ('o', 2), ('o', 3)]);
//! assert_eq!(letters, "foo");
//! assert_eq!(digits, vec![1, 2, 3]);
//! ```

use super::base::Sequence;

/// Pairs up the elements of two sequences positionally, truncating to the
/// shorter input.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::zip::zip;
///
/// assert_eq!(
///     zip(&vec![1, 2, 3], &vec!["a", "b"]),
///     vec![(1, "a"), (2, "b")],
/// );
/// ```
pub fn zip<A, B>(first: &A, second: &B) -> Vec<(A::Item, B::Item)>
where
    A: Sequence,
    B: Sequence,
{
    first.items().zip(second.items()).collect()
}

/// Combines the elements of two sequences positionally with `function`,
/// truncating to the shorter input.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::zip::zip_with;
///
/// let sums = zip_with(|a, b| a + b, &vec![1, 2, 3], &vec![10, 20, 30]);
/// assert_eq!(sums, vec![11, 22, 33]);
/// ```
pub fn zip_with<A, B, C, F>(mut function: F, first: &A, second: &B) -> Vec<C>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(A::Item, B::Item) -> C,
{
    first
        .items()
        .zip(second.items())
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Rebuilds two sequences from an iterator of pairs.
///
/// The output shapes are determined by the caller's types: unzipping into
/// `(String, String)` yields two strings, into `(Vec<_>, Vec<_>)` two
/// collections. Zero pairs yield two same-shape empty values.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::zip::unzip;
///
/// let (firsts, seconds): (Vec<i32>, Vec<i32>) = unzip(vec![(1, 4), (2, 5), (3, 6)]);
/// assert_eq!(firsts, vec![1, 2, 3]);
/// assert_eq!(seconds, vec![4, 5, 6]);
///
/// let (a, b): (String, String) = unzip(vec![('f', 'b'), ('o', 'a'), ('o', 'r')]);
/// assert_eq!((a, b), (String::from("foo"), String::from("bar")));
/// ```
pub fn unzip<A, B, I>(pairs: I) -> (A, B)
where
    A: Sequence,
    B: Sequence,
    I: IntoIterator<Item = (A::Item, B::Item)>,
{
    pairs.into_iter().fold(
        (A::empty(), B::empty()),
        |(firsts, seconds), (first, second)| (firsts.append(first), seconds.append(second)),
    )
}
