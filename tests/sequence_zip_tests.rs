//! Unit tests for zipping and unzipping.

#![cfg(feature = "sequence")]

use foldkit::sequence::zip::{unzip, zip, zip_with};

#[test]
fn zip_pairs_elements_positionally() {
    assert_eq!(
        zip(&vec![1, 2, 3], &vec![4, 5, 6]),
        vec![(1, 4), (2, 5), (3, 6)],
    );
}

#[test]
fn zip_mixes_shapes_into_a_collection_of_pairs() {
    assert_eq!(
        zip(&String::from("abc"), &vec![1, 2, 3]),
        vec![('a', 1), ('b', 2), ('c', 3)],
    );
}

#[test]
fn zip_truncates_to_the_shorter_input() {
    assert_eq!(zip(&vec![1, 2, 3], &vec![4]), vec![(1, 4)]);
    assert_eq!(zip(&String::new(), &vec![1, 2, 3]), Vec::<(char, i32)>::new());
}

#[test]
fn zip_with_combines_instead_of_pairing() {
    let sums = zip_with(|a, b| a + b, &vec![1, 2, 3], &vec![10, 20, 30]);
    assert_eq!(sums, vec![11, 22, 33]);
}

#[test]
fn unzip_splits_pairs_into_two_collections() {
    let (firsts, seconds): (Vec<i32>, Vec<i32>) = unzip(vec![(1, 4), (2, 5), (3, 6)]);
    assert_eq!(firsts, vec![1, 2, 3]);
    assert_eq!(seconds, vec![4, 5, 6]);
}

#[test]
fn unzip_rebuilds_string_shapes() {
    let pairs = vec![('f', 'b'), ('o', 'a'), ('o', 'r')];
    let (first, second): (String, String) = unzip(pairs);
    assert_eq!(first, "foo");
    assert_eq!(second, "bar");
}

#[test]
fn unzip_of_nothing_yields_two_empty_values() {
    let (first, second): (String, Vec<i32>) = unzip(Vec::new());
    assert_eq!(first, "");
    assert_eq!(second, Vec::<i32>::new());
}

#[test]
fn zip_then_unzip_round_trips() {
    let first = vec![1, 2, 3];
    let second = String::from("abc");
    let (rebuilt_first, rebuilt_second): (Vec<i32>, String) = unzip(zip(&first, &second));
    assert_eq!(rebuilt_first, first);
    assert_eq!(rebuilt_second, second);
}
