use insta::assert_snapshot;
use precond_core::{FailureKind, check_position_index_labeled, check_position_indexes};

use crate::common::expect_kind;

#[test]
fn full_and_empty_ranges_are_valid() {
    assert_eq!(check_position_indexes(0, 5, 5), Ok(()));
    assert_eq!(check_position_indexes(3, 3, 5), Ok(()));
    assert_eq!(check_position_indexes(5, 5, 5), Ok(()));
    assert_eq!(check_position_indexes(0, 0, 0), Ok(()));
}

#[test]
fn inverted_range_fails() {
    let message = expect_kind(check_position_indexes(2, 1, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"End Index (1) must not be less than start index (2)");
}

#[test]
fn bad_start_matches_position_message() {
    let range = expect_kind(check_position_indexes(-1, 3, 5), FailureKind::IndexOutOfBounds);
    let single = expect_kind(
        check_position_index_labeled(-1, 5, "Start Index"),
        FailureKind::IndexOutOfBounds,
    );
    assert_eq!(range, single);
    assert_snapshot!(range, @"Start Index (-1) must not be negative");
}

#[test]
fn start_past_end_of_sequence() {
    let message = expect_kind(check_position_indexes(6, 7, 5), FailureKind::IndexOutOfBounds);
    assert_eq!(message, "Start Index (6) must not be greater than size (5)");
}

#[test]
fn bad_end_matches_position_message() {
    let message = expect_kind(check_position_indexes(1, 9, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"End Index (9) must not be greater than size (5)");
}

#[test]
fn negative_size_takes_precedence() {
    let message = expect_kind(check_position_indexes(0, 0, -1), FailureKind::IllegalArgument);
    assert_eq!(message, "Negative size: -1");
}
