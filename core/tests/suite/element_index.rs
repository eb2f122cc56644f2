use insta::assert_snapshot;
use precond_core::{FailureKind, check_element_index, check_element_index_labeled};

use crate::common::expect_kind;

#[test]
fn valid_indices_are_returned() {
    assert_eq!(check_element_index(0, 1), Ok(0));
    assert_eq!(check_element_index(4, 5), Ok(4));
}

#[test]
fn index_equal_to_size_fails() {
    let message = expect_kind(check_element_index(5, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"Index (5) must be less than size (5)");
}

#[test]
fn negative_index_fails() {
    let message = expect_kind(check_element_index(-1, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"Index (-1) must not be negative");
}

#[test]
fn negative_size_is_argument_error() {
    let message = expect_kind(check_element_index(0, -1), FailureKind::IllegalArgument);
    assert_snapshot!(message, @"Negative size: -1");
}

#[test]
fn empty_sequence_has_no_elements() {
    let message = expect_kind(check_element_index(0, 0), FailureKind::IndexOutOfBounds);
    assert_eq!(message, "Index (0) must be less than size (0)");
}

#[test]
fn custom_description() {
    let message = expect_kind(
        check_element_index_labeled(12, 10, "Column"),
        FailureKind::IndexOutOfBounds,
    );
    assert_snapshot!(message, @"Column (12) must be less than size (10)");
}

#[test]
fn extreme_values() {
    assert_eq!(check_element_index(i64::MAX - 1, i64::MAX), Ok(i64::MAX - 1));
    let message = expect_kind(check_element_index(i64::MIN, 1), FailureKind::IndexOutOfBounds);
    assert_eq!(message, format!("Index ({}) must not be negative", i64::MIN));
}
