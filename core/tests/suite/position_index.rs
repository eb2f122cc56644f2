use insta::assert_snapshot;
use precond_core::{
    FailureKind, check_element_index, check_position_index, check_position_index_labeled,
};

use crate::common::expect_kind;

#[test]
fn size_itself_is_a_valid_position() {
    assert_eq!(check_position_index(5, 5), Ok(5));
    assert_eq!(check_position_index(0, 0), Ok(0));
    assert!(check_element_index(5, 5).is_err());
}

#[test]
fn past_the_end_fails() {
    let message = expect_kind(check_position_index(6, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"Position (6) must not be greater than size (5)");
}

#[test]
fn negative_position_fails() {
    let message = expect_kind(check_position_index(-3, 5), FailureKind::IndexOutOfBounds);
    assert_snapshot!(message, @"Position (-3) must not be negative");
}

#[test]
fn negative_size_is_argument_error() {
    let message = expect_kind(check_position_index(1, -2), FailureKind::IllegalArgument);
    assert_eq!(message, "Negative size: -2");
}

#[test]
fn custom_description() {
    let message = expect_kind(
        check_position_index_labeled(-1, 4, "Insertion point"),
        FailureKind::IndexOutOfBounds,
    );
    assert_eq!(message, "Insertion point (-1) must not be negative");
}
