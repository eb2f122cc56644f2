use std::ptr;

use precond_core::{FailureKind, FormatArg, check_not_null};

use crate::common::expect_kind;

#[test]
fn returns_value_unchanged() {
    let config = vec!["a", "b"];
    let value = check_not_null(Some(&config), None, &[]).unwrap();
    assert!(ptr::eq(value, &config));
}

#[test]
fn empty_values_are_not_null() {
    assert_eq!(check_not_null(Some(String::new()), None, &[]).unwrap(), "");
    assert_eq!(check_not_null(Some(0_i64), None, &[]).unwrap(), 0);
}

#[test]
fn none_fails_without_template() {
    let err = check_not_null::<&str>(None, None, &[]).unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullReference);
    assert_eq!(err.message(), None);
}

#[test]
fn none_fails_regardless_of_arguments() {
    let message = expect_kind(
        check_not_null::<u8>(None, Some("%s for %s"), &["token".into(), FormatArg::Null]),
        FailureKind::NullReference,
    );
    assert_eq!(message, "token for null");
}

#[test]
fn macro_form() {
    let port: Option<u16> = None;
    let err = precond_core::check_not_null!(port, "port of %s", "db").unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullReference);
    assert_eq!(err.message(), Some("port of db"));

    let host = precond_core::check_not_null!(Some("db.local")).unwrap();
    assert_eq!(host, "db.local");
}
