use std::fs;
use std::thread;

use precond_core::{Checker, CheckerConfig, FailureKind, FormatArg, TemplatePolicy};
use tempfile::tempdir;

use crate::common::expect_kind;

#[test]
fn checker_from_config_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("precond.toml");
    fs::write(
        &path,
        "[template]\npolicy = \"strict\"\n\n[labels]\nelement = \"Slot\"\n",
    )
    .expect("write config");

    let config = CheckerConfig::load(&path).expect("load config");
    let checker = Checker::from_config(&config);
    assert_eq!(checker.policy(), TemplatePolicy::Strict);

    let message = expect_kind(checker.check_element_index(8, 8), FailureKind::IndexOutOfBounds);
    assert_eq!(message, "Slot (8) must be less than size (8)");

    // Position label was not configured.
    let message = expect_kind(checker.check_position_index(9, 8), FailureKind::IndexOutOfBounds);
    assert_eq!(message, "Position (9) must not be greater than size (8)");
}

#[test]
fn strict_checker_reports_template_errors() {
    let checker = Checker::new().with_policy(TemplatePolicy::Strict);
    let message = expect_kind(
        checker.check_argument(false, Some("%d"), &[FormatArg::from("seven")]),
        FailureKind::IllegalArgument,
    );
    assert_eq!(
        message,
        "invalid message template \"%d\": argument #0 is not numeric for `%d`"
    );

    // A well-formed template keeps the original kind.
    let message = expect_kind(
        checker.check_state(false, Some("%d pending"), &[3.into()]),
        FailureKind::IllegalState,
    );
    assert_eq!(message, "3 pending");
}

#[test]
fn checkers_are_shareable_across_threads() {
    let checker = Checker::new();
    thread::scope(|scope| {
        for i in 0..4_i64 {
            let checker = &checker;
            scope.spawn(move || {
                assert_eq!(checker.check_element_index(i, 4), Ok(i));
                assert!(checker.check_element_index(i + 4, 4).is_err());
            });
        }
    });
}
