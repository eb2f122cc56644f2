//! Messages for failed index, position and range checks.
//!
//! Each builder is only called once a check has already failed, and returns
//! the complete error. A negative `size` is reported as an illegal argument
//! even though an index check triggered the message.

use precond_types::{Label, PreconditionError};

pub(crate) fn bad_element_index(index: i64, size: i64, description: &str) -> PreconditionError {
    if index < 0 {
        PreconditionError::index_out_of_bounds(format!(
            "{description} ({index}) must not be negative"
        ))
    } else if size < 0 {
        negative_size(size)
    } else {
        PreconditionError::index_out_of_bounds(format!(
            "{description} ({index}) must be less than size ({size})"
        ))
    }
}

pub(crate) fn bad_position_index(index: i64, size: i64, description: &str) -> PreconditionError {
    if index < 0 {
        PreconditionError::index_out_of_bounds(format!(
            "{description} ({index}) must not be negative"
        ))
    } else if size < 0 {
        negative_size(size)
    } else {
        PreconditionError::index_out_of_bounds(format!(
            "{description} ({index}) must not be greater than size ({size})"
        ))
    }
}

pub(crate) fn bad_position_indexes(start: i64, end: i64, size: i64) -> PreconditionError {
    if start < 0 || start > size {
        return bad_position_index(start, size, Label::START_INDEX.as_str());
    }
    if end < 0 || end > size {
        return bad_position_index(end, size, Label::END_INDEX.as_str());
    }
    // Both ends are in [0, size]; the range is inverted.
    PreconditionError::index_out_of_bounds(format!(
        "End Index ({end}) must not be less than start index ({start})"
    ))
}

fn negative_size(size: i64) -> PreconditionError {
    PreconditionError::illegal_argument(format!("Negative size: {size}"))
}
