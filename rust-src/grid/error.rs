//! Grid editor errors.

use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("year {0} is already in the table")]
    DuplicateYear(i32),

    #[error("no year before {0} can be represented")]
    YearOutOfRange(i32),
}
