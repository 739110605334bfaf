use thiserror::Error;

/// Error type for the size-guarded diff entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An input holds more lines than the configured limit allows
    #[error("input has {lines} lines but the configured limit is {limit} lines")]
    TooManyLines {
        /// The number of lines in the offending input
        lines: usize,
        /// The configured maximum
        limit: usize,
    },

    /// A single line is longer than the configured limit allows
    #[error(
        "line {line_number} has {chars} characters but the configured limit is {limit} \
         characters per line"
    )]
    LineTooLong {
        /// The 1-based number of the offending line
        line_number: usize,
        /// The number of characters in that line
        chars: usize,
        /// The configured maximum
        limit: usize,
    },
}
