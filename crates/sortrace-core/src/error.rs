//! Input rejection errors for sorting runs.
//!
//! Every variant is raised before the working copy is touched and before a
//! single frame is recorded, so a caller that sees an error never receives a
//! partial trace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a sorting run refuses its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SortError {
    /// A NaN or infinite value was found in the input.
    #[error("invalid input at index {index}: {value} is not a finite number")]
    NonFinite { index: usize, value: String },

    /// Counting and radix sort only accept non-negative integers.
    #[error("invalid input at index {index}: {strategy} sort requires non-negative integers, got {value}")]
    NotCountable {
        strategy: String,
        index: usize,
        value: String,
    },

    /// The counting table for `max` would exceed the configured limit.
    #[error("invalid input: maximum value {max} needs more than {limit} counting table entries")]
    RangeTooLarge { max: usize, limit: usize },

    /// A strategy name did not match any known strategy.
    #[error("unknown strategy: '{name}'")]
    UnknownStrategy { name: String },
}

impl SortError {
    /// Returns true for errors caused by the contents of the input sequence.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SortError::NonFinite { .. }
                | SortError::NotCountable { .. }
                | SortError::RangeTooLarge { .. }
        )
    }
}
