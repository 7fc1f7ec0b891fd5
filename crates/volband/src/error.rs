//! Error types for volatility estimation.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while estimating volatility or projecting a range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Malformed or degenerate numeric input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Price history does not reach back to the requested start
    #[error("Insufficient data: history starts {earliest}, requested start {requested_start}")]
    InsufficientData {
        /// Earliest date available in the fetched history
        earliest: NaiveDate,
        /// Start of the requested lookback window
        requested_start: NaiveDate,
    },
}

impl EstimateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Whether the error reports an under-covered lookback window.
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = EstimateError::InsufficientData {
            earliest: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            requested_start: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        };
        assert!(err.is_insufficient_data());
        assert_eq!(
            err.to_string(),
            "Insufficient data: history starts 2024-03-01, requested start 2023-03-01"
        );
    }

    #[test]
    fn test_invalid_input_is_not_insufficient() {
        let err = EstimateError::invalid("window must be at least 1");
        assert!(!err.is_insufficient_data());
        assert_eq!(err.to_string(), "Invalid input: window must be at least 1");
    }
}
