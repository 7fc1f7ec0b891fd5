//! Lookback coverage check.
//!
//! Runs once per request, before any estimation. A provider that returns
//! history starting well after the requested start (the equity was not
//! trading yet, for instance) would make every estimate rest on too few
//! observations, so the request is stopped instead.

use crate::error::{EstimateError, Result};
use crate::series::PriceSeries;
use chrono::{Duration, NaiveDate};

/// Days the first available quote may trail the requested start.
pub const COVERAGE_TOLERANCE_DAYS: i64 = 5;

/// Fail if `earliest` is more than [`COVERAGE_TOLERANCE_DAYS`] after `requested_start`.
///
/// # Errors
/// Returns [`EstimateError::InsufficientData`] when history is too short.
pub fn check_coverage(earliest: NaiveDate, requested_start: NaiveDate) -> Result<()> {
    let limit = requested_start + Duration::days(COVERAGE_TOLERANCE_DAYS);
    if earliest > limit {
        tracing::warn!(%earliest, %requested_start, "price history does not cover lookback window");
        return Err(EstimateError::InsufficientData {
            earliest,
            requested_start,
        });
    }

    tracing::debug!(%earliest, %requested_start, "lookback window covered");
    Ok(())
}

/// Check that a fetched series covers the lookback window starting at `requested_start`.
///
/// An empty series never covers anything.
///
/// # Errors
/// Returns [`EstimateError::InsufficientData`] when history is too short or missing.
pub fn ensure_covers(series: &PriceSeries, requested_start: NaiveDate) -> Result<()> {
    let earliest = series
        .first_date()
        .ok_or(EstimateError::InsufficientData {
            earliest: NaiveDate::MAX,
            requested_start,
        })?;
    check_coverage(earliest, requested_start)
}
