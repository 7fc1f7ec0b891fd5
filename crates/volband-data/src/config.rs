//! Estimation configuration passed to the data layer.

use crate::error::{DataError, Result};
use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use volband::PriceField;

/// Default holding window in sessions (about one trading month).
pub const DEFAULT_WINDOW: u32 = 21;

/// Default lookback in years.
pub const DEFAULT_LOOKBACK_YEARS: f64 = 1.0;

/// What to fetch and how to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Holding window in sessions
    pub window: u32,
    /// Price field used as the estimation basis
    pub selection: PriceField,
    /// Length of the price history to fetch, in years
    pub lookback_years: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            selection: PriceField::AdjustedClose,
            lookback_years: DEFAULT_LOOKBACK_YEARS,
        }
    }
}

impl EstimationConfig {
    /// Check option ranges.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidConfig`] if the window is zero or the lookback
    /// is not a positive number of at least one month.
    pub fn validate(&self) -> Result<()> {
        if self.window < 1 {
            return Err(DataError::InvalidConfig(
                "window must be at least 1 session".to_string(),
            ));
        }
        self.lookback_months().map(|_| ())
    }

    /// First date of the lookback window ending at `today`.
    ///
    /// One extra day is subtracted so that the window spans the full lookback.
    pub fn lookback_start(&self, today: NaiveDate) -> Result<NaiveDate> {
        let months = self.lookback_months()?;
        today
            .checked_sub_months(Months::new(months))
            .and_then(|d| d.checked_sub_signed(Duration::days(1)))
            .ok_or_else(|| {
                DataError::InvalidConfig(format!(
                    "lookback of {} years from {today} is out of range",
                    self.lookback_years
                ))
            })
    }

    /// Fetch range `(start, end)` for a request made at `now`.
    pub fn fetch_range(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self
            .lookback_start(now.date_naive())?
            .and_time(NaiveTime::MIN)
            .and_utc();
        Ok((start, now))
    }

    fn lookback_months(&self) -> Result<u32> {
        let months = (self.lookback_years * 12.0).round();
        if !self.lookback_years.is_finite() || months < 1.0 || months > f64::from(u32::MAX) {
            return Err(DataError::InvalidConfig(format!(
                "lookback must be at least one month, got {} years",
                self.lookback_years
            )));
        }
        Ok(months as u32)
    }
}
