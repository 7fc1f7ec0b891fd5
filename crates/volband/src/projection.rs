//! Projected price range over a holding window.
//!
//! The range is a ±1σ band around a drift-adjusted midpoint:
//!
//! ```text
//! midpoint = ref + 0.5 * mean_return * ref * n
//! delta    = ref * window_volatility
//! low      = midpoint - delta
//! high     = midpoint + delta
//! ```
//!
//! The expected return over the window is the single-period mean return
//! multiplied by `n` (simple, not compounded).

use crate::error::{EstimateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Low/high price band for a holding window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeProjection {
    /// Volatility over the full window
    pub volatility: f64,
    /// Mean single-period return
    pub mean_return: f64,
    /// Price the band is built around
    pub reference_price: f64,
    /// Number of periods in the window
    pub period_count: u32,
    /// Lower edge of the band
    pub low_price: f64,
    /// Upper edge of the band
    pub high_price: f64,
}

impl RangeProjection {
    /// Project a price range.
    ///
    /// # Arguments
    /// * `window_volatility` - Volatility already scaled to `period_count` periods
    /// * `mean_return` - Mean single-period return
    /// * `reference_price` - Current price
    /// * `period_count` - Number of periods in the window
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidInput`] if `reference_price` is not positive,
    /// `period_count` is zero, or either estimate is not finite.
    pub fn new(
        window_volatility: f64,
        mean_return: f64,
        reference_price: f64,
        period_count: u32,
    ) -> Result<Self> {
        if !(reference_price.is_finite() && reference_price > 0.0) {
            return Err(EstimateError::invalid(format!(
                "reference price {reference_price} must be positive"
            )));
        }
        if period_count < 1 {
            return Err(EstimateError::invalid("period count must be at least 1"));
        }
        if !(window_volatility.is_finite() && window_volatility >= 0.0) {
            return Err(EstimateError::invalid(format!(
                "volatility {window_volatility} must be finite and non-negative"
            )));
        }
        if !mean_return.is_finite() {
            return Err(EstimateError::invalid(format!(
                "mean return {mean_return} must be finite"
            )));
        }

        let midpoint =
            reference_price + 0.5 * mean_return * reference_price * f64::from(period_count);
        let delta = reference_price * window_volatility;

        Ok(Self {
            volatility: window_volatility,
            mean_return,
            reference_price,
            period_count,
            low_price: midpoint - delta,
            high_price: midpoint + delta,
        })
    }

    /// Drift-adjusted center of the band.
    pub const fn midpoint(&self) -> f64 {
        (self.low_price + self.high_price) / 2.0
    }

    /// Expected simple return over the whole window.
    pub const fn expected_return(&self) -> f64 {
        self.mean_return * self.period_count as f64
    }

    /// Human-readable report.
    pub fn report(&self) -> String {
        self.to_string()
    }

    const fn sessions_suffix(&self) -> &'static str {
        if self.period_count == 1 { "" } else { "s" }
    }
}

impl fmt::Display for RangeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.period_count;
        let suffix = self.sessions_suffix();
        writeln!(
            f,
            "Volatility over {n} session{suffix} : {:.2} pct",
            self.volatility * 100.0
        )?;
        writeln!(
            f,
            "Expected return over {n} session{suffix} : {:.2} pct",
            self.expected_return() * 100.0
        )?;
        writeln!(f, "Reference price: $ {:.2}", self.reference_price)?;
        writeln!(f, "Range of 1 std up or down with growth adjustment:")?;
        writeln!(f, "Low price: $ {:.2}", self.low_price)?;
        write!(f, "High price: $ {:.2}", self.high_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_arithmetic() {
        let p = RangeProjection::new(0.05, 0.001, 200.0, 10).unwrap();

        // midpoint = 200 + 0.5 * 0.001 * 200 * 10 = 201, delta = 10
        assert_relative_eq!(p.midpoint(), 201.0, epsilon = 1e-9);
        assert_relative_eq!(p.low_price, 191.0, epsilon = 1e-9);
        assert_relative_eq!(p.high_price, 211.0, epsilon = 1e-9);
        assert_relative_eq!(p.expected_return(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_volatility_collapses_band() {
        let p = RangeProjection::new(0.0, 0.0, 50.0, 3).unwrap();
        assert_eq!(p.low_price, 50.0);
        assert_eq!(p.high_price, 50.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(RangeProjection::new(0.01, 0.0, 0.0, 1).is_err());
        assert!(RangeProjection::new(0.01, 0.0, -1.0, 1).is_err());
        assert!(RangeProjection::new(0.01, 0.0, 100.0, 0).is_err());
        assert!(RangeProjection::new(-0.01, 0.0, 100.0, 1).is_err());
        assert!(RangeProjection::new(0.01, f64::NAN, 100.0, 1).is_err());
    }

    #[test]
    fn test_report_singular() {
        let report = RangeProjection::new(0.0126, 0.002, 100.0, 1)
            .unwrap()
            .report();

        assert_eq!(
            report,
            "Volatility over 1 session : 1.26 pct\n\
             Expected return over 1 session : 0.20 pct\n\
             Reference price: $ 100.00\n\
             Range of 1 std up or down with growth adjustment:\n\
             Low price: $ 98.84\n\
             High price: $ 101.36"
        );
    }

    #[test]
    fn test_report_plural() {
        let report = RangeProjection::new(0.05, 0.001, 200.0, 10)
            .unwrap()
            .report();

        assert!(report.starts_with("Volatility over 10 sessions : 5.00 pct\n"));
        assert!(report.contains("Expected return over 10 sessions : 1.00 pct\n"));
        assert!(report.contains("Low price: $ 191.00\n"));
        assert!(report.ends_with("High price: $ 211.00"));
    }
}
