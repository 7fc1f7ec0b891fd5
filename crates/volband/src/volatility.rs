//! Historical volatility from growth ratios.
//!
//! Daily volatility is the population standard deviation (no Bessel
//! correction) of the single-period growth ratios. Volatility over a window
//! of `w` periods assumes i.i.d. period returns, so variance grows linearly
//! with `w` and the standard deviation with `sqrt(w)`.

use crate::error::{EstimateError, Result};
use crate::growth::GrowthSeries;

/// Population standard deviation of the growth ratios.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] if the series is empty.
pub fn daily_volatility(growth: &GrowthSeries) -> Result<f64> {
    if growth.is_empty() {
        return Err(EstimateError::invalid(
            "cannot estimate volatility from an empty growth series",
        ));
    }

    let vol = growth.ratios().std(0.0);
    tracing::debug!(observations = growth.len(), daily_volatility = vol, "estimated daily volatility");
    Ok(vol)
}

/// Daily volatility scaled to `window` periods.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] if the series is empty or `window` is zero.
pub fn window_volatility(growth: &GrowthSeries, window: u32) -> Result<f64> {
    check_window(window)?;
    scale_to_window(daily_volatility(growth)?, window)
}

/// Scale a single-period volatility to `window` periods: `daily * sqrt(window)`.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] if `window` is zero or `daily` is
/// negative or not finite.
pub fn scale_to_window(daily: f64, window: u32) -> Result<f64> {
    check_window(window)?;
    if !(daily.is_finite() && daily >= 0.0) {
        return Err(EstimateError::invalid(format!(
            "volatility {daily} must be finite and non-negative"
        )));
    }
    Ok(daily * f64::from(window).sqrt())
}

fn check_window(window: u32) -> Result<()> {
    if window < 1 {
        return Err(EstimateError::invalid("window must be at least 1 period"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn growth(ratios: &[f64]) -> GrowthSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..ratios.len())
            .map(|i| start + chrono::Duration::days(i as i64 + 1))
            .collect();
        GrowthSeries::from_ratios(dates, ratios.to_vec()).unwrap()
    }

    #[test]
    fn test_population_std_dev() {
        // Population variance of [1,2,3,4,5] is 2.0 (sample variance would be 2.5)
        let vol = daily_volatility(&growth(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert_relative_eq!(vol, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_single_observation_has_zero_volatility() {
        assert_eq!(daily_volatility(&growth(&[1.05])).unwrap(), 0.0);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(21)]
    #[case(252)]
    fn test_constant_growth_has_zero_volatility(#[case] window: u32) {
        let g = growth(&[1.0; 30]);
        assert_eq!(window_volatility(&g, window).unwrap(), 0.0);
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(21)]
    #[case(63)]
    fn test_scaling_law(#[case] window: u32) {
        let g = growth(&[1.01, 0.99, 1.02, 0.97, 1.0, 1.03]);
        let daily = daily_volatility(&g).unwrap();
        assert_relative_eq!(
            window_volatility(&g, window).unwrap(),
            daily * (window as f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_window_rejected() {
        let g = growth(&[1.01, 0.99]);
        assert!(matches!(window_volatility(&g, 0), Err(EstimateError::InvalidInput(_))));
        assert!(matches!(scale_to_window(0.01, 0), Err(EstimateError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_series_rejected() {
        let g = growth(&[]);
        assert!(matches!(daily_volatility(&g), Err(EstimateError::InvalidInput(_))));
        assert!(matches!(window_volatility(&g, 21), Err(EstimateError::InvalidInput(_))));
    }

    #[test]
    fn test_scale_rejects_bad_volatility() {
        assert!(scale_to_window(-0.1, 5).is_err());
        assert!(scale_to_window(f64::NAN, 5).is_err());
    }
}
