//! Mean single-period return.

use crate::error::{EstimateError, Result};
use crate::growth::GrowthSeries;

/// Arithmetic mean of the growth ratios minus one.
///
/// This is the average return for one period. It is not annualized and not
/// scaled to any window.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] if the series is empty.
pub fn mean_return(growth: &GrowthSeries) -> Result<f64> {
    let mean = growth.ratios().mean().ok_or_else(|| {
        EstimateError::invalid("cannot estimate mean return from an empty growth series")
    })?;

    Ok(mean - 1.0)
}
