//! End-to-end estimation for one price series.

use crate::error::{EstimateError, Result};
use crate::growth::GrowthSeries;
use crate::projection::RangeProjection;
use crate::returns::mean_return;
use crate::series::{PriceField, PriceSeries};
use crate::volatility::{daily_volatility, scale_to_window};

/// Daily volatility of the selected price field.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] if growth cannot be computed.
pub fn daily_volatility_of(series: &PriceSeries, field: PriceField) -> Result<f64> {
    daily_volatility(&GrowthSeries::from_prices(series, field)?)
}

/// Project the price range over `window` sessions.
///
/// The reference price is the latest selected price. Callers that fetched the
/// series for a lookback window should run
/// [`ensure_covers`](crate::sufficiency::ensure_covers) first.
///
/// # Errors
/// Returns [`EstimateError::InvalidInput`] for short series, non-positive prices
/// or a zero window.
pub fn estimate(series: &PriceSeries, field: PriceField, window: u32) -> Result<RangeProjection> {
    let growth = GrowthSeries::from_prices(series, field)?;
    let volatility = scale_to_window(daily_volatility(&growth)?, window)?;
    let mean = mean_return(&growth)?;
    let reference = series
        .last_price(field)
        .ok_or_else(|| EstimateError::invalid("empty price series"))?;

    let projection = RangeProjection::new(volatility, mean, reference, window)?;
    tracing::info!(
        symbol = series.symbol(),
        %field,
        window,
        observations = growth.len(),
        volatility,
        mean_return = mean,
        low = projection.low_price,
        high = projection.high_price,
        "projected price range"
    );
    Ok(projection)
}
