//! Single-period growth ratios.
//!
//! A growth ratio is `price[t+1] / price[t]`, a gross return for one session.
//! Each ratio is dated at the later of its two prices, the session in which
//! the growth was realized.

use crate::error::{EstimateError, Result};
use crate::series::{PriceField, PriceSeries};
use chrono::NaiveDate;
use ndarray::Array1;

/// Growth ratios derived from a price series.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSeries {
    dates: Vec<NaiveDate>,
    ratios: Array1<f64>,
}

impl GrowthSeries {
    /// Compute growth ratios for the selected price field.
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidInput`] if the series has fewer than two
    /// quotes or any selected price is zero, negative, or not finite.
    pub fn from_prices(series: &PriceSeries, field: PriceField) -> Result<Self> {
        if series.len() < 2 {
            return Err(EstimateError::invalid(format!(
                "need at least 2 prices to compute growth, got {}",
                series.len()
            )));
        }

        let quotes = series.quotes();
        if let Some(bad) = quotes
            .iter()
            .find(|q| !(q.price(field).is_finite() && q.price(field) > 0.0))
        {
            return Err(EstimateError::invalid(format!(
                "{} {} on {} is not a positive price",
                field,
                bad.price(field),
                bad.date
            )));
        }

        let (dates, ratios): (Vec<_>, Vec<_>) = quotes
            .windows(2)
            .map(|w| (w[1].date, w[1].price(field) / w[0].price(field)))
            .unzip();

        Self::from_ratios(dates, ratios)
    }

    /// Wrap precomputed ratios.
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidInput`] if lengths differ or a ratio is not
    /// finite and strictly positive.
    pub fn from_ratios(dates: Vec<NaiveDate>, ratios: Vec<f64>) -> Result<Self> {
        if dates.len() != ratios.len() {
            return Err(EstimateError::invalid(format!(
                "{} dates for {} growth ratios",
                dates.len(),
                ratios.len()
            )));
        }

        if let Some(r) = ratios.iter().find(|r| !(r.is_finite() && **r > 0.0)) {
            return Err(EstimateError::invalid(format!(
                "growth ratio {r} is not finite and positive"
            )));
        }

        Ok(Self {
            dates,
            ratios: Array1::from_vec(ratios),
        })
    }

    /// Realization date of each ratio.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Ratio values.
    pub const fn ratios(&self) -> &Array1<f64> {
        &self.ratios
    }

    /// Number of ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether there are no ratios.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Iterate `(date, ratio)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.ratios.iter().copied())
    }
}
