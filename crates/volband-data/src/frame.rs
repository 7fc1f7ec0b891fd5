//! Conversion from quote frames to price series.

use crate::error::{DataError, Result};
use chrono::{DateTime, Days, NaiveDate};
use polars::prelude::*;
use volband::{PriceField, PriceSeries, Quote};

/// Convert a quote frame into a [`PriceSeries`].
///
/// Expects a `date` column of dtype `Date` and one `f64` column per
/// [`PriceField`]. Rows are sorted by date first.
///
/// # Errors
/// Returns [`DataError::Parse`] on missing columns or null cells, and
/// [`DataError::Estimate`] if the sorted dates repeat.
pub fn price_series(symbol: &str, quotes: &DataFrame) -> Result<PriceSeries> {
    let sorted = quotes
        .clone()
        .lazy()
        .sort(["date"], SortMultipleOptions::default())
        .collect()?;

    let dates = column(&sorted, "date")?.cast(&DataType::Int32)?;
    let dates = dates.i32()?;
    let [open, high, low, close, adjusted_close] =
        PriceField::all().map(|field| price_column(&sorted, field));
    let (open, high, low, close, adjusted_close) = (
        open?.f64()?.clone(),
        high?.f64()?.clone(),
        low?.f64()?.clone(),
        close?.f64()?.clone(),
        adjusted_close?.f64()?.clone(),
    );

    let mut rows = Vec::with_capacity(sorted.height());
    for i in 0..sorted.height() {
        let date = dates
            .get(i)
            .ok_or_else(|| null_cell(symbol, "date", i))
            .and_then(epoch_days_to_date)?;
        let cell = |values: &Float64Chunked, name: &str| {
            values.get(i).ok_or_else(|| null_cell(symbol, name, i))
        };

        rows.push(Quote {
            date,
            open: cell(&open, "open")?,
            high: cell(&high, "high")?,
            low: cell(&low, "low")?,
            close: cell(&close, "close")?,
            adjusted_close: cell(&adjusted_close, "adjusted_close")?,
        });
    }

    tracing::debug!(symbol, rows = rows.len(), "converted quote frame");
    Ok(PriceSeries::new(symbol, rows)?)
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| DataError::Parse(format!("quote frame has no '{name}' column")))
}

fn price_column(df: &DataFrame, field: PriceField) -> Result<Column> {
    Ok(column(df, field.column_name())?.cast(&DataType::Float64)?)
}

fn null_cell(symbol: &str, name: &str, row: usize) -> DataError {
    DataError::Parse(format!("{symbol}: null '{name}' in row {row}"))
}

fn epoch_days_to_date(days: i32) -> Result<NaiveDate> {
    let epoch = DateTime::UNIX_EPOCH.date_naive();
    let shifted = if days >= 0 {
        epoch.checked_add_days(Days::new(days.unsigned_abs().into()))
    } else {
        epoch.checked_sub_days(Days::new(days.unsigned_abs().into()))
    };
    shifted.ok_or_else(|| DataError::Parse(format!("date {days} days from epoch is out of range")))
}
