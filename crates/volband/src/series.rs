//! Price series for a single equity.

use crate::error::{EstimateError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which quote field drives estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// Opening price
    Open,
    /// Session high
    High,
    /// Session low
    Low,
    /// Unadjusted closing price
    Close,
    /// Closing price adjusted for splits and dividends
    #[default]
    AdjustedClose,
}

impl PriceField {
    /// All selectable fields.
    pub const fn all() -> [Self; 5] {
        [
            Self::Open,
            Self::High,
            Self::Low,
            Self::Close,
            Self::AdjustedClose,
        ]
    }

    /// Column name used by quote frames.
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::AdjustedClose => "adjusted_close",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for PriceField {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            "adjustedclose" | "adjclose" | "adjusted" => Ok(Self::AdjustedClose),
            _ => Err(EstimateError::invalid(format!("unknown price field: {s}"))),
        }
    }
}

/// One session of OHLC prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Session date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Session high
    pub high: f64,
    /// Session low
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Adjusted closing price
    pub adjusted_close: f64,
}

impl Quote {
    /// Quote with every field set to the same price.
    pub const fn flat(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            open: price,
            high: price,
            low: price,
            close: price,
            adjusted_close: price,
        }
    }

    /// Price for the selected field.
    pub const fn price(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::AdjustedClose => self.adjusted_close,
        }
    }
}

/// Quotes for one symbol, ordered by strictly increasing date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    quotes: Vec<Quote>,
}

impl PriceSeries {
    /// Create a price series.
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidInput`] if dates are not strictly increasing.
    pub fn new(symbol: impl Into<String>, quotes: Vec<Quote>) -> Result<Self> {
        if let Some(pair) = quotes.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(EstimateError::invalid(format!(
                "dates must be strictly increasing: {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        Ok(Self {
            symbol: symbol.into(),
            quotes,
        })
    }

    /// Build a series from `(date, price)` pairs, using the price for every field.
    pub fn from_prices<I>(symbol: impl Into<String>, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let quotes = points
            .into_iter()
            .map(|(date, price)| Quote::flat(date, price))
            .collect();
        Self::new(symbol, quotes)
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Quotes in date order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes.
    pub const fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the series has no quotes.
    pub const fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Date of the earliest quote.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.quotes.first().map(|q| q.date)
    }

    /// Date of the latest quote.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.quotes.last().map(|q| q.date)
    }

    /// Selected prices in date order.
    pub fn prices(&self, field: PriceField) -> Vec<f64> {
        self.quotes.iter().map(|q| q.price(field)).collect()
    }

    /// Latest selected price.
    pub fn last_price(&self, field: PriceField) -> Option<f64> {
        self.quotes.last().map(|q| q.price(field))
    }
}
