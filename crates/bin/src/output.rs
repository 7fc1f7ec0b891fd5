//! Report rendering.

use clap::ValueEnum;
use serde_json::{Value, json};
use volband::{PriceSeries, RangeProjection};
use volband_data::EstimationConfig;

/// Output format for the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text report
    Text,
    /// JSON document
    Json,
}

pub(crate) fn render(
    format: OutputFormat,
    series: &PriceSeries,
    config: &EstimationConfig,
    projection: &RangeProjection,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(series, projection)),
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(series, config, projection)),
    }
}

fn render_text(series: &PriceSeries, projection: &RangeProjection) -> String {
    let mut out = String::new();
    out.push_str(&format!("Symbol: {}\n", series.symbol()));
    if let (Some(first), Some(last)) = (series.first_date(), series.last_date()) {
        out.push_str(&format!(
            "History: {first} to {last} ({} sessions)\n\n",
            series.len()
        ));
    }
    out.push_str(&projection.report());
    out
}

fn render_json(
    series: &PriceSeries,
    config: &EstimationConfig,
    projection: &RangeProjection,
) -> Value {
    json!({
        "symbol": series.symbol(),
        "first_date": series.first_date().map(|d| d.to_string()),
        "last_date": series.last_date().map(|d| d.to_string()),
        "observations": series.len(),
        "config": config,
        "projection": projection,
        "expected_return": projection.expected_return(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use volband::{PriceField, estimate};

    fn fixture() -> (PriceSeries, RangeProjection) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let series = PriceSeries::from_prices(
            "FIXT",
            [100.0, 101.0, 99.0, 100.0]
                .into_iter()
                .enumerate()
                .map(|(i, p)| (start + chrono::Duration::days(i as i64), p)),
        )
        .unwrap();
        let projection = estimate(&series, PriceField::AdjustedClose, 1).unwrap();
        (series, projection)
    }

    #[test]
    fn test_text_output() {
        let (series, projection) = fixture();
        let text = render(
            OutputFormat::Text,
            &series,
            &EstimationConfig::default(),
            &projection,
        )
        .unwrap();

        assert!(text.starts_with("Symbol: FIXT\nHistory: 2024-01-02 to 2024-01-05 (4 sessions)\n\n"));
        assert!(text.contains("Volatility over 1 session : 1.41 pct\n"));
        assert!(text.ends_with("High price: $ 101.41"));
    }

    #[test]
    fn test_json_output() {
        let (series, projection) = fixture();
        let config = EstimationConfig {
            window: 1,
            ..Default::default()
        };
        let value = render_json(&series, &config, &projection);

        assert_eq!(value["symbol"], "FIXT");
        assert_eq!(value["observations"], 4);
        assert_eq!(value["last_date"], "2024-01-05");
        assert_eq!(value["config"]["window"], 1);
        assert_eq!(value["config"]["selection"], "adjusted_close");
        assert_eq!(value["projection"]["period_count"], 1);
    }
}
