#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/volband/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod pipeline;
pub mod projection;
pub mod returns;
pub mod series;
pub mod sufficiency;
pub mod volatility;

pub use error::{EstimateError, Result};
pub use growth::GrowthSeries;
pub use pipeline::{daily_volatility_of, estimate};
pub use projection::RangeProjection;
pub use returns::mean_return;
pub use series::{PriceField, PriceSeries, Quote};
pub use sufficiency::{COVERAGE_TOLERANCE_DAYS, check_coverage, ensure_covers};
pub use volatility::{daily_volatility, scale_to_window, window_volatility};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
