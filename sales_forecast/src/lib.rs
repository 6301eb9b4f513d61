//! # Sales Forecast
//!
//! A Rust library for year-over-year sales forecasting with compounding
//! percentage growth.
//!
//! ## Features
//!
//! - Input validation that reports every bad row in one pass
//! - Compounding projection with half-up rounded yearly figures
//! - Chart-ready series with an explicit transition point
//! - Summary statistics (totals, historical growth rates, projected growth)
//! - Loading requests from JSON or CSV files
//!
//! All four calculation functions are pure and never fail; they return empty
//! results for empty input.
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_forecast::{aggregate, combine, forecast, ForecastParameter, HistoricalPoint};
//!
//! let historical = vec![
//!     HistoricalPoint::new(2020, 1000.0),
//!     HistoricalPoint::new(2021, 1200.0),
//!     HistoricalPoint::new(2022, 1400.0),
//!     HistoricalPoint::new(2023, 1600.0),
//! ];
//! let parameters = vec![ForecastParameter::new(2024, 10.0), ForecastParameter::new(2025, 8.0)];
//!
//! let projected = forecast(&historical, &parameters);
//! assert_eq!(projected[0].sales, 1760.0);
//! assert_eq!(projected[1].sales, 1901.0);
//!
//! let graph = combine(&historical, &projected);
//! assert_eq!(graph.iter().filter(|p| p.is_transition()).count(), 1);
//!
//! let stats = aggregate(&historical, &projected).unwrap();
//! assert_eq!(stats.total_forecasted, 3661.0);
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod forecaster;
pub mod series;
pub mod statistics;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::config::ValidationRules;
pub use crate::data::{
    DataLoader, ForecastInput, ForecastParameter, ForecastPoint, GraphPoint, HistoricalEntry,
    HistoricalPoint, ParameterEntry,
};
pub use crate::engine::{calculate, calculate_with, ForecastReport};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::forecast;
pub use crate::series::combine;
pub use crate::statistics::{aggregate, Statistics};
pub use crate::validation::{validate, validate_with, ValidationResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
