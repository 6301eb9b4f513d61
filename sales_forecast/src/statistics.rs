//! Summary statistics over historical and projected sales

use crate::data::{ForecastPoint, HistoricalPoint};
use crate::utils::{float_repr, percent_change, round_to_decimals};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics as _;
use tracing::{debug, warn};

/// Decimal places kept for each year-over-year growth rate
pub const GROWTH_RATE_DECIMALS: i32 = 2;

/// Aggregate metrics for one calculation
///
/// Non-finite values serialize as the strings `"inf"`, `"-inf"` and `"NaN"`
/// so a JSON report reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(with = "float_repr")]
    pub total_historical: f64,
    #[serde(with = "float_repr")]
    pub total_forecasted: f64,
    /// Mean of `growth_rates`, 0 when there are none
    #[serde(with = "float_repr")]
    pub average_growth_rate: f64,
    /// Percent change from the last historical to the first projected value
    #[serde(with = "float_repr")]
    pub projected_growth: f64,
    /// Year-over-year historical growth in percent, two decimals
    #[serde(with = "float_repr::vec")]
    pub growth_rates: Vec<f64>,
    #[serde(with = "float_repr")]
    pub last_historical: f64,
    pub first_forecasted: Option<f64>,
}

impl Statistics {
    /// False when a zero denominator produced `inf` or `NaN` somewhere
    pub fn is_finite(&self) -> bool {
        self.average_growth_rate.is_finite()
            && self.projected_growth.is_finite()
            && self.growth_rates.iter().all(|rate| rate.is_finite())
    }
}

/// Compute summary statistics
///
/// Returns `None` when there is no historical data. Zero denominators are
/// not guarded and follow IEEE division.
pub fn aggregate(historical: &[HistoricalPoint], forecasted: &[ForecastPoint]) -> Option<Statistics> {
    let last_historical = historical.last()?.sales;

    let total_historical: f64 = historical.iter().map(|p| p.sales).sum();
    let total_forecasted: f64 = forecasted.iter().map(|p| p.sales).sum();

    let growth_rates: Vec<f64> = historical
        .windows(2)
        .map(|pair| round_to_decimals(percent_change(pair[0].sales, pair[1].sales), GROWTH_RATE_DECIMALS))
        .collect();

    let average_growth_rate = mean_growth_rate(&growth_rates);

    let first_forecasted = forecasted.first().map(|p| p.sales);
    let projected_growth = match first_forecasted {
        Some(first) => percent_change(last_historical, first),
        None => 0.0,
    };

    let statistics = Statistics {
        total_historical,
        total_forecasted,
        average_growth_rate,
        projected_growth,
        growth_rates,
        last_historical,
        first_forecasted,
    };

    if !statistics.is_finite() {
        warn!(
            target: "forecast.stats",
            average_growth_rate = statistics.average_growth_rate,
            projected_growth = statistics.projected_growth,
            "Zero sales denominator produced a non-finite growth rate"
        );
    }

    debug!(
        target: "forecast.stats",
        total_historical,
        total_forecasted,
        average_growth_rate = statistics.average_growth_rate,
        projected_growth = statistics.projected_growth,
        "Statistics aggregated"
    );

    Some(statistics)
}

/// Arithmetic mean, 0 for no rates
///
/// statrs uses a running mean, which turns an infinite rate into `inf - inf`.
/// Non-finite rates fall back to `sum / len` so they propagate as IEEE division would.
fn mean_growth_rate(growth_rates: &[f64]) -> f64 {
    if growth_rates.is_empty() {
        0.0
    } else if growth_rates.iter().all(|rate| rate.is_finite()) {
        growth_rates.iter().mean()
    } else {
        growth_rates.iter().sum::<f64>() / growth_rates.len() as f64
    }
}
