//! Compounding percentage-growth projection
//!
//! The running product carries forward unrounded. Each output point stores
//! the half-up rounded value as `sales`, and its `calculation` string shows
//! the unrounded base that was actually multiplied. With a last historical
//! value of 1000 and growth of 10% then 20%, the second point is
//! `round(1000 × 1.10 × 1.20) = 1320`.

use crate::data::{ForecastParameter, ForecastPoint, HistoricalPoint};
use crate::utils::{apply_growth, round_half_up};
use tracing::debug;

/// Project sales for each parameter, in the order given
///
/// Returns an empty vector when either input is empty. Parameters are not
/// sorted by year.
pub fn forecast(historical: &[HistoricalPoint], parameters: &[ForecastParameter]) -> Vec<ForecastPoint> {
    let Some(last) = historical.last() else {
        return Vec::new();
    };
    if parameters.is_empty() {
        return Vec::new();
    }

    let mut previous_sales = last.sales;
    let mut points = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let forecasted_sales = apply_growth(previous_sales, parameter.percentage);
        let sales = round_half_up(forecasted_sales);

        points.push(ForecastPoint {
            year: parameter.year,
            sales,
            percentage: parameter.percentage,
            calculation: format!(
                "{} × (1 + {}%) = {}",
                previous_sales, parameter.percentage, sales
            ),
        });

        previous_sales = forecasted_sales;
    }

    debug!(
        target: "forecast.project",
        base = last.sales,
        years = points.len(),
        final_sales = points.last().map(|p| p.sales),
        "Forecast computed"
    );

    points
}
