//! End-to-end calculation: validate, project, combine, aggregate

use crate::config::ValidationRules;
use crate::data::{
    ForecastInput, ForecastParameter, ForecastPoint, GraphPoint, HistoricalPoint,
};
use crate::error::{ForecastError, Result};
use crate::forecaster::forecast;
use crate::series::combine;
use crate::statistics::{aggregate, Statistics};
use crate::validation::validate_with;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything a caller needs to render or export one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub product: Option<String>,
    pub historical: Vec<HistoricalPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub graph: Vec<GraphPoint>,
    pub statistics: Statistics,
}

/// Run the full calculation with the default rules
pub fn calculate(input: &ForecastInput) -> Result<ForecastReport> {
    calculate_with(input, &ValidationRules::default())
}

/// Run the full calculation with explicit rules
///
/// Invalid input yields [`ForecastError::Validation`] carrying every problem found.
pub fn calculate_with(input: &ForecastInput, rules: &ValidationRules) -> Result<ForecastReport> {
    rules.check()?;

    let validation = validate_with(&input.historical, &input.parameters, rules);
    if !validation.is_valid {
        return Err(ForecastError::Validation(validation));
    }

    let historical = input
        .historical
        .iter()
        .map(HistoricalPoint::try_from)
        .collect::<Result<Vec<_>>>()?;
    let parameters = input
        .parameters
        .iter()
        .map(ForecastParameter::try_from)
        .collect::<Result<Vec<_>>>()?;

    let forecast = forecast(&historical, &parameters);
    let graph = combine(&historical, &forecast);
    // Validation guarantees at least one historical row.
    let statistics = aggregate(&historical, &forecast).ok_or_else(|| {
        ForecastError::InvalidParameter("no historical data to aggregate".to_string())
    })?;

    info!(
        target: "forecast.engine",
        product = input.product.as_deref().unwrap_or("-"),
        historical_years = historical.len(),
        forecast_years = forecast.len(),
        total_forecasted = statistics.total_forecasted,
        "Forecast calculated"
    );

    Ok(ForecastReport {
        product: input.product.clone(),
        historical,
        forecast,
        graph,
        statistics,
    })
}
