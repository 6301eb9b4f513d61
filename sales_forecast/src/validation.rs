//! Input validation
//!
//! Problems are collected rather than short-circuited so a user sees every
//! bad row in one pass. Row numbers in messages are 1-based.

use crate::config::ValidationRules;
use crate::data::{HistoricalEntry, ParameterEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of validating one calculation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// All errors joined with `", "`
    pub message: String,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            message: errors.join(", "),
            errors,
        }
    }
}

/// Validate input against the default rules
pub fn validate(historical: &[HistoricalEntry], parameters: &[ParameterEntry]) -> ValidationResult {
    validate_with(historical, parameters, &ValidationRules::default())
}

/// Validate input against explicit rules
pub fn validate_with(
    historical: &[HistoricalEntry],
    parameters: &[ParameterEntry],
    rules: &ValidationRules,
) -> ValidationResult {
    let mut errors = Vec::new();

    if historical.len() < rules.min_historical_years {
        errors.push(format!(
            "Historical data must have at least {} years",
            rules.min_historical_years
        ));
    }

    for (index, entry) in historical.iter().enumerate() {
        let row = index + 1;

        if !entry.year.is_some_and(|year| rules.year_in_range(year)) {
            errors.push(format!(
                "Historical row {}: year must be between {} and {}",
                row, rules.min_year, rules.max_year
            ));
        }

        if !entry.sales.is_some_and(|sales| sales_acceptable(sales, rules)) {
            let expected = if rules.allow_zero_sales {
                "a non-negative number"
            } else {
                "a positive number"
            };
            errors.push(format!("Historical row {}: sales must be {}", row, expected));
        }
    }

    if parameters.is_empty() {
        errors.push("At least one forecasting parameter is required".to_string());
    }

    for (index, entry) in parameters.iter().enumerate() {
        let row = index + 1;

        if !entry.year.is_some_and(|year| rules.year_in_range(year)) {
            errors.push(format!(
                "Parameter row {}: year must be between {} and {}",
                row, rules.min_year, rules.max_year
            ));
        }

        // Zero and negative growth are both legitimate requests.
        if entry.percentage.is_none() {
            errors.push(format!("Parameter row {}: percentage is required", row));
        }
    }

    debug!(
        target: "forecast.validate",
        historical = historical.len(),
        parameters = parameters.len(),
        errors = errors.len(),
        "Input validated"
    );

    ValidationResult::from_errors(errors)
}

fn sales_acceptable(sales: f64, rules: &ValidationRules) -> bool {
    if sales.is_nan() || sales < 0.0 {
        return false;
    }
    sales > 0.0 || rules.allow_zero_sales
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, sales: f64) -> HistoricalEntry {
        HistoricalEntry {
            year: Some(year),
            sales: Some(sales),
        }
    }

    fn param(year: i32, percentage: f64) -> ParameterEntry {
        ParameterEntry {
            year: Some(year),
            percentage: Some(percentage),
        }
    }

    #[test]
    fn test_valid_input() {
        let historical = vec![row(2020, 1000.0), row(2021, 1200.0), row(2022, 1400.0)];
        let parameters = vec![param(2023, 0.0)];

        let result = validate(&historical, &parameters);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_message_joins_errors_in_order() {
        let historical = vec![row(2020, 1000.0)];

        let result = validate(&historical, &[]);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Historical data must have at least 3 years".to_string(),
                "At least one forecasting parameter is required".to_string(),
            ]
        );
        assert_eq!(
            result.message,
            "Historical data must have at least 3 years, At least one forecasting parameter is required"
        );
    }

    #[test]
    fn test_zero_sales_rejected_unless_allowed() {
        let historical = vec![row(2020, 0.0), row(2021, 1200.0), row(2022, 1400.0)];
        let parameters = vec![param(2023, 5.0)];

        let result = validate(&historical, &parameters);
        assert_eq!(
            result.errors,
            vec!["Historical row 1: sales must be a positive number".to_string()]
        );

        let rules = ValidationRules {
            allow_zero_sales: true,
            ..ValidationRules::default()
        };
        assert!(validate_with(&historical, &parameters, &rules).is_valid);
    }

    #[test]
    fn test_nan_sales_rejected() {
        let historical = vec![row(2020, f64::NAN), row(2021, 1200.0), row(2022, 1400.0)];
        let result = validate(&historical, &[param(2023, 5.0)]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }
}
