use rstest::rstest;
use sales_forecast::{validate, validate_with, HistoricalEntry, ParameterEntry, ValidationRules};

fn row(year: Option<i32>, sales: Option<f64>) -> HistoricalEntry {
    HistoricalEntry { year, sales }
}

fn param(year: Option<i32>, percentage: Option<f64>) -> ParameterEntry {
    ParameterEntry { year, percentage }
}

fn good_history() -> Vec<HistoricalEntry> {
    vec![
        row(Some(2020), Some(1000.0)),
        row(Some(2021), Some(1200.0)),
        row(Some(2022), Some(1400.0)),
    ]
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_too_few_historical_years(#[case] count: usize) {
    let historical: Vec<_> = good_history().into_iter().take(count).collect();
    let result = validate(&historical, &[param(Some(2023), Some(5.0))]);

    assert!(!result.is_valid);
    assert!(result.message.contains("at least 3 years"));
}

#[rstest]
#[case(row(None, Some(100.0)), "Historical row 2: year must be between 1900 and 2100")]
#[case(row(Some(1899), Some(100.0)), "Historical row 2: year must be between 1900 and 2100")]
#[case(row(Some(2101), Some(100.0)), "Historical row 2: year must be between 1900 and 2100")]
#[case(row(Some(2021), None), "Historical row 2: sales must be a positive number")]
#[case(row(Some(2021), Some(0.0)), "Historical row 2: sales must be a positive number")]
#[case(row(Some(2021), Some(-5.0)), "Historical row 2: sales must be a positive number")]
fn test_bad_historical_row(#[case] bad: HistoricalEntry, #[case] expected: &str) {
    let mut historical = good_history();
    historical[1] = bad;

    let result = validate(&historical, &[param(Some(2023), Some(5.0))]);
    assert_eq!(result.errors, vec![expected.to_string()]);
}

#[rstest]
#[case(param(None, Some(5.0)), "Parameter row 1: year must be between 1900 and 2100")]
#[case(param(Some(1850), Some(5.0)), "Parameter row 1: year must be between 1900 and 2100")]
#[case(param(Some(2023), None), "Parameter row 1: percentage is required")]
fn test_bad_parameter_row(#[case] bad: ParameterEntry, #[case] expected: &str) {
    let result = validate(&good_history(), &[bad]);
    assert_eq!(result.errors, vec![expected.to_string()]);
}

#[rstest]
#[case(0.0)]
#[case(-25.0)]
#[case(150.0)]
fn test_zero_and_negative_percentages_are_valid(#[case] percentage: f64) {
    let result = validate(&good_history(), &[param(Some(2023), Some(percentage))]);
    assert!(result.is_valid);
}

#[test]
fn test_errors_accumulate_across_rows() {
    let historical = vec![row(None, None), row(Some(3000), Some(-1.0))];
    let parameters = vec![param(Some(2023), None), param(None, Some(1.0))];

    let result = validate(&historical, &parameters);
    assert_eq!(
        result.errors,
        vec![
            "Historical data must have at least 3 years",
            "Historical row 1: year must be between 1900 and 2100",
            "Historical row 1: sales must be a positive number",
            "Historical row 2: year must be between 1900 and 2100",
            "Historical row 2: sales must be a positive number",
            "Parameter row 1: percentage is required",
            "Parameter row 2: year must be between 1900 and 2100",
        ]
    );
    assert_eq!(result.message, result.errors.join(", "));
}

#[test]
fn test_custom_rules_change_messages() {
    let rules = ValidationRules {
        min_historical_years: 5,
        min_year: 2000,
        max_year: 2030,
        allow_zero_sales: true,
    };
    let historical = vec![row(Some(1999), Some(0.0))];

    let result = validate_with(&historical, &[param(Some(2024), Some(1.0))], &rules);
    assert_eq!(
        result.errors,
        vec![
            "Historical data must have at least 5 years",
            "Historical row 1: year must be between 2000 and 2030",
        ]
    );
}
