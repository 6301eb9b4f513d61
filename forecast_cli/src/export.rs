// src/export.rs

use crate::cli::ExportFormat;
use chrono::{DateTime, Utc};
use sales_forecast::{ForecastReport, Result, Statistics, ValidationResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a ForecastReport,
}

/// Write the report to `path` in the requested format
pub fn export_report(report: &ForecastReport, path: &Path, format: ExportFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(report, &mut writer)?,
        ExportFormat::Json => write_json(report, Utc::now(), &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Forecast table, chart series and statistics as consecutive CSV sections
pub fn write_csv<W: Write>(report: &ForecastReport, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(["year", "sales", "percentage", "calculation"])?;
    for point in &report.forecast {
        csv.write_record([
            point.year.to_string(),
            point.sales.to_string(),
            point.percentage.to_string(),
            point.calculation.clone(),
        ])?;
    }

    csv.write_record(["year", "historical", "forecasted"])?;
    for point in &report.graph {
        csv.write_record([
            point.year.to_string(),
            optional_cell(point.historical),
            optional_cell(point.forecasted),
        ])?;
    }

    csv.write_record(["metric", "value"])?;
    for (metric, value) in statistics_rows(&report.statistics) {
        csv.write_record([metric.to_string(), value])?;
    }

    csv.flush()?;
    Ok(())
}

/// The full report as pretty-printed JSON, stamped with `generated_at`
pub fn write_json<W: Write>(
    report: &ForecastReport,
    generated_at: DateTime<Utc>,
    writer: W,
) -> Result<()> {
    let exported = ExportedReport {
        generated_at,
        report,
    };
    serde_json::to_writer_pretty(writer, &exported)?;
    Ok(())
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn statistics_rows(stats: &Statistics) -> Vec<(&'static str, String)> {
    let growth_rates = stats
        .growth_rates
        .iter()
        .map(|rate| format!("{:.2}", rate))
        .collect::<Vec<_>>()
        .join(";");

    vec![
        ("totalHistorical", stats.total_historical.to_string()),
        ("totalForecasted", stats.total_forecasted.to_string()),
        ("averageGrowthRate", format!("{:.2}", stats.average_growth_rate)),
        ("projectedGrowth", format!("{:.2}", stats.projected_growth)),
        ("growthRates", growth_rates),
        ("lastHistorical", stats.last_historical.to_string()),
        ("firstForecasted", optional_cell(stats.first_forecasted)),
    ]
}

/// Print the forecast table and statistics to stdout
pub fn print_report(report: &ForecastReport) {
    if let Some(product) = &report.product {
        println!("Forecast for {}", product);
    }

    println!("{:<6} {:>12} {:>10}  {}", "Year", "Sales", "Growth", "Calculation");
    for point in &report.forecast {
        println!(
            "{:<6} {:>12} {:>9}%  {}",
            point.year, point.sales, point.percentage, point.calculation
        );
    }

    let stats = &report.statistics;
    println!();
    println!("Summary Statistics:");
    println!("  Total Historical:    {}", stats.total_historical);
    println!("  Total Forecasted:    {}", stats.total_forecasted);
    println!("  Average Growth Rate: {:.2}%", stats.average_growth_rate);
    println!("  Projected Growth:    {:.2}%", stats.projected_growth);
    if !stats.is_finite() {
        println!("  Note: a zero sales figure made some growth rates undefined");
        println!("        (JSON exports write them as \"inf\", \"-inf\" or \"NaN\" strings)");
    }
}

/// Print every validation problem, one per line
pub fn print_validation(result: &ValidationResult) {
    if result.is_valid {
        println!("Input is valid");
        return;
    }

    println!("Input is invalid ({} problems):", result.errors.len());
    for error in &result.errors {
        println!("  - {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use sales_forecast::{
        calculate, calculate_with, ForecastInput, ForecastParameter, HistoricalPoint,
        ValidationRules,
    };
    use tempfile::tempdir;

    fn report() -> ForecastReport {
        let historical = vec![
            HistoricalPoint::new(2021, 1200.0),
            HistoricalPoint::new(2022, 1400.0),
            HistoricalPoint::new(2023, 1600.0),
        ];
        let parameters = vec![ForecastParameter::new(2024, 10.0)];
        calculate(&ForecastInput::from_points(&historical, &parameters).with_product("Crates"))
            .unwrap()
    }

    #[test]
    fn test_csv_sections() {
        let mut buffer = Vec::new();
        write_csv(&report(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,sales,percentage,calculation");
        assert_eq!(lines[1], "2024,1760,10,1600 × (1 + 10%) = 1760");
        assert_eq!(lines[2], "year,historical,forecasted");
        assert_eq!(lines[3], "2021,1200,");
        assert_eq!(lines[5], "2023,1600,1600");
        assert_eq!(lines[6], "2024,,1760");
        assert_eq!(lines[7], "metric,value");
        assert!(lines.contains(&"totalForecasted,1760"));
        assert!(lines.contains(&"growthRates,16.67;14.29"));
    }

    #[test]
    fn test_json_report() {
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut buffer = Vec::new();
        write_json(&report(), generated_at, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["generatedAt"], "2024-01-02T03:04:05Z");
        assert_eq!(value["product"], "Crates");
        assert_eq!(value["statistics"]["totalForecasted"], 1760.0);
        assert_eq!(value["graph"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_report_keeps_non_finite_statistics() {
        let historical = vec![
            HistoricalPoint::new(2021, 0.0),
            HistoricalPoint::new(2022, 50.0),
            HistoricalPoint::new(2023, 100.0),
        ];
        let rules = ValidationRules {
            allow_zero_sales: true,
            ..ValidationRules::default()
        };
        let report = calculate_with(
            &ForecastInput::from_points(&historical, &[ForecastParameter::new(2024, 10.0)]),
            &rules,
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_json(&report, Utc::now(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["statistics"]["averageGrowthRate"], "inf");
        assert_eq!(value["statistics"]["growthRates"][0], "inf");

        let back: ForecastReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");

        export_report(&report(), &path, ExportFormat::Csv).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("year,sales,percentage,calculation"));
    }
}
