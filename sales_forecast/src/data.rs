//! Sales data shapes and input loading

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One observed year of sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Calendar year
    pub year: i32,
    /// Sales recorded for the year
    pub sales: f64,
}

impl HistoricalPoint {
    pub fn new(year: i32, sales: f64) -> Self {
        Self { year, sales }
    }
}

/// Requested growth (in percent, may be negative) for one future year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastParameter {
    /// Calendar year the growth applies to
    pub year: i32,
    /// Growth relative to the previous year, in percent
    pub percentage: f64,
}

impl ForecastParameter {
    pub fn new(year: i32, percentage: f64) -> Self {
        Self { year, percentage }
    }
}

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    /// Projected sales, rounded half-up to a whole number
    ///
    /// Kept as `f64` so a huge growth factor yields a large or infinite value
    /// rather than a clamped integer.
    pub sales: f64,
    pub percentage: f64,
    /// Human readable formula, e.g. `1600 × (1 + 10%) = 1760`
    pub calculation: String,
}

/// One chart point; at most one of the two series is null
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub year: i32,
    pub historical: Option<f64>,
    pub forecasted: Option<f64>,
}

impl GraphPoint {
    /// True for the point shared by both series
    pub fn is_transition(&self) -> bool {
        self.historical.is_some() && self.forecasted.is_some()
    }
}

/// A historical row as entered by a user; any field may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub year: Option<i32>,
    pub sales: Option<f64>,
}

/// A parameter row as entered by a user; any field may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub year: Option<i32>,
    pub percentage: Option<f64>,
}

impl From<HistoricalPoint> for HistoricalEntry {
    fn from(point: HistoricalPoint) -> Self {
        Self {
            year: Some(point.year),
            sales: Some(point.sales),
        }
    }
}

impl From<ForecastParameter> for ParameterEntry {
    fn from(parameter: ForecastParameter) -> Self {
        Self {
            year: Some(parameter.year),
            percentage: Some(parameter.percentage),
        }
    }
}

impl TryFrom<&HistoricalEntry> for HistoricalPoint {
    type Error = ForecastError;

    fn try_from(entry: &HistoricalEntry) -> Result<Self> {
        let year = entry
            .year
            .ok_or_else(|| ForecastError::MissingField("historical year".to_string()))?;
        let sales = entry
            .sales
            .ok_or_else(|| ForecastError::MissingField(format!("sales for {}", year)))?;

        Ok(Self { year, sales })
    }
}

impl TryFrom<&ParameterEntry> for ForecastParameter {
    type Error = ForecastError;

    fn try_from(entry: &ParameterEntry) -> Result<Self> {
        let year = entry
            .year
            .ok_or_else(|| ForecastError::MissingField("parameter year".to_string()))?;
        let percentage = entry
            .percentage
            .ok_or_else(|| ForecastError::MissingField(format!("percentage for {}", year)))?;

        Ok(Self { year, percentage })
    }
}

/// A single calculation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    /// Product the figures belong to, carried through to reports
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub historical: Vec<HistoricalEntry>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

impl ForecastInput {
    /// Build a request from already typed points
    pub fn from_points(historical: &[HistoricalPoint], parameters: &[ForecastParameter]) -> Self {
        Self {
            product: None,
            historical: historical.iter().copied().map(HistoricalEntry::from).collect(),
            parameters: parameters.iter().copied().map(ParameterEntry::from).collect(),
        }
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }
}

// Unparseable cells become `None` so the validator can report them by row.
#[derive(Debug, Deserialize)]
struct HistoricalCsvRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    sales: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ParameterCsvRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    percentage: Option<f64>,
}

/// Data loader for forecast input files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a whole request from a JSON document
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<ForecastInput> {
        let file = File::open(path)?;
        let input = serde_json::from_reader(BufReader::new(file))?;
        Ok(input)
    }

    /// Load historical rows from a CSV file with `year,sales` headers
    pub fn historical_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalEntry>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

        let mut entries = Vec::new();
        for row in reader.deserialize::<HistoricalCsvRow>() {
            let row = row?;
            entries.push(HistoricalEntry {
                year: row.year,
                sales: row.sales,
            });
        }

        Ok(entries)
    }

    /// Load parameter rows from a CSV file with `year,percentage` headers
    pub fn parameters_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ParameterEntry>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

        let mut entries = Vec::new();
        for row in reader.deserialize::<ParameterCsvRow>() {
            let row = row?;
            entries.push(ParameterEntry {
                year: row.year,
                percentage: row.percentage,
            });
        }

        Ok(entries)
    }

    /// Load a request from a pair of CSV files
    pub fn from_csv_pair<P: AsRef<Path>, Q: AsRef<Path>>(
        historical: P,
        parameters: Q,
    ) -> Result<ForecastInput> {
        Ok(ForecastInput {
            product: None,
            historical: Self::historical_from_csv(historical)?,
            parameters: Self::parameters_from_csv(parameters)?,
        })
    }
}
