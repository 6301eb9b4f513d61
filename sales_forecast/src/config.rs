//! Validation rules used by the validator and the pipeline

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Earliest year accepted by default
pub const DEFAULT_MIN_YEAR: i32 = 1900;
/// Latest year accepted by default
pub const DEFAULT_MAX_YEAR: i32 = 2100;
/// Minimum number of historical rows required by default
pub const DEFAULT_MIN_HISTORICAL_YEARS: usize = 3;

/// Bounds applied when validating user input
///
/// Every field has a default, so a partial JSON document such as
/// `{"maxYear": 2200}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum number of historical rows
    pub min_historical_years: usize,
    /// Earliest accepted year, inclusive
    pub min_year: i32,
    /// Latest accepted year, inclusive
    pub max_year: i32,
    /// Accept a historical sales figure of exactly zero
    pub allow_zero_sales: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_historical_years: DEFAULT_MIN_HISTORICAL_YEARS,
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            allow_zero_sales: false,
        }
    }
}

impl ValidationRules {
    /// Load rules from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let rules: Self = serde_json::from_reader(BufReader::new(file))?;
        rules.check()?;
        Ok(rules)
    }

    /// Reject rules that no input could satisfy
    pub fn check(&self) -> Result<()> {
        if self.min_historical_years == 0 {
            return Err(ForecastError::InvalidParameter(
                "minHistoricalYears must be at least 1".to_string(),
            ));
        }

        if self.min_year > self.max_year {
            return Err(ForecastError::InvalidParameter(format!(
                "minYear ({}) must not exceed maxYear ({})",
                self.min_year, self.max_year
            )));
        }

        Ok(())
    }

    /// Whether a year lies within the configured bounds
    pub fn year_in_range(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}
