// src/cli.rs

use clap::{Args as ClapArgs, Parser, Subcommand};
use sales_forecast::{DataLoader, ForecastInput, Result, ValidationRules};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sales-forecast", author, version, about = "Compounding sales forecasts from historical figures", long_about = None)]
pub struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check input files and list every problem found
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate, project and summarise; optionally export a report
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Write the report to this file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Report format; inferred from the export file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct InputArgs {
    /// JSON request with `historical` and `parameters` arrays
    #[arg(short, long, conflicts_with_all = ["historical", "parameters"], required_unless_present = "historical")]
    pub input: Option<PathBuf>,

    /// CSV file with `year,sales` rows
    #[arg(long, requires = "parameters")]
    pub historical: Option<PathBuf>,

    /// CSV file with `year,percentage` rows
    #[arg(long, requires = "historical")]
    pub parameters: Option<PathBuf>,

    /// Product name to show in reports (overrides the one in the JSON request)
    #[arg(long)]
    pub product: Option<String>,

    /// JSON file with validation rules (minHistoricalYears, minYear, maxYear, allowZeroSales)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Forecast, chart and statistics sections as CSV
    Csv,
    /// The full report as JSON
    Json,
}

impl ExportFormat {
    /// Pick a format from a file extension, defaulting to CSV
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

impl InputArgs {
    /// Read the request from whichever files were given
    pub fn load(&self) -> Result<ForecastInput> {
        let mut input = match (&self.input, &self.historical, &self.parameters) {
            (Some(json), _, _) => DataLoader::from_json(json)?,
            (None, Some(historical), Some(parameters)) => {
                DataLoader::from_csv_pair(historical, parameters)?
            }
            // clap enforces one of the two shapes
            _ => ForecastInput::default(),
        };

        if let Some(product) = &self.product {
            input.product = Some(product.clone());
        }

        Ok(input)
    }

    pub fn rules(&self) -> Result<ValidationRules> {
        match &self.config {
            Some(path) => ValidationRules::from_json(path),
            None => Ok(ValidationRules::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_csv_inputs() {
        let args = Args::try_parse_from([
            "sales-forecast",
            "forecast",
            "--historical",
            "h.csv",
            "--parameters",
            "p.csv",
            "--export",
            "out.json",
        ])
        .unwrap();

        match args.command {
            Command::Forecast { input, export, format } => {
                assert_eq!(input.historical, Some(PathBuf::from("h.csv")));
                assert_eq!(format, None);
                assert_eq!(ExportFormat::infer(&export.unwrap()), ExportFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_input_shapes_are_exclusive() {
        assert!(Args::try_parse_from(["sales-forecast", "validate"]).is_err());
        assert!(Args::try_parse_from([
            "sales-forecast",
            "validate",
            "--input",
            "a.json",
            "--historical",
            "h.csv",
            "--parameters",
            "p.csv",
        ])
        .is_err());
        assert!(Args::try_parse_from(["sales-forecast", "validate", "--historical", "h.csv"]).is_err());
    }
}
