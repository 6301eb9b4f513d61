// src/main.rs

mod cli;
mod export;

use clap::Parser;
use cli::{Args, Command, ExportFormat, InputArgs};
use sales_forecast::{calculate_with, validate_with, ForecastError};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Library events use `forecast.*` targets; the `forecast` prefix also covers this binary.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "forecast=debug"
    } else {
        "forecast_cli=info,forecast=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();
}

/// How a command finished when no I/O or configuration error stopped it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// The input failed validation; exits with status 1
    Invalid,
}

impl Outcome {
    fn exit_status(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Invalid => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_status())
    }
}

fn run_validate(input: &InputArgs) -> Result<Outcome, Box<dyn Error>> {
    let rules = input.rules()?;
    let request = input.load()?;

    let result = validate_with(&request.historical, &request.parameters, &rules);
    export::print_validation(&result);

    Ok(if result.is_valid {
        Outcome::Success
    } else {
        Outcome::Invalid
    })
}

fn run_forecast(
    input: &InputArgs,
    export_path: Option<&PathBuf>,
    format: Option<ExportFormat>,
) -> Result<Outcome, Box<dyn Error>> {
    let rules = input.rules()?;
    let request = input.load()?;

    let report = match calculate_with(&request, &rules) {
        Ok(report) => report,
        Err(ForecastError::Validation(result)) => {
            export::print_validation(&result);
            return Ok(Outcome::Invalid);
        }
        Err(e) => return Err(e.into()),
    };

    export::print_report(&report);

    if let Some(path) = export_path {
        let format = format.unwrap_or_else(|| ExportFormat::infer(path));
        export::export_report(&report, path, format)?;
        info!(path = %path.display(), ?format, "Report exported");
    }

    Ok(Outcome::Success)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = match &args.command {
        Command::Validate { input } => run_validate(input),
        Command::Forecast {
            input,
            export,
            format,
        } => run_forecast(input, export.as_ref(), *format),
    };

    match outcome {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
